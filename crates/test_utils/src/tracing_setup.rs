//! Tracing subscriber for test runs

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use value_kernel::KernelConfig;

/// Installs a test-writer `fmt` subscriber once per process
///
/// The filter comes from `RUST_LOG` when set, otherwise from the kernel
/// configuration's `log_level` (itself read from `VALUES_LOG_LEVEL` or a
/// `.env` file). Later calls are no-ops.
pub fn init_test_tracing() {
    dotenvy::dotenv().ok();
    let log_level = KernelConfig::from_env()
        .map(|config| config.log_level)
        .unwrap_or_else(|_| KernelConfig::default().log_level);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}
