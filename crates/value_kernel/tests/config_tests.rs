//! Tests for loading the kernel configuration from the environment

use value_kernel::KernelConfig;

#[test]
fn test_from_env_overrides_defaults() {
    std::env::set_var("VALUES_LOOSE_START_KEY", "valid_from");
    std::env::set_var("VALUES_LOG_LEVEL", "debug");

    let config = KernelConfig::from_env().unwrap();

    assert_eq!(config.loose_start_key, "valid_from");
    assert_eq!(config.loose_end_key, "end");
    assert_eq!(config.log_level, "debug");
}
