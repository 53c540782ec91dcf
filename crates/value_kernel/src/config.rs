//! Kernel configuration

use serde::Deserialize;

/// Kernel configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KernelConfig {
    /// Log level filter used when a subscriber is installed
    pub log_level: String,
    /// Record key holding the start of a loosely specified range
    pub loose_start_key: String,
    /// Record key holding the end of a loosely specified range
    pub loose_end_key: String,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            loose_start_key: "start".to_string(),
            loose_end_key: "end".to_string(),
        }
    }
}

impl KernelConfig {
    /// Loads configuration from `VALUES_*` environment variables over the defaults
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("loose_start_key", defaults.loose_start_key)?
            .set_default("loose_end_key", defaults.loose_end_key)?
            .add_source(config::Environment::with_prefix("VALUES"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_start_and_end_keys() {
        let config = KernelConfig::default();
        assert_eq!(config.loose_start_key, "start");
        assert_eq!(config.loose_end_key, "end");
        assert_eq!(config.log_level, "info");
    }
}
