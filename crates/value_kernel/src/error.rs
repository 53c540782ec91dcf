//! Kernel-wide error type

use thiserror::Error;
use crate::money::MoneyError;
use crate::network::NetworkError;
use crate::temporal::TemporalError;

/// Any error raised by the kernel's value objects
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::Configuration(err.to_string())
    }
}
