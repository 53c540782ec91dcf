//! Network address value objects
//!
//! Thin wrappers giving IP and MAC addresses validated construction, a
//! canonical text form and a fixed binary form.

pub mod ip;
pub mod mac;

use thiserror::Error;

pub use ip::{IpAddress, IpNetwork};
pub use mac::MacAddress;

/// Errors related to network address handling
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    #[error("Prefix length {prefix_len} exceeds {max} bits")]
    InvalidPrefix {
        prefix_len: u8,
        max: u8,
    },

    #[error("Invalid MAC address: {0}")]
    InvalidMacAddress(String),

    #[error("Expected {expected} bytes, got {actual}")]
    InvalidLength {
        expected: &'static str,
        actual: usize,
    },
}
