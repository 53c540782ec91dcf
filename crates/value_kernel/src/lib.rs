//! Value Kernel - immutable value objects for domain primitives
//!
//! This crate provides validated, comparable building blocks:
//! - Date and date-time ranges with a shared interval algebra
//! - Money types with precise decimal arithmetic
//! - IP and MAC addresses with canonical text and binary forms

pub mod config;
pub mod error;
pub mod money;
pub mod network;
pub mod temporal;

pub use crate::config::KernelConfig;
pub use error::CoreError;
pub use money::{Currency, Money, MoneyError};
pub use network::{IpAddress, IpNetwork, MacAddress, NetworkError};
pub use temporal::{
    is_contiguous, series_end, series_span, series_start, Boundedness, DateRange, DateTimeRange,
    FromInstant, Instant, LooseBounds, TemporalError, TemporalRange, Timezone,
};
