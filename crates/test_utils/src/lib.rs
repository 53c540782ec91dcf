//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! value kernel test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built ranges, amounts and addresses
//! - `assertions`: Custom assertion helpers for range types
//! - `generators`: Property-based test data generators
//! - `tracing_setup`: Subscriber installation for test runs

pub mod fixtures;
pub mod assertions;
pub mod generators;
pub mod tracing_setup;

pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
pub use tracing_setup::init_test_tracing;
