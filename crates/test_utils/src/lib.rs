//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! national ID test suite.
//!
//! # Modules
//!
//! - `fixtures`: Known IDs, synthetic reference tables, and pinned clocks
//! - `builders`: Builder for composing IDs field by field
//! - `assertions`: Assertion helpers for validation results and records
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
