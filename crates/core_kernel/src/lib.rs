//! Core Kernel - Foundational types and utilities for national ID decoding
//!
//! This crate provides the building blocks used by the domain crates:
//! - Calendar construction with descriptive failure details
//! - Whole-year age arithmetic
//! - Clock and timezone abstractions so "today" can be injected

pub mod calendar;
pub mod temporal;

pub use calendar::{calendar_date, age_in_years, CalendarError};
pub use temporal::{Clock, SystemClock, FixedClock, Timezone, TemporalError};
