//! National ID domain errors

use std::path::PathBuf;

use chrono::NaiveDate;
use core_kernel::CalendarError;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// A reason a National ID was rejected
///
/// The `Display` output is the stable, user-facing message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NationalIdError {
    #[error("National ID must contain only digits")]
    NonDigit,

    #[error("National ID must be exactly 14 digits (got {got})")]
    InvalidLength { got: usize },

    #[error("Invalid century digit: {digit} (must be 2 or 3)")]
    InvalidCentury { digit: char },

    #[error("Invalid date of birth: {0}")]
    InvalidDate(#[from] CalendarError),

    #[error("Birth date cannot be in the future: {date}")]
    FutureBirthDate { date: NaiveDate },

    #[error("Invalid governorate code: {code}")]
    UnknownGovernorate { code: String },
}

/// Which validation stage produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input is not a 14-digit string; nothing else was inspected
    Format,
    /// A century, date, or governorate field is wrong
    Field,
}

impl NationalIdError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NationalIdError::NonDigit | NationalIdError::InvalidLength { .. } => ErrorCategory::Format,
            _ => ErrorCategory::Field,
        }
    }

    pub fn is_format_error(&self) -> bool {
        self.category() == ErrorCategory::Format
    }
}

impl Serialize for NationalIdError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Failure to load the governorate or generation reference data
///
/// These are deployment errors. They abort start-up and are never reported
/// as a per-ID validation failure.
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("Failed to read reference data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed {dataset} data: {source}")]
    Parse {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{dataset} table is empty")]
    Empty { dataset: &'static str },

    #[error("Governorate code must be two digits, found {code:?}")]
    InvalidGovernorateCode { code: String },

    #[error("Duplicate governorate code: {code}")]
    DuplicateGovernorate { code: String },

    #[error("Generation {name:?} starts after it ends ({start_year} > {end_year})")]
    InvalidGenerationRange {
        name: String,
        start_year: i32,
        end_year: i32,
    },
}
