//! National ID validation rules
//!
//! Validation runs in two stages.
//!
//! # Format
//! - Every character must be a decimal digit
//! - Length must be exactly 14
//!
//! Both format checks run, but a failure in either stops validation: no
//! field is inspected on malformed input.
//!
//! # Fields
//! - Century digit must be `2` or `3`
//! - Year, month, and day must form a real calendar date that is not after today
//! - Governorate code must exist in the governorate table
//!
//! Field errors are collected rather than short-circuited and are reported
//! in the order century, date, governorate.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::error::NationalIdError;
use crate::fields::IdFields;
use crate::layout::ID_LENGTH;
use crate::reference::GovernorateTable;

/// Result of National ID validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether the ID is valid
    pub is_valid: bool,
    /// Validation errors, in the order they were found; `null` when valid
    #[serde(serialize_with = "errors_or_null")]
    pub errors: Vec<NationalIdError>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Creates a failed validation result with errors
    pub fn fail(errors: Vec<NationalIdError>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: NationalIdError) {
        self.errors.push(error);
        self.is_valid = false;
    }

    /// Error messages, or `None` when valid
    pub fn messages(&self) -> Option<Vec<String>> {
        if self.errors.is_empty() {
            None
        } else {
            Some(self.errors.iter().map(ToString::to_string).collect())
        }
    }

    /// True when any error carries `needle` in its message
    pub fn has_error_containing(&self, needle: &str) -> bool {
        self.errors.iter().any(|e| e.to_string().contains(needle))
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

fn errors_or_null<S>(errors: &[NationalIdError], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if errors.is_empty() {
        serializer.serialize_none()
    } else {
        serializer.collect_seq(errors)
    }
}

/// Strips surrounding whitespace, the only normalization applied to input
pub fn normalize(raw: &str) -> &str {
    raw.trim()
}

/// First gate: the shape of the string
pub struct FormatValidator;

impl FormatValidator {
    /// Checks digit-ness and length of an already-normalized ID
    ///
    /// An empty string fails the digit check as well as the length check.
    pub fn validate(id: &str) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
            result.add_error(NationalIdError::NonDigit);
        }

        let got = id.chars().count();
        if got != ID_LENGTH {
            result.add_error(NationalIdError::InvalidLength { got });
        }

        result
    }
}

/// Second gate: the meaning of each field
pub struct FieldValidator<'t> {
    governorates: &'t GovernorateTable,
}

impl<'t> FieldValidator<'t> {
    pub fn new(governorates: &'t GovernorateTable) -> Self {
        Self { governorates }
    }

    /// Checks century, birth date, and governorate
    ///
    /// # Arguments
    ///
    /// * `fields` - Fields of an ID that passed format validation
    /// * `today` - The date birth dates are compared against
    pub fn validate(&self, fields: &IdFields<'_>, today: NaiveDate) -> ValidationResult {
        self.verify(fields, today).err().unwrap_or_default()
    }

    /// Like [`validate`](Self::validate), yielding the birth date when every
    /// field is valid
    ///
    /// # Errors
    ///
    /// Returns the failed `ValidationResult`, which always carries at least
    /// one error.
    pub fn verify(&self, fields: &IdFields<'_>, today: NaiveDate) -> Result<NaiveDate, ValidationResult> {
        let mut result = ValidationResult::ok();

        Self::validate_century(fields, &mut result);
        let birth_date = Self::validate_birth_date(fields, today, &mut result);
        self.validate_governorate(fields, &mut result);

        match birth_date {
            Some(date) if result.is_valid => Ok(date),
            _ => Err(result),
        }
    }

    fn validate_century(fields: &IdFields<'_>, result: &mut ValidationResult) {
        if fields.century().is_none() {
            result.add_error(NationalIdError::InvalidCentury {
                digit: fields.century_digit,
            });
        }
    }

    fn validate_birth_date(
        fields: &IdFields<'_>,
        today: NaiveDate,
        result: &mut ValidationResult,
    ) -> Option<NaiveDate> {
        match fields.birth_date() {
            Ok(date) if date > today => {
                result.add_error(NationalIdError::FutureBirthDate { date });
                None
            }
            Ok(date) => Some(date),
            Err(e) => {
                result.add_error(NationalIdError::InvalidDate(e));
                None
            }
        }
    }

    fn validate_governorate(&self, fields: &IdFields<'_>, result: &mut ValidationResult) {
        if !self.governorates.contains(fields.governorate_code) {
            result.add_error(NationalIdError::UnknownGovernorate {
                code: fields.governorate_code.to_string(),
            });
        }
    }
}
