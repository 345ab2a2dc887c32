//! Custom Test Assertions
//!
//! Provides assertion helpers for validation results and decoded records
//! that print the full error list on failure.

use domain_national_id::{DecodedRecord, ValidationResult};

/// Asserts that a validation result is valid with no errors
pub fn assert_valid(result: &ValidationResult) {
    assert!(
        result.is_valid && result.errors.is_empty(),
        "Expected a valid ID, got errors: {:?}",
        result.messages()
    );
}

/// Asserts that a validation result is invalid and one error mentions `needle`
pub fn assert_invalid_with(result: &ValidationResult, needle: &str) {
    assert!(!result.is_valid, "Expected an invalid ID");
    assert!(
        result.has_error_containing(needle),
        "Expected an error containing {:?}, got {:?}",
        needle,
        result.messages()
    );
}

/// Asserts that only format errors were reported
pub fn assert_only_format_errors(result: &ValidationResult) {
    assert!(!result.is_valid, "Expected an invalid ID");
    assert!(
        !result.errors.is_empty() && result.errors.iter().all(|e| e.is_format_error()),
        "Expected format errors only, got {:?}",
        result.messages()
    );
}

/// Asserts the birth date fields of a decoded record
pub fn assert_birth_date(record: &DecodedRecord, year: i32, month: u32, day: u32) {
    assert_eq!(
        (record.birth_year, record.birth_month, record.birth_day),
        (year, month, day),
        "Birth date mismatch for {}",
        record.national_id
    );
    assert_eq!(
        record.birth_date.to_string(),
        format!("{:04}-{:02}-{:02}", year, month, day)
    );
}
