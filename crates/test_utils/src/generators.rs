//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating National IDs, both valid
//! ones (relative to a given "today") and malformed ones.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use proptest::sample::select;

use crate::builders::NationalIdBuilder;
use crate::fixtures::TableFixtures;

/// Earliest birth date an ID can encode
pub fn earliest_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid date")
}

/// Strategy for birth dates between 1900-01-01 and `today`, inclusive
pub fn birth_date_strategy(today: NaiveDate) -> impl Strategy<Value = NaiveDate> {
    let span = (today - earliest_birth_date()).num_days().max(0);
    (0i64..=span).prop_map(|offset| earliest_birth_date() + Duration::days(offset))
}

/// Strategy for governorate codes present in the bundled table
pub fn governorate_code_strategy() -> impl Strategy<Value = String> {
    let codes: Vec<String> = TableFixtures::bundled()
        .governorates
        .iter()
        .map(|g| g.code.clone())
        .collect();
    select(codes)
}

/// Strategy for a single decimal digit
pub fn digit_strategy() -> impl Strategy<Value = u32> {
    0u32..10u32
}

/// Strategy for IDs that are valid on `today` under the bundled tables
pub fn valid_national_id_strategy(today: NaiveDate) -> impl Strategy<Value = String> {
    (
        birth_date_strategy(today),
        governorate_code_strategy(),
        0u32..1000u32,
        digit_strategy(),
        digit_strategy(),
    )
        .prop_map(|(birth_date, governorate, serial, gender, check)| {
            NationalIdBuilder::new()
                .with_birth_date(birth_date)
                .with_governorate(governorate)
                .with_serial_prefix(serial)
                .with_gender_digit(gender)
                .with_check_digit(check)
                .build()
        })
}

/// Strategy for strings containing at least one ASCII letter
pub fn non_digit_strategy() -> impl Strategy<Value = String> {
    "[0-9]{0,13}[A-Za-z][0-9A-Za-z]{0,13}"
}

/// Strategy for all-digit strings whose length is not 14
pub fn wrong_length_digits_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{1,13}", "[0-9]{15,24}"]
}

/// Strategy for any two-digit code missing from the bundled table
pub fn unknown_governorate_strategy() -> impl Strategy<Value = String> {
    (0u32..100u32)
        .prop_map(|n| format!("{:02}", n))
        .prop_filter("code must be unassigned", |code| {
            !TableFixtures::bundled().governorates.contains(code)
        })
}
