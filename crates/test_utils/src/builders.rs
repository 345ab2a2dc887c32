//! Test Data Builders
//!
//! Provides a builder for composing National IDs field by field. Tests set
//! only the fields they care about; the defaults produce
//! `29801011401891`, a valid ID for a male born 1998-01-01 in Qalyubia.

use chrono::{Datelike, NaiveDate};

/// Builder for constructing National ID strings
///
/// Values are formatted without range checks, so the builder can also
/// produce invalid IDs (century 1, month 13, governorate 99, ...).
#[derive(Debug, Clone)]
pub struct NationalIdBuilder {
    century_digit: char,
    year: u32,
    month: u32,
    day: u32,
    governorate: String,
    serial_prefix: u32,
    gender_digit: u32,
    check_digit: u32,
}

impl Default for NationalIdBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NationalIdBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            century_digit: '2',
            year: 98,
            month: 1,
            day: 1,
            governorate: "14".to_string(),
            serial_prefix: 18,
            gender_digit: 9,
            check_digit: 1,
        }
    }

    /// Sets century, year, month, and day from a date
    ///
    /// Years before 2000 get century digit 2, later years 3.
    pub fn with_birth_date(mut self, date: NaiveDate) -> Self {
        self.century_digit = if date.year() < 2000 { '2' } else { '3' };
        self.year = date.year().rem_euclid(100) as u32;
        self.month = date.month();
        self.day = date.day();
        self
    }

    /// Sets the century digit verbatim
    pub fn with_century_digit(mut self, digit: char) -> Self {
        self.century_digit = digit;
        self
    }

    /// Sets the two-digit year
    pub fn with_year(mut self, year: u32) -> Self {
        self.year = year;
        self
    }

    /// Sets the month field
    pub fn with_month(mut self, month: u32) -> Self {
        self.month = month;
        self
    }

    /// Sets the day field
    pub fn with_day(mut self, day: u32) -> Self {
        self.day = day;
        self
    }

    /// Sets the governorate code
    pub fn with_governorate(mut self, code: impl Into<String>) -> Self {
        self.governorate = code.into();
        self
    }

    /// Sets the first three serial digits
    pub fn with_serial_prefix(mut self, prefix: u32) -> Self {
        self.serial_prefix = prefix;
        self
    }

    /// Sets the last serial digit, which encodes gender
    pub fn with_gender_digit(mut self, digit: u32) -> Self {
        self.gender_digit = digit;
        self
    }

    /// Uses an odd gender digit
    pub fn male(self) -> Self {
        self.with_gender_digit(1)
    }

    /// Uses an even gender digit
    pub fn female(self) -> Self {
        self.with_gender_digit(2)
    }

    /// Sets the check digit
    pub fn with_check_digit(mut self, digit: u32) -> Self {
        self.check_digit = digit;
        self
    }

    /// Builds the ID string
    pub fn build(&self) -> String {
        format!(
            "{}{:02}{:02}{:02}{}{:03}{}{}",
            self.century_digit,
            self.year,
            self.month,
            self.day,
            self.governorate,
            self.serial_prefix,
            self.gender_digit,
            self.check_digit,
        )
    }
}
