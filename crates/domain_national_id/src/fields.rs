//! Typed views of the National ID fields

use std::fmt;

use chrono::NaiveDate;
use core_kernel::{calendar_date, CalendarError};
use serde::{Deserialize, Serialize};

use crate::layout::{Field, ID_LENGTH};

/// The hundred-year span selected by the leading digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Century {
    /// Digit `2`: births 1900-1999
    Twentieth,
    /// Digit `3`: births 2000-2099
    TwentyFirst,
}

impl Century {
    /// Century for a valid digit, `None` otherwise
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '2' => Some(Century::Twentieth),
            '3' => Some(Century::TwentyFirst),
            _ => None,
        }
    }

    /// Century used to resolve the year even when the digit is invalid
    ///
    /// Only `2` maps to the 1900s; anything else is read as the 2000s, so a
    /// date error can still be reported next to a century error.
    pub fn resolve(digit: char) -> Self {
        Self::from_digit(digit).unwrap_or(Century::TwentyFirst)
    }

    pub fn base_year(self) -> i32 {
        match self {
            Century::Twentieth => 1900,
            Century::TwentyFirst => 2000,
        }
    }

    /// Four-digit year for a two-digit year within this century
    pub fn full_year(self, two_digit_year: u32) -> i32 {
        // two_digit_year comes from a two-digit field, so it is at most 99
        self.base_year() + two_digit_year as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            Century::Twentieth => "20th century (1900-1999)",
            Century::TwentyFirst => "21st century (2000+)",
        }
    }
}

/// Gender encoded by the parity of the last serial digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Odd digits are male, even digits female
    pub fn from_digit(digit: u32) -> Self {
        if digit % 2 == 1 {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw field values of an ID that passed format validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdFields<'a> {
    pub century_digit: char,
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub governorate_code: &'a str,
    pub serial: &'a str,
    pub gender_digit: u32,
    pub check_digit: u32,
}

impl<'a> IdFields<'a> {
    /// Splits a 14-digit string into its fields
    ///
    /// Returns `None` unless `id` is exactly 14 ASCII digits.
    pub fn parse(id: &'a str) -> Option<Self> {
        if id.len() != ID_LENGTH || !id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(Self {
            century_digit: Field::Century.slice(id)?.chars().next()?,
            year: Field::Year.number(id)?,
            month: Field::Month.number(id)?,
            day: Field::Day.number(id)?,
            governorate_code: Field::Governorate.slice(id)?,
            serial: Field::Serial.slice(id)?,
            gender_digit: Field::GenderDigit.number(id)?,
            check_digit: Field::CheckDigit.number(id)?,
        })
    }

    /// The century, if the leading digit is a valid one
    pub fn century(&self) -> Option<Century> {
        Century::from_digit(self.century_digit)
    }

    /// Four-digit birth year, resolved speculatively for invalid centuries
    pub fn full_year(&self) -> i32 {
        Century::resolve(self.century_digit).full_year(self.year)
    }

    pub fn birth_date(&self) -> Result<NaiveDate, CalendarError> {
        calendar_date(self.full_year(), self.month, self.day)
    }

    pub fn gender(&self) -> Gender {
        Gender::from_digit(self.gender_digit)
    }
}
