//! Positional layout of a National ID
//!
//! ```text
//!  index:  0   1 2   3 4   5 6   7 8   9 10 11 12   13
//!         ┌─┬───┬───┬───┬───┬──────────────┬──┐
//!         │C│ Y │ M │ D │ G │    serial    │K │
//!         └─┴───┴───┴───┴───┴──────────┬───┴──┘
//!                                  gender digit (12)
//! ```
//!
//! C = century, Y = year, M = month, D = day, G = governorate,
//! K = check digit. The gender digit is the last digit of the serial.

use std::ops::Range;

/// Number of digits in a National ID
pub const ID_LENGTH: usize = 14;

/// A named field of the National ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Century,
    Year,
    Month,
    Day,
    Governorate,
    Serial,
    GenderDigit,
    CheckDigit,
}

/// Every field, in positional order
pub const LAYOUT: [Field; 8] = [
    Field::Century,
    Field::Year,
    Field::Month,
    Field::Day,
    Field::Governorate,
    Field::Serial,
    Field::GenderDigit,
    Field::CheckDigit,
];

impl Field {
    /// Half-open character range occupied by the field
    pub const fn span(self) -> Range<usize> {
        match self {
            Field::Century => 0..1,
            Field::Year => 1..3,
            Field::Month => 3..5,
            Field::Day => 5..7,
            Field::Governorate => 7..9,
            Field::Serial => 9..13,
            Field::GenderDigit => 12..13,
            Field::CheckDigit => 13..14,
        }
    }

    /// Number of digits in the field
    pub const fn width(self) -> usize {
        let span = self.span();
        span.end - span.start
    }

    /// Slices the field out of an ID that has passed format validation
    ///
    /// Returns `None` when `id` is too short to hold the field or the span
    /// does not fall on character boundaries.
    pub fn slice(self, id: &str) -> Option<&str> {
        id.get(self.span())
    }

    /// The field parsed as an unsigned number
    pub fn number(self, id: &str) -> Option<u32> {
        self.slice(id).and_then(|digits| digits.parse().ok())
    }
}
