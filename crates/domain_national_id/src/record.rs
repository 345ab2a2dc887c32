//! Decoded National ID records

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::NationalIdError;
use crate::fields::Gender;
use crate::reference::{Generation, Governorate};

/// Name used when a lookup has no match
pub const UNKNOWN: &str = "Unknown";
/// Arabic counterpart of [`UNKNOWN`]
pub const UNKNOWN_ARABIC: &str = "غير معروف";
/// Year range reported for an unknown generation
pub const NO_YEAR_RANGE: &str = "N/A";

/// Governorate block of a decoded record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GovernorateInfo {
    pub code: String,
    pub name_english: String,
    pub name_arabic: String,
}

impl GovernorateInfo {
    /// Builds the block for `code`, falling back to "Unknown" names
    pub fn new(code: &str, governorate: Option<&Governorate>) -> Self {
        match governorate {
            Some(g) => Self {
                code: code.to_string(),
                name_english: g.english.clone(),
                name_arabic: g.arabic.clone(),
            },
            None => Self {
                code: code.to_string(),
                name_english: UNKNOWN.to_string(),
                name_arabic: UNKNOWN_ARABIC.to_string(),
            },
        }
    }
}

/// Generation block of a decoded record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationInfo {
    pub name: String,
    pub year_range: String,
}

impl GenerationInfo {
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN.to_string(),
            year_range: NO_YEAR_RANGE.to_string(),
        }
    }
}

impl From<Option<&Generation>> for GenerationInfo {
    fn from(generation: Option<&Generation>) -> Self {
        generation.map_or_else(Self::unknown, |g| Self {
            name: g.name.clone(),
            year_range: g.year_range(),
        })
    }
}

/// Everything a valid National ID encodes
///
/// Only ever built from an ID that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedRecord {
    /// The normalized ID
    pub national_id: String,
    pub is_valid: bool,
    /// Serialized as `YYYY-MM-DD`
    pub birth_date: NaiveDate,
    pub birth_year: i32,
    pub birth_month: u32,
    pub birth_day: u32,
    /// Whole years as of the codec's clock
    pub age: u32,
    /// Century label, e.g. "20th century (1900-1999)"
    pub century: String,
    pub generation: GenerationInfo,
    pub governorate: GovernorateInfo,
    pub gender: Gender,
    /// Digits 9..13, leading zeros kept
    pub serial_number: String,
}

/// Outcome of checking one ID, in the shape callers display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NationalIdResponse {
    Valid(DecodedRecord),
    Invalid {
        national_id: String,
        is_valid: bool,
        errors: Vec<NationalIdError>,
    },
}

impl NationalIdResponse {
    pub fn invalid(national_id: impl Into<String>, errors: Vec<NationalIdError>) -> Self {
        NationalIdResponse::Invalid {
            national_id: national_id.into(),
            is_valid: false,
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, NationalIdResponse::Valid(_))
    }

    pub fn national_id(&self) -> &str {
        match self {
            NationalIdResponse::Valid(record) => &record.national_id,
            NationalIdResponse::Invalid { national_id, .. } => national_id,
        }
    }

    pub fn record(&self) -> Option<&DecodedRecord> {
        match self {
            NationalIdResponse::Valid(record) => Some(record),
            NationalIdResponse::Invalid { .. } => None,
        }
    }

    pub fn errors(&self) -> &[NationalIdError] {
        match self {
            NationalIdResponse::Valid(_) => &[],
            NationalIdResponse::Invalid { errors, .. } => errors,
        }
    }
}
