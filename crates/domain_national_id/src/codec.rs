//! The National ID codec
//!
//! [`NationalIdCodec`] ties the layout, the validators, and the reference
//! tables together. It owns no mutable state: every call is a function of
//! its input, the tables, and the date reported by its [`Clock`], so one
//! instance can be shared across threads behind an `Arc`.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use core_kernel::{age_in_years, Clock, SystemClock};
use tracing::debug;

use crate::error::ReferenceDataError;
use crate::fields::{Century, IdFields};
use crate::record::{DecodedRecord, GenerationInfo, GovernorateInfo, NationalIdResponse};
use crate::reference::ReferenceTables;
use crate::validation::{normalize, FieldValidator, FormatValidator, ValidationResult};

/// Number of leading digits left readable by [`mask`]
const UNMASKED_PREFIX: usize = 7;

/// Validates and decodes Egyptian National IDs
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use core_kernel::FixedClock;
/// use domain_national_id::{NationalIdCodec, ReferenceTables};
///
/// let tables = ReferenceTables::bundled().unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let codec = NationalIdCodec::new(tables, FixedClock::new(today));
///
/// let record = codec.extract_info("29801011401891").unwrap();
/// assert_eq!(record.birth_year, 1998);
/// assert_eq!(record.governorate.name_english, "Qalyubia");
/// assert_eq!(record.age, 26);
///
/// assert!(!codec.validate("123456789").is_valid);
/// ```
#[derive(Debug, Clone)]
pub struct NationalIdCodec<C = SystemClock> {
    tables: Arc<ReferenceTables>,
    clock: C,
}

impl NationalIdCodec<SystemClock> {
    /// Codec over the bundled tables and the system clock in Cairo time
    ///
    /// # Errors
    ///
    /// Returns a `ReferenceDataError` if the bundled datasets are corrupt.
    pub fn bundled() -> Result<Self, ReferenceDataError> {
        Ok(Self::new(ReferenceTables::bundled()?, SystemClock::default()))
    }
}

impl<C: Clock> NationalIdCodec<C> {
    pub fn new(tables: impl Into<Arc<ReferenceTables>>, clock: C) -> Self {
        Self {
            tables: tables.into(),
            clock,
        }
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Validates a raw ID against today's date
    ///
    /// Never fails on malformed input; problems are reported in the result.
    pub fn validate(&self, raw: &str) -> ValidationResult {
        self.validate_on(raw, self.clock.today())
    }

    /// Validates a raw ID as if `today` were the current date
    pub fn validate_on(&self, raw: &str, today: NaiveDate) -> ValidationResult {
        self.inspect(normalize(raw), today).err().unwrap_or_default()
    }

    /// Decodes a raw ID, or returns `None` if it does not validate
    pub fn extract_info(&self, raw: &str) -> Option<DecodedRecord> {
        self.extract_info_on(raw, self.clock.today())
    }

    /// Decodes a raw ID as if `today` were the current date
    pub fn extract_info_on(&self, raw: &str, today: NaiveDate) -> Option<DecodedRecord> {
        let id = normalize(raw);
        let (fields, birth_date) = self.inspect(id, today).ok()?;
        Some(self.decode(id, &fields, birth_date, today))
    }

    /// Validates and, when valid, decodes a raw ID
    pub fn check(&self, raw: &str) -> NationalIdResponse {
        self.check_on(raw, self.clock.today())
    }

    /// [`check`](Self::check) as if `today` were the current date
    pub fn check_on(&self, raw: &str, today: NaiveDate) -> NationalIdResponse {
        let id = normalize(raw);
        match self.inspect(id, today) {
            Ok((fields, birth_date)) => {
                NationalIdResponse::Valid(self.decode(id, &fields, birth_date, today))
            }
            Err(result) => NationalIdResponse::invalid(id, result.errors),
        }
    }

    /// Runs both validation stages on a normalized ID
    ///
    /// An ID parses into fields exactly when it passes format validation, so
    /// the error side always carries at least one error.
    fn inspect<'a>(
        &self,
        id: &'a str,
        today: NaiveDate,
    ) -> Result<(IdFields<'a>, NaiveDate), ValidationResult> {
        let outcome = match IdFields::parse(id) {
            Some(fields) => FieldValidator::new(&self.tables.governorates)
                .verify(&fields, today)
                .map(|birth_date| (fields, birth_date)),
            None => Err(FormatValidator::validate(id)),
        };

        debug!(
            national_id = %mask(id),
            is_valid = outcome.is_ok(),
            error_count = outcome.as_ref().err().map_or(0, |r| r.errors.len()),
            "National ID validated"
        );

        outcome
    }

    fn decode(
        &self,
        id: &str,
        fields: &IdFields<'_>,
        birth_date: NaiveDate,
        today: NaiveDate,
    ) -> DecodedRecord {
        let governorate_code = fields.governorate_code;
        let governorate = GovernorateInfo::new(
            governorate_code,
            self.tables.governorates.get(governorate_code),
        );
        let generation = GenerationInfo::from(self.tables.generations.find(birth_date.year()));

        DecodedRecord {
            national_id: id.to_string(),
            is_valid: true,
            birth_date,
            birth_year: birth_date.year(),
            birth_month: birth_date.month(),
            birth_day: birth_date.day(),
            age: age_in_years(birth_date, today),
            century: Century::resolve(fields.century_digit).label().to_string(),
            generation,
            governorate,
            gender: fields.gender(),
            serial_number: fields.serial.to_string(),
        }
    }
}

/// Hides everything after the birth date, e.g. `2980101*******`
pub fn mask(id: &str) -> String {
    id.chars()
        .enumerate()
        .map(|(i, c)| if i < UNMASKED_PREFIX { c } else { '*' })
        .collect()
}
