//! Pre-built Test Fixtures
//!
//! Provides ready-to-use IDs, reference tables, and clocks. Everything here
//! is deterministic so assertions can use literal expected values.

use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::FixedClock;
use domain_national_id::{
    Generation, GenerationTable, Governorate, GovernorateTable, NationalIdCodec, ReferenceTables,
};
use once_cell::sync::Lazy;

static BUNDLED: Lazy<Arc<ReferenceTables>> =
    Lazy::new(|| ReferenceTables::bundled().expect("bundled reference data must load"));

/// Fixture for National ID strings
pub struct IdFixtures;

impl IdFixtures {
    /// Male, born 1998-01-01 in Qalyubia
    pub fn valid_male_1998() -> &'static str {
        "29801011401891"
    }

    /// Born 2018-11-21 in Qalyubia
    pub fn valid_2018() -> &'static str {
        "31811211401891"
    }

    /// Female (gender digit 8), born 2018-01-01
    pub fn valid_female_2018() -> &'static str {
        "31801011401881"
    }

    /// Leading digit 1
    pub fn invalid_century() -> &'static str {
        "19801011401891"
    }

    /// Month 13
    pub fn invalid_month() -> &'static str {
        "29813321401891"
    }

    /// December 32nd
    pub fn invalid_day() -> &'static str {
        "29812321401891"
    }

    /// Governorate 99
    pub fn unknown_governorate() -> &'static str {
        "29801019901891"
    }

    /// Nine digits
    pub fn too_short() -> &'static str {
        "123456789"
    }

    /// Letter in the check digit position
    pub fn non_numeric() -> &'static str {
        "2980101140189A"
    }
}

/// Fixture for reference tables
pub struct TableFixtures;

impl TableFixtures {
    /// The bundled tables, parsed once per test binary
    pub fn bundled() -> Arc<ReferenceTables> {
        Arc::clone(&BUNDLED)
    }

    /// Two governorates only: Cairo (01) and Qalyubia (14)
    pub fn small_governorates() -> GovernorateTable {
        GovernorateTable::new([
            Governorate::new("01", "Cairo", "القاهرة"),
            Governorate::new("14", "Qalyubia", "القليوبية"),
        ])
        .expect("fixture governorates are valid")
    }

    /// Overlapping generations where the earlier entry takes precedence
    pub fn overlapping_generations() -> GenerationTable {
        GenerationTable::new([
            Generation::new("Early Cohort", 1990, 2000),
            Generation::new("Late Cohort", 1995, 2010),
        ])
        .expect("fixture generations are valid")
    }

    /// Small synthetic tables
    pub fn synthetic() -> ReferenceTables {
        ReferenceTables::new(Self::small_governorates(), Self::overlapping_generations())
    }
}

/// Fixture for dates and clocks
pub struct ClockFixtures;

impl ClockFixtures {
    /// Reference "today" used throughout the suite
    pub fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
    }

    /// Clock pinned to [`reference_date`](Self::reference_date)
    pub fn reference_clock() -> FixedClock {
        FixedClock::new(Self::reference_date())
    }
}

/// Fixture for ready-made codecs
pub struct CodecFixtures;

impl CodecFixtures {
    /// Bundled tables, clock pinned to the reference date
    pub fn reference() -> NationalIdCodec<FixedClock> {
        NationalIdCodec::new(TableFixtures::bundled(), ClockFixtures::reference_clock())
    }

    /// Bundled tables, clock pinned to `today`
    pub fn at(today: NaiveDate) -> NationalIdCodec<FixedClock> {
        NationalIdCodec::new(TableFixtures::bundled(), FixedClock::new(today))
    }

    /// Synthetic tables, clock pinned to the reference date
    pub fn synthetic() -> NationalIdCodec<FixedClock> {
        NationalIdCodec::new(TableFixtures::synthetic(), ClockFixtures::reference_clock())
    }
}
