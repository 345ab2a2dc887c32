//! Governorate and generation reference tables
//!
//! Both tables are static datasets loaded once at start-up and read-only
//! afterwards. The default datasets are compiled into the crate; a
//! deployment may point at replacement JSON files with the same shape:
//!
//! ```json
//! { "governorates": [ { "code": "01", "english": "Cairo", "arabic": "القاهرة" } ] }
//! { "generations":  [ { "name": "Generation Z", "start_year": 1997, "end_year": 2012 } ] }
//! ```
//!
//! The bundled generation dataset ends with "Generation Beta" (2026-2039),
//! one cohort past the published Alpha range, so current births resolve to
//! a named generation instead of `Unknown`. Supply a replacement file to
//! drop it.
//!
//! Every problem with the data (unreadable file, bad JSON, malformed code,
//! duplicate code, inverted year range, empty table) is a
//! [`ReferenceDataError`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ReferenceDataError;
use crate::layout::Field;

/// Bundled governorate dataset
pub const BUNDLED_GOVERNORATES: &str = include_str!("../data/governorates.json");

/// Bundled generation dataset
pub const BUNDLED_GENERATIONS: &str = include_str!("../data/generations.json");

const GOVERNORATES: &str = "governorates";
const GENERATIONS: &str = "generations";

/// An administrative region and its names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Governorate {
    /// Two-digit code as it appears in the ID
    pub code: String,
    pub english: String,
    pub arabic: String,
}

impl Governorate {
    pub fn new(code: impl Into<String>, english: impl Into<String>, arabic: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            english: english.into(),
            arabic: arabic.into(),
        }
    }
}

#[derive(Deserialize)]
struct GovernorateDataset {
    governorates: Vec<Governorate>,
}

/// Governorates keyed by their two-digit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GovernorateTable {
    entries: BTreeMap<String, Governorate>,
}

impl GovernorateTable {
    /// Builds a table, rejecting malformed and duplicate codes
    pub fn new(governorates: impl IntoIterator<Item = Governorate>) -> Result<Self, ReferenceDataError> {
        let mut entries = BTreeMap::new();

        for governorate in governorates {
            let code = &governorate.code;
            let well_formed = code.len() == Field::Governorate.width()
                && code.bytes().all(|b| b.is_ascii_digit());
            if !well_formed {
                warn!(code = %code, "Rejecting malformed governorate code");
                return Err(ReferenceDataError::InvalidGovernorateCode { code: code.clone() });
            }
            if entries.contains_key(code) {
                warn!(code = %code, "Rejecting duplicate governorate code");
                return Err(ReferenceDataError::DuplicateGovernorate { code: code.clone() });
            }
            entries.insert(code.clone(), governorate);
        }

        if entries.is_empty() {
            return Err(ReferenceDataError::Empty { dataset: GOVERNORATES });
        }

        Ok(Self { entries })
    }

    /// Parses a `{"governorates": [...]}` document
    pub fn from_json(json: &str) -> Result<Self, ReferenceDataError> {
        let dataset: GovernorateDataset = serde_json::from_str(json)
            .map_err(|source| ReferenceDataError::Parse { dataset: GOVERNORATES, source })?;
        Self::new(dataset.governorates)
    }

    /// Reads and parses a governorate dataset file
    pub fn from_path(path: &Path) -> Result<Self, ReferenceDataError> {
        Self::from_json(&read_dataset(path)?)
    }

    /// The compiled-in dataset
    pub fn bundled() -> Result<Self, ReferenceDataError> {
        Self::from_json(BUNDLED_GOVERNORATES)
    }

    pub fn get(&self, code: &str) -> Option<&Governorate> {
        self.entries.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Governorates in code order
    pub fn iter(&self) -> impl Iterator<Item = &Governorate> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A named birth-year cohort, both ends inclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub name: String,
    pub start_year: i32,
    pub end_year: i32,
}

impl Generation {
    pub fn new(name: impl Into<String>, start_year: i32, end_year: i32) -> Self {
        Self {
            name: name.into(),
            start_year,
            end_year,
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }

    /// `"{start}-{end}"`, e.g. `"1997-2012"`
    pub fn year_range(&self) -> String {
        format!("{}-{}", self.start_year, self.end_year)
    }
}

#[derive(Deserialize)]
struct GenerationDataset {
    generations: Vec<Generation>,
}

/// Generations in authored order
///
/// Lookup returns the first entry containing the year, so the order of
/// the dataset decides between overlapping ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTable {
    entries: Vec<Generation>,
}

impl GenerationTable {
    /// Builds a table, rejecting inverted year ranges
    pub fn new(generations: impl IntoIterator<Item = Generation>) -> Result<Self, ReferenceDataError> {
        let entries: Vec<Generation> = generations.into_iter().collect();

        if let Some(bad) = entries.iter().find(|g| g.start_year > g.end_year) {
            warn!(name = %bad.name, "Rejecting generation with inverted year range");
            return Err(ReferenceDataError::InvalidGenerationRange {
                name: bad.name.clone(),
                start_year: bad.start_year,
                end_year: bad.end_year,
            });
        }

        if entries.is_empty() {
            return Err(ReferenceDataError::Empty { dataset: GENERATIONS });
        }

        Ok(Self { entries })
    }

    /// Parses a `{"generations": [...]}` document
    pub fn from_json(json: &str) -> Result<Self, ReferenceDataError> {
        let dataset: GenerationDataset = serde_json::from_str(json)
            .map_err(|source| ReferenceDataError::Parse { dataset: GENERATIONS, source })?;
        Self::new(dataset.generations)
    }

    /// Reads and parses a generation dataset file
    pub fn from_path(path: &Path) -> Result<Self, ReferenceDataError> {
        Self::from_json(&read_dataset(path)?)
    }

    /// The compiled-in dataset
    pub fn bundled() -> Result<Self, ReferenceDataError> {
        Self::from_json(BUNDLED_GENERATIONS)
    }

    /// First generation whose range contains `year`
    pub fn find(&self, year: i32) -> Option<&Generation> {
        self.entries.iter().find(|g| g.contains(year))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Generation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Both reference tables, as handed to the codec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTables {
    pub governorates: GovernorateTable,
    pub generations: GenerationTable,
}

static BUNDLED_TABLES: OnceCell<Arc<ReferenceTables>> = OnceCell::new();

impl ReferenceTables {
    pub fn new(governorates: GovernorateTable, generations: GenerationTable) -> Self {
        Self { governorates, generations }
    }

    /// Loads the tables, using a bundled dataset wherever no path is given
    ///
    /// # Errors
    ///
    /// Returns a `ReferenceDataError` if a file cannot be read or its
    /// contents are invalid.
    pub fn load(
        governorates_path: Option<&Path>,
        generations_path: Option<&Path>,
    ) -> Result<Self, ReferenceDataError> {
        let governorates = match governorates_path {
            Some(path) => GovernorateTable::from_path(path)?,
            None => GovernorateTable::bundled()?,
        };
        let generations = match generations_path {
            Some(path) => GenerationTable::from_path(path)?,
            None => GenerationTable::bundled()?,
        };

        info!(
            governorates = governorates.len(),
            generations = generations.len(),
            governorates_source = %source_label(governorates_path),
            generations_source = %source_label(generations_path),
            "Reference tables loaded"
        );

        Ok(Self::new(governorates, generations))
    }

    /// The bundled tables, parsed on first use and shared for the rest of
    /// the process
    pub fn bundled() -> Result<Arc<ReferenceTables>, ReferenceDataError> {
        BUNDLED_TABLES
            .get_or_try_init(|| Self::load(None, None).map(Arc::new))
            .map(Arc::clone)
    }
}

fn read_dataset(path: &Path) -> Result<String, ReferenceDataError> {
    fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn source_label(path: Option<&Path>) -> String {
    path.map_or_else(|| "bundled".to_string(), |p| p.display().to_string())
}
