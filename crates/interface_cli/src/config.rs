//! CLI configuration

use std::path::{Path, PathBuf};

use core_kernel::{TemporalError, Timezone};
use serde::Deserialize;

use crate::output::OutputFormat;

/// Base name of the optional configuration file in the working directory
pub const DEFAULT_CONFIG_NAME: &str = "nid-validator";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "NID";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Governorate dataset overriding the bundled one
    pub governorates_path: Option<PathBuf>,
    /// Generation dataset overriding the bundled one
    pub generations_path: Option<PathBuf>,
    /// IANA timezone that decides what "today" is
    pub timezone: String,
    /// Log level
    pub log_level: String,
    /// Output format
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            governorates_path: None,
            generations_path: None,
            timezone: "Africa/Cairo".to_string(),
            log_level: "warn".to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Loads configuration from a file and the environment
    ///
    /// Sources, later ones winning: built-in defaults, the file at `path`
    /// (or `nid-validator.{toml,json,yaml}` if present when no path is
    /// given), then `NID_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file is missing or any source
    /// holds a value of the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    /// Parsed timezone
    pub fn timezone(&self) -> Result<Timezone, TemporalError> {
        self.timezone.parse()
    }
}
