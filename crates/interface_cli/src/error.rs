//! CLI error handling

use core_kernel::TemporalError;
use domain_national_id::ReferenceDataError;
use thiserror::Error;

/// Errors that stop the CLI before or while it runs
///
/// An invalid National ID is not an error here; it is reported in the
/// output and reflected in the exit status.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Reference data error: {0}")]
    ReferenceData(#[from] ReferenceDataError),

    #[error("Invalid timezone: {0}")]
    Timezone(#[from] TemporalError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
