//! Command-Line Interface
//!
//! This crate provides the `nid-validator` binary for checking Egyptian
//! National IDs from the shell or a pipeline.
//!
//! # Architecture
//!
//! - **Config**: file and environment configuration, overridable by flags
//! - **Commands**: `validate`, `governorates`, `generations`
//! - **Output**: text or JSON rendering
//! - **Error Handling**: start-up failures as `CliError`; invalid IDs are
//!   ordinary output with a non-zero exit status
//!
//! # Example
//!
//! ```bash
//! nid-validator validate 29801011401891 19801011401891
//! cat ids.txt | nid-validator --format json validate
//! ```

pub mod config;
pub mod error;
pub mod output;

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use core_kernel::{Clock, FixedClock, SystemClock};
use domain_national_id::{mask, NationalIdCodec, NationalIdResponse, ReferenceTables};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{write_generations, write_governorates, write_responses, OutputFormat, Summary};

/// Validate and decode Egyptian National ID numbers.
#[derive(Parser, Debug)]
#[command(name = "nid-validator", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Configuration file (TOML, JSON, or YAML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Governorate dataset to use instead of the bundled one
    #[arg(long, global = true)]
    pub governorates: Option<PathBuf>,

    /// Generation dataset to use instead of the bundled one
    #[arg(long, global = true)]
    pub generations: Option<PathBuf>,

    /// IANA timezone used to decide today's date
    #[arg(long, global = true)]
    pub timezone: Option<String>,

    /// Evaluate as if today were this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate IDs given as arguments, or one per line on stdin.
    Validate(ValidateArgs),
    /// List the governorate table.
    Governorates,
    /// List the generation table.
    Generations,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ValidateArgs {
    /// National IDs to check; read from stdin when omitted
    pub ids: Vec<String>,
}

impl CliConfig {
    /// Applies command-line flags on top of loaded configuration
    pub fn apply_overrides(&mut self, args: &GlobalArgs) {
        if let Some(path) = &args.governorates {
            self.governorates_path = Some(path.clone());
        }
        if let Some(path) = &args.generations {
            self.generations_path = Some(path.clone());
        }
        if let Some(timezone) = &args.timezone {
            self.timezone = timezone.clone();
        }
        if let Some(format) = args.format {
            self.format = format;
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
    }
}

/// Loaded state shared by the commands
pub struct App {
    pub codec: NationalIdCodec<Arc<dyn Clock>>,
    pub config: CliConfig,
}

impl App {
    /// Loads reference tables and builds the codec
    ///
    /// # Errors
    ///
    /// Returns an error if the timezone is unknown or the reference data
    /// cannot be loaded.
    pub fn from_config(config: CliConfig, today: Option<NaiveDate>) -> Result<Self, CliError> {
        let clock: Arc<dyn Clock> = match today {
            Some(date) => Arc::new(FixedClock::new(date)),
            None => Arc::new(SystemClock::new(config.timezone()?)),
        };

        let tables = ReferenceTables::load(
            config.governorates_path.as_deref(),
            config.generations_path.as_deref(),
        )?;

        info!(timezone = %config.timezone, fixed_today = ?today, "Codec ready");

        Ok(Self {
            codec: NationalIdCodec::new(tables, clock),
            config,
        })
    }

    /// Runs a command, returning the process exit status
    ///
    /// `validate` exits with failure when any ID is invalid.
    pub fn run<R: BufRead, W: Write>(
        &self,
        command: &Commands,
        input: R,
        out: &mut W,
    ) -> Result<ExitCode, CliError> {
        let format = self.config.format;
        match command {
            Commands::Validate(args) => {
                let ids = if args.ids.is_empty() {
                    read_ids(input)?
                } else {
                    args.ids.clone()
                };

                let responses = self.check_all(&ids);
                write_responses(out, &responses, format)?;

                let summary = Summary::from_responses(&responses);
                info!(
                    checked = summary.checked,
                    valid = summary.valid,
                    invalid = summary.invalid,
                    "Batch validated"
                );

                Ok(if summary.all_valid() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                })
            }
            Commands::Governorates => {
                write_governorates(out, &self.codec.tables().governorates, format)?;
                Ok(ExitCode::SUCCESS)
            }
            Commands::Generations => {
                write_generations(out, &self.codec.tables().generations, format)?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }

    /// Checks every ID against a single reading of the clock
    pub fn check_all(&self, ids: &[String]) -> Vec<NationalIdResponse> {
        let today = self.codec.clock().today();
        ids.iter()
            .map(|id| {
                let response = self.codec.check_on(id, today);
                debug!(national_id = %mask(response.national_id()), valid = response.is_valid(), "Checked");
                response
            })
            .collect()
    }
}

/// Reads one ID per line, skipping blank lines
pub fn read_ids<R: BufRead>(input: R) -> Result<Vec<String>, CliError> {
    let mut ids = Vec::new();
    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            ids.push(line);
        }
    }
    Ok(ids)
}
