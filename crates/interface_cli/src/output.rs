//! Output formatting for CLI commands

use std::io::Write;

use clap::ValueEnum;
use domain_national_id::{DecodedRecord, GenerationTable, GovernorateTable, NationalIdResponse};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Tally of a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub checked: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl Summary {
    pub fn from_responses(responses: &[NationalIdResponse]) -> Self {
        let valid = responses.iter().filter(|r| r.is_valid()).count();
        Self {
            checked: responses.len(),
            valid,
            invalid: responses.len() - valid,
        }
    }

    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// Writes validation responses in the given format
pub fn write_responses<W: Write>(
    out: &mut W,
    responses: &[NationalIdResponse],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, responses)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for response in responses {
                match response {
                    NationalIdResponse::Valid(record) => write_record(out, record)?,
                    NationalIdResponse::Invalid { national_id, errors, .. } => {
                        writeln!(out, "{}  invalid", display_id(national_id))?;
                        for error in errors {
                            writeln!(out, "  - {}", error)?;
                        }
                    }
                }
            }
            let summary = Summary::from_responses(responses);
            writeln!(
                out,
                "{} checked, {} valid, {} invalid",
                summary.checked, summary.valid, summary.invalid
            )?;
        }
    }
    Ok(())
}

fn write_record<W: Write>(out: &mut W, record: &DecodedRecord) -> Result<(), CliError> {
    writeln!(out, "{}  valid", record.national_id)?;
    writeln!(out, "  birth date   {} (age {})", record.birth_date, record.age)?;
    writeln!(out, "  century      {}", record.century)?;
    writeln!(
        out,
        "  governorate  {} {} ({})",
        record.governorate.code, record.governorate.name_english, record.governorate.name_arabic
    )?;
    writeln!(out, "  gender       {}", record.gender)?;
    writeln!(
        out,
        "  generation   {} ({})",
        record.generation.name, record.generation.year_range
    )?;
    writeln!(out, "  serial       {}", record.serial_number)?;
    Ok(())
}

fn display_id(national_id: &str) -> &str {
    if national_id.is_empty() {
        "<empty>"
    } else {
        national_id
    }
}

/// Writes the governorate table
pub fn write_governorates<W: Write>(
    out: &mut W,
    table: &GovernorateTable,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = table.iter().collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for governorate in table.iter() {
                writeln!(
                    out,
                    "{}  {:<16} {}",
                    governorate.code, governorate.english, governorate.arabic
                )?;
            }
        }
    }
    Ok(())
}

/// Writes the generation table in lookup order
pub fn write_generations<W: Write>(
    out: &mut W,
    table: &GenerationTable,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = table.iter().collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for generation in table.iter() {
                writeln!(out, "{:<20} {}", generation.name, generation.year_range())?;
            }
        }
    }
    Ok(())
}
