//! Egyptian National ID validator binary
//!
//! # Usage
//!
//! ```bash
//! # Check IDs given on the command line
//! nid-validator validate 29801011401891
//!
//! # Check IDs piped in, one per line, as JSON
//! cat ids.txt | nid-validator --format json validate
//!
//! # Evaluate against a fixed date
//! nid-validator --today 2024-06-15 validate 31811211401891
//! ```
//!
//! # Environment Variables
//!
//! * `NID_GOVERNORATES_PATH` - Governorate dataset (default: bundled)
//! * `NID_GENERATIONS_PATH` - Generation dataset (default: bundled)
//! * `NID_TIMEZONE` - Timezone deciding today's date (default: Africa/Cairo)
//! * `NID_FORMAT` - Output format: text, json (default: text)
//! * `NID_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: warn)
//! * `RUST_LOG` - Overrides the log level with a full filter directive

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use interface_cli::{config::CliConfig, App, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.global.config.as_deref())
        .context("failed to load configuration")?;
    config.apply_overrides(&cli.global);

    init_tracing(&config.log_level);

    let app = App::from_config(config, cli.global.today)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let status = app.run(&cli.command, stdin.lock(), &mut out)?;
    Ok(status)
}

/// Initializes the tracing subscriber, logging to stderr so stdout stays
/// clean for results.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .init();
}
