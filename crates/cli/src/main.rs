// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! datespan - date and date-range labels

mod commands;
mod env;
mod output;
mod settings;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{date, range, records};
use datespan_core::DateFormatter;
use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "datespan",
    version,
    about = "Short human-readable labels for dates and date ranges"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Output locale (en-US, en-GB)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Zone used to decide calendar days (UTC, +05:30, America/New_York, local)
    #[arg(long = "tz", global = true)]
    tz: Option<String>,

    /// Read settings from this config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a single date
    Date(date::DateArgs),
    /// Format a date range, eliding a shared month or year
    Range(range::RangeArgs),
    /// Label every record in a JSON array of search-index records
    Records(records::RecordsArgs),
}

fn main() {
    setup_logging();
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Log to stderr so labels on stdout stay machine-readable.
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Render an error and its sources, skipping sources whose text is already
/// part of the message above them.
fn format_error(err: &anyhow::Error) -> String {
    let mut buf = err.to_string();
    let mut shown = buf.clone();
    for cause in err.chain().skip(1) {
        let text = cause.to_string();
        if shown.contains(&text) {
            continue;
        }
        buf.push_str(&format!("\n  caused by: {}", text));
        shown = text;
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        // No subcommand provided — print help and exit 0
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let options = settings::load_options(&settings::Overrides {
        locale: cli.locale,
        tz: cli.tz,
        config: cli.config,
    })?;
    tracing::debug!(locale = %options.locale, zone = %options.zone, "resolved format options");
    let formatter = DateFormatter::new(options);

    match command {
        Commands::Date(args) => date::handle(args, &formatter, format),
        Commands::Range(args) => range::handle(args, &formatter, format),
        Commands::Records(args) => records::handle(args, &formatter, format),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
