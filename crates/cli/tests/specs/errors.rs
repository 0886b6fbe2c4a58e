//! Error handling specs
//!
//! Verify messages and exit codes for bad input.

use crate::prelude::*;

#[test]
fn invalid_date_exits_one() {
    cli()
        .args(&["date", "not-a-date"])
        .fails()
        .code(1)
        .stderr_eq("Error: invalid date: \"not-a-date\"\n");
}

#[test]
fn invalid_range_end() {
    cli()
        .args(&["range", "2025-09-01", "soon"])
        .fails()
        .code(1)
        .stderr_has("invalid date: \"soon\"");
}

#[test]
fn empty_string_in_range_is_invalid() {
    cli()
        .args(&["range", "", "2025-09-04"])
        .fails()
        .stderr_has("invalid date: \"\"");
}

#[test]
fn unknown_locale() {
    cli()
        .args(&["date", "2024-03-07", "--locale", "fr-FR"])
        .fails()
        .stderr_has("unknown locale: fr-FR");
}

#[test]
fn unknown_zone() {
    cli()
        .args(&["date", "2024-03-07", "--tz", "Moon/Base"])
        .fails()
        .stderr_has("unknown time zone: Moon/Base");
}

#[test]
fn no_subcommand_prints_help() {
    cli().passes().stdout_has("Usage:");
}
