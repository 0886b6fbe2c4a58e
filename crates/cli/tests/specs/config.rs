//! Config file resolution specs

use crate::prelude::*;

#[test]
fn config_flag() {
    let fixture = Fixture::new();
    let path = fixture.file("datespan.toml", "locale = \"en-GB\"\n");

    cli()
        .args(&["--config", path.to_str().unwrap(), "date", "2024-03-07"])
        .passes()
        .stdout_eq("7 Mar 2024\n");
}

#[test]
fn config_env_var() {
    let fixture = Fixture::new();
    let path = fixture.file("datespan.toml", "timezone = \"America/New_York\"\n");

    cli()
        .env("DATESPAN_CONFIG", &path)
        .args(&["date", "2025-09-04T02:00:00Z"])
        .passes()
        .stdout_eq("Sep 3, 2025\n");
}

#[test]
fn config_from_xdg_dir() {
    let fixture = Fixture::new();
    fixture.file("datespan/config.toml", "locale = \"en-GB\"\n");

    cli()
        .env("XDG_CONFIG_HOME", fixture.path())
        .args(&["range", "2025-09-01", "2025-09-04"])
        .passes()
        .stdout_eq("1 — 4 Sep 2025\n");
}

#[test]
fn flag_overrides_config_file() {
    let fixture = Fixture::new();
    let path = fixture.file("datespan.toml", "locale = \"en-GB\"\n");

    cli()
        .args(&["--config", path.to_str().unwrap(), "--locale", "en-US"])
        .args(&["date", "2024-03-07"])
        .passes()
        .stdout_eq("Mar 7, 2024\n");
}

#[test]
fn malformed_config_fails() {
    let fixture = Fixture::new();
    let path = fixture.file("datespan.toml", "locale = [\n");

    cli()
        .args(&["--config", path.to_str().unwrap(), "date", "0"])
        .fails()
        .stderr_has("TOML parse error");
}

#[test]
fn missing_config_flag_file_fails() {
    cli()
        .args(&["--config", "/nonexistent/datespan.toml", "date", "0"])
        .fails()
        .stderr_has("failed to read config /nonexistent/datespan.toml");
}

#[test]
fn debug_logging_goes_to_stderr() {
    cli()
        .env("DATESPAN_LOG", "debug")
        .args(&["date", "2024-03-07"])
        .passes()
        .stdout_eq("Mar 7, 2024\n")
        .stderr_has("resolved format options");
}
