// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.is_empty())
}

// --- Logging ---

/// `DATESPAN_LOG` filter directives (e.g. `debug`, `datespan_core=trace`)
pub fn log_filter() -> Option<String> {
    non_empty("DATESPAN_LOG")
}

// --- Config ---

/// Explicit config file from `DATESPAN_CONFIG`
pub fn config_file() -> Option<PathBuf> {
    non_empty("DATESPAN_CONFIG").map(PathBuf::from)
}

/// Resolve config directory: XDG_CONFIG_HOME/datespan > platform config dir/datespan
pub fn config_dir() -> Option<PathBuf> {
    if let Some(xdg) = non_empty("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg).join("datespan"));
    }
    dirs::config_dir().map(|dir| dir.join("datespan"))
}
