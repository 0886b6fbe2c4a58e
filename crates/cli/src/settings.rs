// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolve [`FormatOptions`] from flags, config files, and defaults.

use std::path::{Path, PathBuf};

use anyhow::Result;
use datespan_core::{FormatConfig, FormatOptions};

/// Values given on the command line; each wins over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub locale: Option<String>,
    pub tz: Option<String>,
    pub config: Option<PathBuf>,
}

/// Config file to read, if any.
///
/// Priority: `--config` > `DATESPAN_CONFIG` > `<config dir>/datespan/config.toml`
/// when it exists. The first two must exist; the last is optional.
fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = crate::env::config_file() {
        return Some(path);
    }
    crate::env::config_dir()
        .map(|dir| dir.join("config.toml"))
        .filter(|path| path.is_file())
}

pub fn load_options(overrides: &Overrides) -> Result<FormatOptions> {
    let config = match config_path(overrides.config.as_deref()) {
        Some(path) => FormatConfig::load(&path)?,
        None => FormatConfig::default(),
    };
    Ok(apply_overrides(config, overrides).options()?)
}

fn apply_overrides(mut config: FormatConfig, overrides: &Overrides) -> FormatConfig {
    if let Some(locale) = &overrides.locale {
        config.locale = locale.clone();
    }
    if let Some(tz) = &overrides.tz {
        config.timezone = tz.clone();
    }
    config
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
