// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Formatter configuration file (`config.toml`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::format::FormatOptions;
use crate::locale::Locale;
use crate::zone::Zone;

/// On-disk formatter settings.
///
/// ```toml
/// locale = "en-US"
/// timezone = "America/New_York"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    pub locale: String,
    pub timezone: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default().tag().to_string(),
            timezone: Zone::default().to_string(),
        }
    }
}

impl FormatConfig {
    /// Parse config from TOML text. Missing keys take their defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded format config");
        Ok(config)
    }

    /// Validate the locale tag and zone name.
    pub fn options(&self) -> Result<FormatOptions, ConfigError> {
        Ok(FormatOptions::new(
            self.locale.parse::<Locale>()?,
            self.timezone.parse::<Zone>()?,
        ))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
