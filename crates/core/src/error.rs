// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for date formatting and configuration

use std::path::PathBuf;

use thiserror::Error;

use crate::input::TemporalInput;

/// Errors raised while turning a [`TemporalInput`] into a label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The value could not be interpreted as a point in time.
    #[error("invalid date: {input}")]
    InvalidDate { input: TemporalInput },
}

impl DateError {
    pub(crate) fn invalid(input: &TemporalInput) -> Self {
        DateError::InvalidDate {
            input: input.clone(),
        }
    }
}

/// Errors that can occur while loading formatter configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    #[error("unknown time zone: {0}")]
    UnknownZone(String),
}
