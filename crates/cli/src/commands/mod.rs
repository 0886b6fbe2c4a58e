// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod date;
pub mod range;
pub mod records;

use std::convert::Infallible;

use datespan_core::TemporalInput;

/// Positional date argument: an optionally signed run of digits is epoch
/// seconds, anything else a calendar string.
pub(crate) fn parse_input(s: &str) -> Result<TemporalInput, Infallible> {
    s.parse()
}
