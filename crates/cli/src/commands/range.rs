// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `datespan range` — label a start/end pair.

use anyhow::Result;
use clap::Args;
use datespan_core::{DateFormatter, TemporalInput};

use crate::output::{print_label, OutputFormat};

#[derive(Args)]
pub struct RangeArgs {
    /// Start: epoch seconds or an ISO-8601 date string
    #[arg(allow_hyphen_values = true, value_parser = super::parse_input)]
    pub start: TemporalInput,
    /// End: epoch seconds or an ISO-8601 date string
    #[arg(allow_hyphen_values = true, value_parser = super::parse_input)]
    pub end: TemporalInput,
}

pub fn handle(args: RangeArgs, formatter: &DateFormatter, format: OutputFormat) -> Result<()> {
    let label = formatter.format_range(&args.start, &args.end)?;
    print_label(&label, format)
}
