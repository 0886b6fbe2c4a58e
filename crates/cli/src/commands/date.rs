// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `datespan date` — label a single point in time.

use anyhow::Result;
use clap::Args;
use datespan_core::{DateFormatter, TemporalInput};

use crate::output::{print_label, OutputFormat};

#[derive(Args)]
pub struct DateArgs {
    /// Epoch seconds (digits) or an ISO-8601 date string
    #[arg(allow_hyphen_values = true, value_parser = super::parse_input)]
    pub input: TemporalInput,
}

pub fn handle(args: DateArgs, formatter: &DateFormatter, format: OutputFormat) -> Result<()> {
    let label = formatter.format_single(&args.input)?;
    print_label(&label, format)
}
