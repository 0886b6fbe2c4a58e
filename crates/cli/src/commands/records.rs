// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `datespan records` — label each record of a search-index export.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Args;
use datespan_core::{DateFormatter, DatedRecord};

use crate::output::{print_labels, OutputFormat};

#[derive(Args)]
pub struct RecordsArgs {
    /// JSON file holding an array of records (`-` reads stdin)
    pub file: PathBuf,
}

pub fn handle(args: RecordsArgs, formatter: &DateFormatter, format: OutputFormat) -> Result<()> {
    let content = read_source(&args.file)?;
    let labels = label_records(&content, formatter)?;
    print_labels(&labels, format)
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read records from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .map_err(|e| anyhow!("failed to read records '{}': {}", path.display(), e))
}

/// Parse a JSON array of records and label each one, in order.
///
/// The first record with an invalid date aborts the whole run, naming its
/// zero-based index.
pub(crate) fn label_records(content: &str, formatter: &DateFormatter) -> Result<Vec<String>> {
    let records: Vec<DatedRecord> =
        serde_json::from_str(content).context("records must be a JSON array")?;
    tracing::debug!(count = records.len(), "labelling records");

    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            record
                .label(formatter)
                .map_err(|e| anyhow!("record {}: {}", i, e))
        })
        .collect()
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;
