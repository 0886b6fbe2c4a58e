// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct LabelEntry<'a> {
    label: &'a str,
}

/// Render one label: the bare text, or a `{"label": ...}` object.
pub fn render_label(label: &str, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{}\n", label)),
        OutputFormat::Json => Ok(format!(
            "{}\n",
            serde_json::to_string_pretty(&LabelEntry { label })?
        )),
    }
}

/// Render many labels: one per line (an absent date is an empty line), or a
/// JSON array of `{"label": ...}` objects.
pub fn render_labels(labels: &[String], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(labels.iter().map(|l| format!("{}\n", l)).collect()),
        OutputFormat::Json => {
            let entries: Vec<LabelEntry<'_>> = labels
                .iter()
                .map(|label| LabelEntry { label })
                .collect();
            Ok(format!("{}\n", serde_json::to_string_pretty(&entries)?))
        }
    }
}

pub fn print_label(label: &str, format: OutputFormat) -> anyhow::Result<()> {
    print!("{}", render_label(label, format)?);
    Ok(())
}

pub fn print_labels(labels: &[String], format: OutputFormat) -> anyhow::Result<()> {
    print!("{}", render_labels(labels, format)?);
    Ok(())
}
