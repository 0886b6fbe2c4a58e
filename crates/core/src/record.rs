// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dated records as served by the search index.

use serde::{Deserialize, Serialize};

use crate::error::DateError;
use crate::format::DateFormatter;
use crate::input::TemporalInput;

/// The date fields of a search-index record.
///
/// Other fields on the record are ignored. Missing and `null` dates are
/// both treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<TemporalInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<TemporalInput>,
}

impl DatedRecord {
    pub fn new(start_date: Option<TemporalInput>, end_date: Option<TemporalInput>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// The label shown for this record: a range when both ends are known,
    /// otherwise whichever single date is present.
    ///
    /// A zero epoch or empty string counts as an unknown end, so it never
    /// renders as Jan 1, 1970 inside a range.
    pub fn label(&self, formatter: &DateFormatter) -> Result<String, DateError> {
        match (known(&self.start_date), known(&self.end_date)) {
            (Some(start), Some(end)) => formatter.format_range(start, end),
            (Some(only), None) | (None, Some(only)) => formatter.format_single(only),
            (None, None) => Ok(String::new()),
        }
    }
}

fn known(date: &Option<TemporalInput>) -> Option<&TemporalInput> {
    date.as_ref().filter(|d| !d.is_absent())
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
