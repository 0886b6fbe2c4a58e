// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-date and date-range labels.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::error::DateError;
use crate::input::TemporalInput;
use crate::locale::Locale;
use crate::zone::Zone;

/// Locale and zone threaded through every formatting call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub locale: Locale,
    pub zone: Zone,
}

impl FormatOptions {
    pub fn new(locale: Locale, zone: Zone) -> Self {
        Self { locale, zone }
    }
}

/// How much of a range's text can be elided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compaction {
    /// Both ends on one calendar day; rendered as a single date.
    SameDay,
    SameMonth,
    SameYear,
    /// Nothing shared; both ends fully qualified.
    Full,
}

impl Compaction {
    /// Pick the compaction for two calendar dates.
    ///
    /// Order matters: a same-day range must never reach the month or year
    /// branches.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        if start == end {
            Compaction::SameDay
        } else if start.year() == end.year() && start.month() == end.month() {
            Compaction::SameMonth
        } else if start.year() == end.year() {
            Compaction::SameYear
        } else {
            Compaction::Full
        }
    }
}

/// Renders [`TemporalInput`] values as short human-readable labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateFormatter {
    options: FormatOptions,
}

impl DateFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Format a single point in time, e.g. `"Sep 4, 2025"`.
    ///
    /// Absent input (`0` or `""`) yields the empty string without any
    /// parsing.
    pub fn format_single(&self, input: &TemporalInput) -> Result<String, DateError> {
        if input.is_absent() {
            return Ok(String::new());
        }
        let instant = input.resolve(&self.options.zone)?;
        Ok(self.options.locale.date(self.local_date(&instant)))
    }

    /// Format a range, stating shared month and year components once.
    ///
    /// Unlike [`DateFormatter::format_single`], absent endpoints are not
    /// short-circuited: a zero epoch renders as Jan 1, 1970.
    pub fn format_range(
        &self,
        start: &TemporalInput,
        end: &TemporalInput,
    ) -> Result<String, DateError> {
        let start_instant = start.resolve(&self.options.zone)?;
        let end_instant = end.resolve(&self.options.zone)?;
        let start_date = self.local_date(&start_instant);
        let end_date = self.local_date(&end_instant);

        let compaction = if start_instant == end_instant {
            Compaction::SameDay
        } else {
            Compaction::between(start_date, end_date)
        };
        tracing::trace!(%start, %end, ?compaction, "formatting date range");

        let locale = self.options.locale;
        Ok(match compaction {
            Compaction::SameDay => locale.date(start_date),
            Compaction::SameMonth => locale.same_month(start_date, end_date),
            Compaction::SameYear => locale.same_year(start_date, end_date),
            Compaction::Full => locale.full(start_date, end_date),
        })
    }

    fn local_date(&self, instant: &DateTime<Utc>) -> NaiveDate {
        self.options.zone.date_of(instant)
    }
}

/// [`DateFormatter::format_single`] with en-US output in UTC.
pub fn format_date(input: impl Into<TemporalInput>) -> Result<String, DateError> {
    DateFormatter::default().format_single(&input.into())
}

/// [`DateFormatter::format_range`] with en-US output in UTC.
pub fn format_date_range(
    start: impl Into<TemporalInput>,
    end: impl Into<TemporalInput>,
) -> Result<String, DateError> {
    DateFormatter::default().format_range(&start.into(), &end.into())
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
