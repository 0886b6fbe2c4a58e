// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locale-specific rendering of dates and compacted ranges.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::ConfigError;

/// Separator between the two halves of a range.
pub const RANGE_SEPARATOR: &str = " — ";

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short month name for `date` ("Jan" … "Dec").
pub fn short_month(date: NaiveDate) -> &'static str {
    SHORT_MONTHS[date.month0() as usize]
}

/// Supported output locales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// `Sep 4, 2025`
    #[default]
    EnUs,
    /// `4 Sep 2025`
    EnGb,
}

impl Locale {
    /// BCP-47 tag for this locale.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
        }
    }

    /// A fully qualified date: month, day, and year.
    pub fn date(&self, date: NaiveDate) -> String {
        match self {
            Locale::EnUs => format!("{} {}, {}", short_month(date), date.day(), date.year()),
            Locale::EnGb => format!("{} {} {}", date.day(), short_month(date), date.year()),
        }
    }

    /// A range within one month: the month and year are stated once.
    pub fn same_month(&self, start: NaiveDate, end: NaiveDate) -> String {
        match self {
            Locale::EnUs => format!(
                "{} {}{RANGE_SEPARATOR}{}, {}",
                short_month(start),
                start.day(),
                end.day(),
                start.year()
            ),
            Locale::EnGb => format!(
                "{}{RANGE_SEPARATOR}{} {} {}",
                start.day(),
                end.day(),
                short_month(start),
                start.year()
            ),
        }
    }

    /// A range within one year: the year is stated once, at the end.
    pub fn same_year(&self, start: NaiveDate, end: NaiveDate) -> String {
        match self {
            Locale::EnUs => format!(
                "{} {}{RANGE_SEPARATOR}{} {}, {}",
                short_month(start),
                start.day(),
                short_month(end),
                end.day(),
                start.year()
            ),
            Locale::EnGb => format!(
                "{} {}{RANGE_SEPARATOR}{} {} {}",
                start.day(),
                short_month(start),
                end.day(),
                short_month(end),
                start.year()
            ),
        }
    }

    /// A range spanning years: both endpoints fully qualified.
    pub fn full(&self, start: NaiveDate, end: NaiveDate) -> String {
        format!("{}{RANGE_SEPARATOR}{}", self.date(start), self.date(end))
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "en-us" | "en" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            _ => Err(ConfigError::UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
#[path = "locale_tests.rs"]
mod tests;
