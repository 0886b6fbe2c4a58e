// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time zone used to read calendar fields from an instant.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::ConfigError;

/// The zone whose wall clock decides which calendar day an instant falls on.
///
/// Threaded explicitly through every formatting call so output never depends
/// on the host environment unless [`Zone::Local`] is asked for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Zone {
    #[default]
    Utc,
    Fixed(FixedOffset),
    Named(Tz),
    /// The host's configured zone.
    Local,
}

impl Zone {
    /// Calendar date of `instant` on this zone's wall clock.
    pub fn date_of(&self, instant: &DateTime<Utc>) -> NaiveDate {
        match self {
            Zone::Utc => instant.date_naive(),
            Zone::Fixed(offset) => instant.with_timezone(offset).date_naive(),
            Zone::Named(tz) => instant.with_timezone(tz).date_naive(),
            Zone::Local => instant.with_timezone(&chrono::Local).date_naive(),
        }
    }

    /// Interpret a wall-clock time in this zone.
    ///
    /// Ambiguous times resolve to the earlier instant. Times that fall in a
    /// DST gap are shifted forward by one hour.
    pub fn to_utc(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Zone::Utc => Some(local.and_utc()),
            Zone::Fixed(offset) => resolve_local(offset, local),
            Zone::Named(tz) => resolve_local(tz, local),
            Zone::Local => resolve_local(&chrono::Local, local),
        }
    }
}

fn resolve_local<T: TimeZone>(tz: &T, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&local)
        .earliest()
        .or_else(|| {
            let shifted = local.checked_add_signed(TimeDelta::hours(1))?;
            tz.from_local_datetime(&shifted).earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse a numeric UTC offset: `+05:30`, `-0800`, or `+09`.
pub(crate) fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    // A colon is only allowed between hours and minutes.
    if rest.contains(':') && (rest.len() != 5 || rest.as_bytes()[2] != b':') {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

impl FromStr for Zone {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "utc" | "z" | "gmt" => return Ok(Zone::Utc),
            "local" => return Ok(Zone::Local),
            _ => {}
        }
        if let Some(offset) = parse_offset(trimmed) {
            return Ok(Zone::Fixed(offset));
        }
        trimmed
            .parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| ConfigError::UnknownZone(s.to_string()))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Utc => f.write_str("UTC"),
            Zone::Fixed(offset) => write!(f, "{}", offset),
            Zone::Named(tz) => f.write_str(tz.name()),
            Zone::Local => f.write_str("local"),
        }
    }
}

#[cfg(test)]
#[path = "zone_tests.rs"]
mod tests;
