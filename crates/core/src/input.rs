// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw temporal values as they arrive from search-index records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DateError;
use crate::zone::{parse_offset, Zone};

/// A point in time expressed either as Unix epoch seconds or as an
/// ISO-8601 calendar string.
///
/// `Epoch(0)` and `Calendar("")` are the "absent" values: a single date
/// formats them as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TemporalInput {
    Epoch(i64),
    Calendar(String),
}

impl TemporalInput {
    /// Returns true for the zero epoch and the empty string.
    pub fn is_absent(&self) -> bool {
        match self {
            TemporalInput::Epoch(secs) => *secs == 0,
            TemporalInput::Calendar(s) => s.is_empty(),
        }
    }

    /// Construct the instant this value denotes.
    ///
    /// Calendar strings without an explicit offset are read as wall-clock
    /// time in `zone`; bare dates (`2025-09-04`, `2025-09`, `2025`) are
    /// midnight UTC.
    pub fn resolve(&self, zone: &Zone) -> Result<DateTime<Utc>, DateError> {
        let resolved = match self {
            TemporalInput::Epoch(secs) => DateTime::from_timestamp(*secs, 0),
            TemporalInput::Calendar(s) => parse_calendar(s, zone),
        };
        resolved.ok_or_else(|| {
            tracing::debug!(input = %self, "value does not denote a valid date");
            DateError::invalid(self)
        })
    }
}

fn parse_calendar(raw: &str, zone: &Zone) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    let (date_part, time_part) = match s.as_bytes().get(10) {
        Some(b'T' | b't' | b' ') => (&s[..10], Some(&s[11..])),
        _ => (s, None),
    };
    let date = parse_date(date_part)?;

    let Some(time_part) = time_part else {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    };
    let (clock, offset) = split_offset(time_part)?;
    let time = NaiveTime::parse_from_str(clock, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(clock, "%H:%M"))
        .ok()?;
    let local = date.and_time(time);

    match offset {
        Some(offset) => offset
            .from_local_datetime(&local)
            .single()
            .map(|dt| dt.with_timezone(&Utc)),
        None => zone.to_utc(local),
    }
}

/// Parse `YYYY-MM-DD`, `YYYY-MM`, or `YYYY`, filling omitted fields with 1.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let fields: Vec<&str> = s.split('-').collect();
    let widths_ok = match fields.len() {
        1 => fields[0].len() == 4,
        2 => fields[0].len() == 4 && fields[1].len() == 2,
        3 => fields[0].len() == 4 && fields[1].len() == 2 && fields[2].len() == 2,
        _ => false,
    };
    if !widths_ok || !fields.iter().all(|f| f.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    let year = fields[0].parse().ok()?;
    let month = fields.get(1).map_or(Some(1), |m| m.parse().ok())?;
    let day = fields.get(2).map_or(Some(1), |d| d.parse().ok())?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Split a trailing `Z` or numeric offset off a time-of-day string.
fn split_offset(s: &str) -> Option<(&str, Option<FixedOffset>)> {
    if let Some(clock) = s.strip_suffix(['Z', 'z']) {
        return Some((clock, FixedOffset::east_opt(0)));
    }
    match s.rfind(['+', '-']) {
        Some(idx) => Some((&s[..idx], Some(parse_offset(&s[idx..])?))),
        None => Some((s, None)),
    }
}

impl fmt::Display for TemporalInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemporalInput::Epoch(secs) => write!(f, "{}", secs),
            TemporalInput::Calendar(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<i64> for TemporalInput {
    fn from(secs: i64) -> Self {
        TemporalInput::Epoch(secs)
    }
}

impl From<&str> for TemporalInput {
    fn from(s: &str) -> Self {
        TemporalInput::Calendar(s.to_string())
    }
}

impl From<String> for TemporalInput {
    fn from(s: String) -> Self {
        TemporalInput::Calendar(s)
    }
}

/// An optionally signed run of digits is epoch seconds; anything else is a
/// calendar string. Never fails: validity is checked on [`TemporalInput::resolve`].
impl FromStr for TemporalInput {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('-').unwrap_or(s);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(secs) = s.parse::<i64>() {
                return Ok(TemporalInput::Epoch(secs));
            }
        }
        Ok(TemporalInput::Calendar(s.to_string()))
    }
}

// Accepts JSON integers (epoch seconds), whole-valued floats, and strings.
impl<'de> Deserialize<'de> for TemporalInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de;

        struct TemporalInputVisitor;

        impl<'de> de::Visitor<'de> for TemporalInputVisitor {
            type Value = TemporalInput;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("epoch seconds or an ISO-8601 date string")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<TemporalInput, E> {
                Ok(TemporalInput::Epoch(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<TemporalInput, E> {
                i64::try_from(value)
                    .map(TemporalInput::Epoch)
                    .map_err(|_| E::custom(format!("epoch seconds out of range: {}", value)))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<TemporalInput, E> {
                if value.fract() != 0.0 {
                    return Err(E::custom(format!(
                        "epoch seconds must be a whole number: {}",
                        value
                    )));
                }
                if !value.is_finite() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
                    return Err(E::custom(format!("epoch seconds out of range: {}", value)));
                }
                Ok(TemporalInput::Epoch(value as i64))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<TemporalInput, E> {
                Ok(TemporalInput::Calendar(value.to_string()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<TemporalInput, E> {
                Ok(TemporalInput::Calendar(value))
            }
        }

        deserializer.deserialize_any(TemporalInputVisitor)
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
