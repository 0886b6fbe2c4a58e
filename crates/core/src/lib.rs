// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! datespan-core: short human-readable labels for dates and date ranges
//!
//! ```rust
//! use datespan_core::{format_date, format_date_range};
//!
//! assert_eq!(format_date("2024-03-07")?, "Mar 7, 2024");
//! assert_eq!(format_date_range("2025-09-29", "2025-10-02")?, "Sep 29 — Oct 2, 2025");
//! # Ok::<(), datespan_core::DateError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod locale;
pub mod record;
pub mod zone;

pub use config::FormatConfig;
pub use error::{ConfigError, DateError};
pub use format::{format_date, format_date_range, Compaction, DateFormatter, FormatOptions};
pub use input::TemporalInput;
pub use locale::Locale;
pub use record::DatedRecord;
pub use zone::Zone;
