//! `datespan range` specs

use crate::prelude::*;

#[test]
fn same_month() {
    cli()
        .args(&["range", "2025-09-01", "2025-09-04"])
        .passes()
        .stdout_eq("Sep 1 — 4, 2025\n");
}

#[test]
fn same_year() {
    cli()
        .args(&["range", "2025-09-29", "2025-10-02"])
        .passes()
        .stdout_eq("Sep 29 — Oct 2, 2025\n");
}

#[test]
fn different_years() {
    cli()
        .args(&["range", "2025-12-30", "2026-01-03"])
        .passes()
        .stdout_eq("Dec 30, 2025 — Jan 3, 2026\n");
}

#[test]
fn same_day_mixed_representations() {
    cli()
        .args(&["range", "1757021400", "2025-09-04T08:00:00Z"])
        .passes()
        .stdout_eq("Sep 4, 2025\n");
}

#[test]
fn zero_epoch_renders_unix_epoch() {
    cli()
        .args(&["range", "0", "0"])
        .passes()
        .stdout_eq("Jan 1, 1970\n");
}

#[test]
fn en_gb_same_year() {
    cli()
        .args(&["range", "2025-09-29", "2025-10-02", "--locale", "en_GB"])
        .passes()
        .stdout_eq("29 Sep — 2 Oct 2025\n");
}
