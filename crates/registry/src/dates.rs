//! Date string conversion between the display form (`day/month/year`) and the
//! date-control form (`year-month-day`).
//!
//! Purely positional reassembly: no calendar, timezone, or range checks.
//! Malformed input yields malformed (but never panicking) output; the
//! round-trip is lossless only for strictly two-digit day/month strings with
//! the expected separators.

/// `"2023-05-09"` → `"09/05/2023"`; empty input stays empty.
pub fn format_display(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    let mut parts = date.splitn(3, '-');
    let year = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    let day = parts.next().unwrap_or_default();
    format!("{day}/{month}/{year}")
}

/// `"09/05/2023"` → `"2023-05-09"`; empty input stays empty.
pub fn format_input(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    let mut parts = date.splitn(3, '/');
    let day = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    let year = parts.next().unwrap_or_default();
    format!("{year}-{month}-{day}")
}
