//! Calendar date parsing and ISO 8601 (`YYYY-MM-DD`) formatting.
//!
//! Two passes, first success wins:
//!
//! 1. a direct pass over unambiguous four-digit-year layouts (ISO dates and
//!    date-times, RFC 3339, US slash dates, spelled-out months);
//! 2. the explicit spreadsheet formats `yyyy-MM-dd`, `M/d/yy`, `MM/dd/yy`,
//!    `d-MMM-yy`, `dd-MMM-yy`.
//!
//! Unparseable input is preserved as-is so the caller can still see it.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Cell values that mean "no date recorded".
const DATE_PLACEHOLDERS: &[&str] = &["—", "-", "NA", "N/A", "n/a"];

const DIRECT_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DIRECT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",  // 09/01/2025
    "%d-%b-%Y",  // 1-Sep-2025
    "%d %b %Y",  // 1 Sep 2025
    "%b %d, %Y", // Sep 1, 2025
    "%B %d, %Y", // September 1, 2025
];

/// Explicit fallback formats as (spreadsheet pattern, chrono format).
///
/// chrono accepts unpadded day/month numbers, so the padded and unpadded
/// patterns share a format string.
pub const EXPLICIT_DATE_FORMATS: &[(&str, &str)] = &[
    ("yyyy-MM-dd", "%Y-%m-%d"),
    ("M/d/yy", "%m/%d/%y"),
    ("MM/dd/yy", "%m/%d/%y"),
    ("d-MMM-yy", "%d-%b-%y"),
    ("dd-MMM-yy", "%d-%b-%y"),
];

/// Returns true for blank cells and "no date" placeholders.
pub fn is_blank_date(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || DATE_PLACEHOLDERS.contains(&trimmed)
}

/// Parses a date in any supported layout.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_direct(trimmed).or_else(|| parse_explicit(trimmed))
}

fn parse_direct(value: &str) -> Option<NaiveDate> {
    // Keep the calendar date as written, whatever the offset.
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    DIRECT_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
        .filter(has_four_digit_year)
        .or_else(|| {
            DIRECT_DATE_FORMATS.iter().find_map(|fmt| {
                NaiveDate::parse_from_str(value, fmt)
                    .ok()
                    .filter(has_four_digit_year)
            })
        })
}

/// `%Y` happily reads "25" as the year 25; two-digit years belong to the
/// explicit pass.
fn has_four_digit_year(date: &NaiveDate) -> bool {
    date.year() >= 1000
}

fn parse_explicit(value: &str) -> Option<NaiveDate> {
    EXPLICIT_DATE_FORMATS
        .iter()
        .find_map(|(_, fmt)| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_iso8601_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Normalizes a raw date cell.
///
/// - `None` for blank input and placeholders
/// - `Some("YYYY-MM-DD")` when any supported layout matches
/// - `Some(trimmed input)` otherwise
pub fn normalize_date(value: &str) -> Option<String> {
    if is_blank_date(value) {
        return None;
    }
    let trimmed = value.trim();
    Some(parse_date(trimmed).map_or_else(|| trimmed.to_string(), format_iso8601_date))
}
