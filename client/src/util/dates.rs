//! Date formatting for event dates and row timestamps.
//!
//! The backend speaks ISO 8601; `<input type="date">` speaks `YYYY-MM-DD`.
//! Everything renders in UTC so SSR and hydrated output match.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

fn parse_date_input(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

fn parse_instant(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .map(|dt| dt.to_offset(UtcOffset::UTC))
        .or_else(|| parse_date_input(raw).map(|d| d.midnight().assume_utc()))
}

/// `"2024-08-17T10:00:00.000Z"` → `"August 17, 2024"`. Unparseable input is
/// shown as-is.
#[must_use]
pub fn display_date(iso: &str) -> String {
    parse_instant(iso)
        .and_then(|dt| dt.format(format_description!("[month repr:long] [day padding:none], [year]")).ok())
        .unwrap_or_else(|| iso.to_owned())
}

/// `"2024-08-17T10:00:00.000Z"` → `"2024-08-17 10:00"`.
#[must_use]
pub fn display_timestamp(iso: &str) -> String {
    parse_instant(iso)
        .and_then(|dt| dt.format(format_description!("[year]-[month]-[day] [hour]:[minute]")).ok())
        .unwrap_or_else(|| iso.to_owned())
}

/// Value for a date input; empty when the stored date is missing or invalid.
#[must_use]
pub fn to_date_input(iso: &str) -> String {
    parse_instant(iso)
        .and_then(|dt| dt.date().format(format_description!("[year]-[month]-[day]")).ok())
        .unwrap_or_default()
}

/// Convert a date input back to the ISO form the backend stores.
#[must_use]
pub fn from_date_input(raw: &str) -> Option<String> {
    let instant = parse_date_input(raw)?.midnight().assume_utc();
    instant
        .format(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"))
        .ok()
}

/// Milliseconds since the epoch, for ordering rows by timestamp.
#[must_use]
pub fn timestamp_millis(iso: &str) -> Option<i128> {
    parse_instant(iso).map(|dt| dt.unix_timestamp_nanos() / 1_000_000)
}
