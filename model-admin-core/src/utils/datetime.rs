//! Datetime parsing and rendering helpers.
//!
//! Stored instants travel as ISO-8601 strings. Editors and the formatter
//! render them in a caller-supplied time zone (`Local` in production, a
//! `FixedOffset` in tests).

use std::fmt::Display;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Minute-precision layout used by datetime editors.
pub const EDITOR_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Second-precision layout used for read-only display.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Layouts accepted for zone-less timestamps, tried in order.
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parses a stored instant.
///
/// RFC3339 strings are taken at their offset; zone-less ISO strings are
/// read as UTC, matching what the backend writes.
pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Renders an instant as ISO-8601 UTC with millisecond precision
/// (`2024-05-01T10:30:00.000Z`).
pub fn to_iso_instant(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Renders an instant in `tz` using `layout`.
pub fn format_in<Tz>(dt: &DateTime<Utc>, tz: &Tz, layout: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.with_timezone(tz).format(layout).to_string()
}

/// Interprets minute-precision editor text as wall-clock time in `tz`.
///
/// Returns `None` for malformed text and for wall-clock times that do not
/// exist in `tz` (DST gaps). Ambiguous times resolve to the earlier instant.
pub fn parse_local_minute_in<Tz: TimeZone>(text: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(text.trim(), EDITOR_FORMAT).ok()?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
