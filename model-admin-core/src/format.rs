//! Value formatter
//!
//! Renders arbitrary record values as display text for table cells and the
//! read-only view dialog. [`format_value`] is total: every JSON value has a
//! rendering and nothing here panics.

use std::fmt::Display;

use chrono::{Local, TimeZone};
use serde_json::Value;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::utils::datetime::{self, DISPLAY_FORMAT};

/// Placeholder for `null` or absent values.
pub const EMPTY_PLACEHOLDER: &str = "-";

/// Formats a value using the local time zone for date-times.
pub fn format_value(value: &Value) -> String {
    format_value_in(value, &Local)
}

/// Formats a value, rendering date-times in `tz`.
pub fn format_value_in<Tz>(value: &Value, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match value {
        Value::Null => EMPTY_PLACEHOLDER.to_string(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::String(s) => format_text(s, tz),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn format_text<Tz>(s: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if s.contains('T') {
        if let Some(instant) = datetime::parse_instant(s) {
            return datetime::format_in(&instant, tz, DISPLAY_FORMAT);
        }
    }
    s.to_string()
}

/// Cuts `text` to at most `max_width` terminal columns, ending with `…`
/// when something was removed. Newlines are flattened to spaces.
pub fn truncate_cell(text: &str, max_width: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.width() <= max_width {
        return flat;
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in flat.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
