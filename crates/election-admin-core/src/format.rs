//! Timestamp Formatting
//!
//! Creation timestamps render as en-US `MM/DD/YYYY hh:MM AM` in the viewer's
//! UTC offset. The offset is passed in so rendering stays deterministic.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};

const DISPLAY_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// Parse a backend timestamp; naive values are taken as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
                .ok()
                .map(|naive| naive.and_utc())
        })
}

/// Render `created_at` for the list; unparseable input is shown as-is
pub fn format_created_at(raw: &str, offset: FixedOffset) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts.with_timezone(&offset).format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Convert JavaScript's `Date.getTimezoneOffset()` (minutes *behind* UTC)
/// into a chrono offset. Out-of-range values fall back to UTC.
pub fn offset_from_js_minutes(minutes: i32) -> FixedOffset {
    minutes
        .checked_mul(-60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix())
}
