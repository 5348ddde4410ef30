//! Utility functions for routine timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a routine timestamp into UTC.
///
/// Accepts:
/// - RFC3339 datetime (`2024-01-01T10:00:00Z`, `2024-01-01T10:00:00.000+02:00`)
/// - Naive datetime `YYYY-MM-DDTHH:MM:SS`, taken as UTC
/// - Date only `YYYY-MM-DD`, taken as midnight UTC
pub fn parse_date_time(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ndt.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(|ndt| ndt.and_utc());
    }
    None
}

/// Render a timestamp the way the routine table shows it, e.g. `Jan 1, 2024, 10:00 AM`.
///
/// Unparsable input is returned unchanged.
pub fn format_date_time(s: &str) -> String {
    match parse_date_time(s) {
        Some(dt) => dt.format("%b %-d, %Y, %-I:%M %p").to_string(),
        None => s.to_string(),
    }
}
