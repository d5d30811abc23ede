//! Fixed-width UTC timestamps for ICS properties.

use chrono::{DateTime, TimeZone, Utc};

const ICS_UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Render `instant` as `YYYYMMDDTHHMMSSZ` after converting it to UTC.
/// Sub-second precision is dropped.
pub fn format_utc_timestamp<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.with_timezone(&Utc).format(ICS_UTC_FORMAT).to_string()
}
