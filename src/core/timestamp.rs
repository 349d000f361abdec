//! Timestamp formatting for file output
//!
//! The file sink prefixes every line with a local-time stamp at second
//! resolution: `[2025-01-08 10:30:45]`. The formatting is split from the
//! clock so tests can exercise the exact shape with a fixed datetime.

use chrono::{DateTime, Local, TimeZone};

/// strftime pattern for the file line stamp (second resolution, no zone)
pub const LINE_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a datetime as a line stamp, without brackets
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use logpipe::core::timestamp::line_stamp;
///
/// let datetime = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(line_stamp(&datetime), "2025-01-08 10:30:45");
/// ```
#[must_use]
pub fn line_stamp<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    datetime.format(LINE_STAMP_FORMAT).to_string()
}

/// Line stamp for the current local time
#[must_use]
pub fn now_stamp() -> String {
    line_stamp(&Local::now())
}
