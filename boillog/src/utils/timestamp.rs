//! # Record Timestamps
//!
//! Log lines carry a local-time stamp in `YYYY-MM-DD HH:MM:SS` form. The helpers
//! here take a `SystemTime` so callers and tests can format a fixed instant.

use chrono::{DateTime, Local};
use std::time::SystemTime;

/// `strftime` pattern for record timestamps.
pub const RECORD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format the current time as YYYY-MM-DD HH:MM:SS in local time
pub fn format_current_time() -> String {
    format_time(SystemTime::now())
}

/// Format a SystemTime as YYYY-MM-DD HH:MM:SS in local time
pub fn format_time(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format(RECORD_TIME_FORMAT).to_string()
}

/// Whether `s` has the exact shape produced by [`format_time`].
pub fn is_record_timestamp(s: &str) -> bool {
    chrono::NaiveDateTime::parse_from_str(s, RECORD_TIME_FORMAT).is_ok() && s.len() == 19
}
