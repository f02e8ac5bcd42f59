//! Wire Timestamps
//!
//! The API exchanges instants as ISO-8601 strings with millisecond precision
//! and a literal `Z` suffix: `YYYY-MM-DDTHH:MM:SS.sssZ`.
//!
//! # Examples
//!
//! ```rust
//! use notion_core::models::time::{format_timestamp, parse_timestamp};
//! use chrono::{TimeZone, Utc};
//!
//! let instant = Utc.with_ymd_and_hms(2021, 5, 13, 10, 0, 0).unwrap();
//! assert_eq!(format_timestamp(instant), "2021-05-13T10:00:00.000Z");
//! assert_eq!(parse_timestamp("2021-05-13T10:00:00.000Z").unwrap(), instant);
//! ```

use crate::models::DocumentError;
use chrono::{DateTime, NaiveDateTime, Utc};

/// chrono format string for the wire representation
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Format an instant for the wire
pub fn format_timestamp(t: DateTime<Utc>) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a wire timestamp
///
/// # Errors
///
/// Returns `DocumentError::Decode` if the string is not in wire format.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, DocumentError> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| DocumentError::decode(format!("invalid timestamp '{}': {}", s, e)))
}
