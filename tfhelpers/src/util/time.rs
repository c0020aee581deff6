//! Timestamps in the RFC 850 layout, e.g. `Thursday, 01-Jan-70 00:00:00 UTC`
//!
//! Everything is rendered in UTC. The two-digit year means parsing maps
//! `69`-`99` to the 1900s and `00`-`68` to the 2000s, so only instants
//! between 1969 and 2068 survive a round trip.

use crate::error::{Error, Result};
use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{DateTime, Utc};

/// chrono format string for the timestamp layout
pub const TIMESTAMP_FORMAT: &str = "%A, %d-%b-%y %H:%M:%S UTC";

pub fn current_timestamp() -> String {
    format_timestamp(&Utc::now())
}

pub fn parse_timestamp(ts: &str) -> Result<DateTime<Utc>> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, ts, StrftimeItems::new(TIMESTAMP_FORMAT))?;

    // chrono pivots `%y` at 70; `69` belongs to the 1900s here
    if parsed.year_mod_100() == Some(69) && parsed.year_div_100().is_none() {
        parsed.set_year_div_100(19)?;
    }

    Ok(parsed.to_naive_datetime_with_offset(0)?.and_utc())
}

pub fn format_timestamp(t: &DateTime<Utc>) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

/// True for the values APIs use to mean "never": `""` and `"0"`
pub fn is_zero_timestamp(ts: &str) -> bool {
    ts.is_empty() || ts == "0"
}

/// The current time when `ts` is unset, otherwise `ts` unchanged
pub fn timestamp_now_or_empty(ts: &str) -> String {
    if is_zero_timestamp(ts) {
        current_timestamp()
    } else {
        ts.to_string()
    }
}

/// Seconds since the Unix epoch
pub fn unix_timestamp() -> i64 {
    Utc::now().timestamp()
}

pub fn unix_timestamp_to_string(secs: i64) -> Result<String> {
    DateTime::from_timestamp(secs, 0)
        .map(|t| format_timestamp(&t))
        .ok_or(Error::TimestampOutOfRange(secs))
}

pub fn string_to_unix_timestamp(ts: &str) -> Result<i64> {
    Ok(parse_timestamp(ts)?.timestamp())
}
