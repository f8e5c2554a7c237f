//! Time-of-day and calendar-date parsing in the booking wire format.
//!
//! Times travel as 24-hour `HH:mm` strings (`HH:mm:ss` is accepted on input and
//! the seconds are dropped). Dates travel as `YYYY-MM-DD`.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::error::{Result, SlotError};

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse a `HH:mm` or `HH:mm:ss` string into a [`NaiveTime`] with zero seconds.
///
/// # Errors
/// Returns `SlotError::InvalidTime` if the string is not a valid 24-hour time.
pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime> {
    let trimmed = raw.trim();
    let parsed = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|e| SlotError::InvalidTime(format!("'{}': {}", raw, e)))?;
    // Slots are minute-granular; sub-minute precision never reaches the engine.
    Ok(from_minutes(minutes_of_day(parsed)).unwrap_or(parsed))
}

/// Parse a `YYYY-MM-DD` string into a [`NaiveDate`].
///
/// # Errors
/// Returns `SlotError::InvalidDate` if the string is not a valid calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| SlotError::InvalidDate(format!("'{}': {}", raw, e)))
}

/// Render a time as `HH:mm`.
pub fn format_hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Minutes elapsed since midnight.
pub fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Inverse of [`minutes_of_day`]. `None` when `minutes` is past the end of the day.
pub fn from_minutes(minutes: u32) -> Option<NaiveTime> {
    if minutes >= MINUTES_PER_DAY {
        return None;
    }
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

/// Serde adapter for `HH:mm` time fields.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_hhmm(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_time_of_day(&raw).map_err(de::Error::custom)
    }
}
