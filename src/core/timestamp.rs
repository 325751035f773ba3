//! Timestamp formatting utilities
//!
//! Channels stamp each line with the local date, the local time, both or
//! neither, in the classic console layout:
//!
//! ```text
//! [*] 2025/01/08 10:30:45 server started
//! ```

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_level_router::core::TimestampFormat;
///
/// assert_eq!(TimestampFormat::from_flags(true, false), TimestampFormat::Date);
/// assert_eq!(TimestampFormat::from_flags(false, false), TimestampFormat::None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// No stamp
    None,

    /// Date only: `2025/01/08 `
    Date,

    /// Time only: `10:30:45 `
    Time,

    /// Date and time: `2025/01/08 10:30:45 `
    #[default]
    DateAndTime,
}

impl TimestampFormat {
    /// Pick a format from the date/time flags accepted by level configuration
    #[must_use]
    pub fn from_flags(date_stamps: bool, time_stamps: bool) -> Self {
        match (date_stamps, time_stamps) {
            (true, true) => TimestampFormat::DateAndTime,
            (true, false) => TimestampFormat::Date,
            (false, true) => TimestampFormat::Time,
            (false, false) => TimestampFormat::None,
        }
    }

    fn pattern(&self) -> Option<&'static str> {
        match self {
            TimestampFormat::None => None,
            TimestampFormat::Date => Some("%Y/%m/%d "),
            TimestampFormat::Time => Some("%H:%M:%S "),
            TimestampFormat::DateAndTime => Some("%Y/%m/%d %H:%M:%S "),
        }
    }

    /// Render a stamp, including its trailing separator
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_level_router::core::TimestampFormat;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).single().unwrap();
    /// assert_eq!(TimestampFormat::Time.format(&at), "10:30:45 ");
    /// ```
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self.pattern() {
            Some(pattern) => datetime.format(pattern).to_string(),
            None => String::new(),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, TimestampFormat::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed_datetime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(TimestampFormat::from_flags(true, true), TimestampFormat::DateAndTime);
        assert_eq!(TimestampFormat::from_flags(true, false), TimestampFormat::Date);
        assert_eq!(TimestampFormat::from_flags(false, true), TimestampFormat::Time);
        assert_eq!(TimestampFormat::from_flags(false, false), TimestampFormat::None);
    }

    #[test]
    fn test_date_format() {
        assert_eq!(TimestampFormat::Date.format(&fixed_datetime()), "2025/01/08 ");
    }

    #[test]
    fn test_time_format() {
        assert_eq!(TimestampFormat::Time.format(&fixed_datetime()), "10:30:45 ");
    }

    #[test]
    fn test_date_and_time_format() {
        assert_eq!(
            TimestampFormat::DateAndTime.format(&fixed_datetime()),
            "2025/01/08 10:30:45 "
        );
    }

    #[test]
    fn test_none_format_is_empty() {
        assert_eq!(TimestampFormat::None.format(&fixed_datetime()), "");
    }

    #[test]
    fn test_default_is_date_and_time() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::DateAndTime);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TimestampFormat::Time).expect("serialize");
        assert_eq!(json, "\"Time\"");

        let format: TimestampFormat =
            serde_json::from_str("\"DateAndTime\"").expect("deserialize");
        assert_eq!(format, TimestampFormat::DateAndTime);
    }
}
