// src/recipe/timestamp.rs

//! Record timestamps
//!
//! Timestamps are UTC, truncated to whole seconds, and rendered as
//! `YYYY-MM-DD HH:MM:SS` both on the wire and in the SQLite table.

use crate::error::{Error, Result};
use chrono::{NaiveDateTime, SubsecRound, Utc};

/// Textual form used everywhere a timestamp leaves memory
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current time at the rendered resolution
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(0)
}

/// Render a timestamp
pub fn format(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a rendered timestamp
pub fn parse(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|e| Error::InvalidTimestamp(format!("'{}': {}", s, e)))
}

/// Serde adapter for [`TIMESTAMP_FORMAT`] fields
pub(crate) mod serde_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_now_has_no_subseconds() {
        assert_eq!(now().nanosecond(), 0);
    }

    #[test]
    fn test_format_and_parse() {
        let ts = NaiveDate::from_ymd_opt(2024, 12, 26)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap();
        assert_eq!(format(&ts), "2024-12-26 09:05:07");
        assert_eq!(parse("2024-12-26 09:05:07").unwrap(), ts);
    }

    #[test]
    fn test_parse_rejects_other_layouts() {
        assert!(matches!(
            parse("2024-12-26T09:05:07Z"),
            Err(Error::InvalidTimestamp(_))
        ));
    }
}
