//! Serde utilities for server timestamps.
//!
//! The service renders timestamps with Python's `isoformat()`, which yields naive
//! values such as `2025-10-15T09:00:00` or `2025-10-15T09:00:00.123456`. Values
//! carrying an offset are accepted too and normalised to naive UTC.

use chrono::{DateTime, NaiveDateTime};

/// Naive date-time layouts accepted from the server and from user input.
pub const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Layout used when sending date-times to the server.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses an ISO-8601 timestamp, with or without offset.
#[must_use]
pub fn parse_naive_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Module for required ISO-8601 timestamps.
pub mod iso_datetime {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serializes a timestamp in the wire layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(super::WIRE_FORMAT).to_string())
    }

    /// Deserializes a timestamp from naive or offset-bearing ISO-8601.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a string or does not parse.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_naive_timestamp(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
    }

    /// Module for optional timestamps, where `null` maps to `None`.
    pub mod option {
        use chrono::NaiveDateTime;
        use serde::{Deserialize, Deserializer, Serializer};

        /// Serializes an optional timestamp.
        ///
        /// # Errors
        ///
        /// Returns an error if the serializer fails.
        #[allow(clippy::ref_option)]
        pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(v) => super::serialize(v, serializer),
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes an optional timestamp.
        ///
        /// # Errors
        ///
        /// Returns an error if a present value does not parse.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
        where
            D: Deserializer<'de>,
        {
            #[derive(Deserialize)]
            #[serde(transparent)]
            struct Wrapped(#[serde(with = "super")] NaiveDateTime);

            Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(v)| v))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Stamped {
        #[serde(default, with = "iso_datetime::option")]
        at: Option<NaiveDateTime>,
    }

    fn nine_am() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parses_python_isoformat() {
        assert_eq!(parse_naive_timestamp("2025-10-15T09:00:00"), Some(nine_am()));
        let with_micros = parse_naive_timestamp("2025-10-15T09:00:00.123456").unwrap();
        assert_eq!(with_micros.and_utc().timestamp_subsec_micros(), 123_456);
    }

    #[test]
    fn test_parses_offset_as_utc() {
        assert_eq!(parse_naive_timestamp("2025-10-15T11:00:00+02:00"), Some(nine_am()));
        assert_eq!(parse_naive_timestamp("2025-10-15T09:00:00Z"), Some(nine_am()));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_naive_timestamp("next tuesday"), None);
    }

    #[test]
    fn test_option_handles_null_and_missing() {
        let s: Stamped = serde_json::from_str(r#"{"at": null}"#).unwrap();
        assert!(s.at.is_none());
        let s: Stamped = serde_json::from_str("{}").unwrap();
        assert!(s.at.is_none());
        let s: Stamped = serde_json::from_str(r#"{"at": "2025-10-15T09:00:00"}"#).unwrap();
        assert_eq!(s.at, Some(nine_am()));
    }

    #[test]
    fn test_serializes_without_zero_fraction() {
        let json = serde_json::to_string(&Stamped { at: Some(nine_am()) }).unwrap();
        assert_eq!(json, r#"{"at":"2025-10-15T09:00:00"}"#);
    }
}
