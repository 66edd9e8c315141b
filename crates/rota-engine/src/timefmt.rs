//! Serde helpers for the wire formats shared by all scheduling records.
//!
//! Instants are ISO-8601 local date-times with no offset — all records share
//! one implicit timezone. Written at minute precision (`2026-03-02T09:00`);
//! an optional seconds component is accepted on input. Times of day are
//! 24-hour `HH:MM`.

use chrono::{NaiveDateTime, NaiveTime, ParseResult};

const LOCAL_MINUTES: &str = "%Y-%m-%dT%H:%M";
const LOCAL_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const HHMM: &str = "%H:%M";

/// Parse a naive local date-time, with or without a seconds component.
pub fn parse_local(s: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, LOCAL_SECONDS)
        .or_else(|_| NaiveDateTime::parse_from_str(s, LOCAL_MINUTES))
}

/// Render a naive local date-time at minute precision.
pub fn format_local(dt: &NaiveDateTime) -> String {
    dt.format(LOCAL_MINUTES).to_string()
}

/// Parse a 24-hour `HH:MM` time of day.
pub fn parse_hhmm(s: &str) -> ParseResult<NaiveTime> {
    NaiveTime::parse_from_str(s, HHMM)
}

/// `#[serde(with = "timefmt::local_minutes")]` for `NaiveDateTime` fields.
pub mod local_minutes {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_local(dt))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_local(&s).map_err(de::Error::custom)
    }
}

/// `#[serde(with = "timefmt::hhmm")]` for `NaiveTime` fields.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(super::HHMM).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_hhmm(&s).map_err(de::Error::custom)
    }
}
