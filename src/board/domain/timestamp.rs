//! Timestamp text encoding for persisted task records.
//!
//! Timestamps are written as ISO-8601 UTC with millisecond precision
//! (`2025-03-01T09:30:00.000Z`). Reading accepts that form, any RFC 3339
//! offset, a bare `YYYY-MM-DD` date (midnight UTC), or integer epoch
//! milliseconds.

use chrono::{DateTime, NaiveDate, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serializer, de};

/// Truncates a timestamp to the millisecond precision of the text form.
#[must_use]
pub fn to_millis(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp.trunc_subsecs(3)
}

/// Formats a timestamp in the canonical text form.
#[must_use]
pub fn format(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a timestamp from any accepted text form.
#[must_use]
pub fn parse(text: &str) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(to_millis(parsed.with_timezone(&Utc)));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Millis(i64),
}

impl RawTimestamp {
    fn resolve(self) -> Option<DateTime<Utc>> {
        match self {
            Self::Text(text) => parse(&text),
            Self::Millis(millis) => DateTime::from_timestamp_millis(millis),
        }
    }
}

/// Serde adapter for a mandatory timestamp field.
pub mod required {
    use super::{DateTime, Deserialize, Deserializer, RawTimestamp, Serializer, Utc, de};

    /// Writes the canonical text form.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S: Serializer>(
        timestamp: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format(timestamp))
    }

    /// Reads any accepted form.
    ///
    /// # Errors
    ///
    /// Fails when the value is not a recognisable timestamp.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        RawTimestamp::deserialize(deserializer)?
            .resolve()
            .ok_or_else(|| de::Error::custom("unrecognised timestamp"))
    }
}

/// Serde adapter for an optional timestamp field.
///
/// An unreadable value decodes as absent instead of failing the record.
pub mod optional {
    use super::{DateTime, Deserialize, Deserializer, RawTimestamp, Serializer, Utc};

    /// Writes the canonical text form, or `null` when absent.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S: Serializer>(
        timestamp: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match timestamp {
            Some(value) => serializer.serialize_str(&super::format(value)),
            None => serializer.serialize_none(),
        }
    }

    /// Reads any accepted form; `null` and unreadable values become `None`.
    ///
    /// # Errors
    ///
    /// Propagates deserializer failures unrelated to the timestamp value.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        let Some(value) = raw else {
            return Ok(None);
        };
        let resolved = RawTimestamp::deserialize(value)
            .ok()
            .and_then(RawTimestamp::resolve);
        if resolved.is_none() {
            tracing::warn!("discarding unreadable due date");
        }
        Ok(resolved)
    }
}
