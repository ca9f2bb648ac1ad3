//! ISO-8601 UTC timestamp text handling.
//!
//! Parsing accepts both the `Z` suffix and an explicit `+00:00` offset as
//! equivalent. Rendering always emits the `Z` form, with fractional seconds
//! included only when non-zero.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{Result, RotaError};

/// Parse an ISO-8601 timestamp string into a UTC instant.
///
/// # Errors
/// Returns `RotaError::MalformedTimestamp` (carrying the offending text)
/// when the string is not a valid ISO-8601 datetime with an offset.
pub fn parse_utc(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| RotaError::MalformedTimestamp(raw.to_string()))
}

/// Render a UTC instant as ISO-8601 text with a literal `Z` suffix.
pub fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Serde adapter for `DateTime<Utc>` fields, used via
/// `#[serde(with = "crate::time::timestamp")]`.
pub mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_utc(dt))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_utc(&raw).map_err(de::Error::custom)
    }
}
