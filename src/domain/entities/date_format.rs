//! Lenient input for `fecha` fields.
//!
//! Accepted forms, all reduced to a calendar date:
//! - a plain date: `2024-11-05`
//! - an RFC 3339 timestamp, as a browser `Date` serializes:
//!   `2024-11-05T23:00:00.000Z`. The date is read in the timestamp's own offset.
//! - epoch milliseconds: `1730847600000` (UTC)
//!
//! Output is always `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Millis(i64),
}

/// `deserialize_with` target for `Option<NaiveDate>` fields.
///
/// Pair it with `#[serde(default)]` so a missing field stays `None`.
pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawDate>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawDate::Text(text)) => parse_text(&text).map(Some).map_err(de::Error::custom),
        Some(RawDate::Millis(millis)) => DateTime::<Utc>::from_timestamp_millis(millis)
            .map(|instant| Some(instant.date_naive()))
            .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {}", millis))),
    }
}

fn parse_text(text: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(text)
        .map(|instant| instant.date_naive())
        .map_err(|_| {
            format!(
                "invalid date `{}`: expected YYYY-MM-DD, an RFC 3339 timestamp or epoch milliseconds",
                text
            )
        })
}
