//! Backend timestamp handling
//!
//! The backend serializes timestamps either as a numeric array
//! `[year, month, day, hour, minute, second, nanos]` with a 1-based month,
//! or as an ISO-8601 string. Both forms decode into [`BackendDateTime`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::Value;
use std::fmt;

/// Marker rendered when a timestamp is missing
pub const DATE_ABSENT: &str = "날짜 없음";

/// Marker rendered when a timestamp cannot be parsed
pub const DATE_INVALID: &str = "날짜 오류";

const DISPLAY_FORMAT: &str = "%Y.%m.%d";
const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A timestamp received from the backend, in backend-local wall time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BackendDateTime(pub NaiveDateTime);

impl BackendDateTime {
    /// Parse either wire form from a raw JSON value
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(parts) => parse_parts(parts),
            Value::String(text) => parse_text(text),
            _ => None,
        }
        .map(BackendDateTime)
    }

    /// Render as `YYYY.MM.DD`
    pub fn format_date(&self) -> String {
        self.0.format(DISPLAY_FORMAT).to_string()
    }
}

impl fmt::Display for BackendDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(WIRE_FORMAT))
    }
}

impl Serialize for BackendDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BackendDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        BackendDateTime::from_value(&value)
            .ok_or_else(|| de::Error::custom(format!("invalid backend timestamp: {}", value)))
    }
}

/// Format a raw JSON timestamp as `YYYY.MM.DD`
///
/// Never fails: missing values render as [`DATE_ABSENT`], anything that
/// cannot be parsed renders as [`DATE_INVALID`].
pub fn format_date(value: &Value) -> String {
    match value {
        Value::Null => DATE_ABSENT.to_string(),
        Value::String(text) if text.trim().is_empty() => DATE_ABSENT.to_string(),
        other => BackendDateTime::from_value(other)
            .map(|parsed| parsed.format_date())
            .unwrap_or_else(|| DATE_INVALID.to_string()),
    }
}

/// Format an optional typed timestamp as `YYYY.MM.DD`
pub fn format_date_opt(value: Option<&BackendDateTime>) -> String {
    value
        .map(BackendDateTime::format_date)
        .unwrap_or_else(|| DATE_ABSENT.to_string())
}

fn parse_parts(parts: &[Value]) -> Option<NaiveDateTime> {
    if parts.len() < 3 || parts.len() > 7 {
        return None;
    }

    let mut numbers = [0i64; 7];
    for (slot, part) in numbers.iter_mut().zip(parts) {
        *slot = part.as_i64()?;
    }

    let [year, month, day, hour, minute, second, nanos] = numbers;
    NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )?
    .and_hms_nano_opt(
        u32::try_from(hour).ok()?,
        u32::try_from(minute).ok()?,
        u32::try_from(second).ok()?,
        u32::try_from(nanos).ok()?,
    )
}

fn parse_text(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Some(with_offset.naive_local());
    }

    for pattern in [WIRE_FORMAT, "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(parsed);
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
