//! Serde helpers for loosely-typed wire fields.

/// Custom serialization for timestamps to ensure consistent ISO 8601 output
/// while tolerating the string, epoch-millisecond, and null forms seen in
/// stored records. Unreadable values fall back to the current time, matching
/// how the client has always treated records without a usable date.
pub mod timestamp_format {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(parse_value(&raw))
    }

    fn parse_value(raw: &Value) -> DateTime<Utc> {
        match raw {
            Value::String(s) => parse_str(s.trim()).unwrap_or_else(Utc::now),
            Value::Number(n) => n
                .as_i64()
                .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
                .unwrap_or_else(Utc::now),
            _ => Utc::now(),
        }
    }

    fn parse_str(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        // Date-only values use midnight UTC
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
    }

}

/// Custom deserialization for currency amounts that may arrive as JSON
/// numbers or strings. Junk normalizes to zero so aggregation never sees
/// NaN; validation of user-entered amounts happens before submission, not
/// here.
pub mod amount_format {
    use serde::{self, Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(*amount)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(parse_value(&raw))
    }

    fn parse_value(raw: &Value) -> f64 {
        let parsed = match raw {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            _ => 0.0,
        };
        if parsed.is_finite() {
            parsed
        } else {
            0.0
        }
    }

}
