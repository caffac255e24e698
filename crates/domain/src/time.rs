//! Time and timestamp helpers.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};

/// UTC timestamp used for `created_at`, activity times, etc.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse a timestamp the way the backup API emits them.
///
/// Accepts RFC 3339, naive ISO-8601 (`T` or space separated, read as UTC)
/// and plain dates. Returns `None` for anything else.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Coarse relative time between `then` and `now`.
///
/// Under an hour renders `"N mins"`, under a day `"N hours"`, otherwise
/// `"N days"`. Values are floored and never pluralization-corrected.
/// Timestamps in the future count as zero elapsed time.
#[must_use]
pub fn time_ago(then: Timestamp, now: Timestamp) -> String {
    let elapsed = (now - then).max(Duration::zero());
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    if minutes < 60 {
        format!("{minutes} mins")
    } else if hours < 24 {
        format!("{hours} hours")
    } else {
        format!("{} days", elapsed.num_days())
    }
}

/// Render a timestamp for list rows.
#[must_use]
pub fn format_timestamp(ts: Timestamp) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Serde helper accepting a timestamp string, epoch milliseconds, `null`,
/// or garbage (which becomes `None`).
pub mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::{Timestamp, parse_timestamp};

    /// Deserialize an optional timestamp without ever failing.
    ///
    /// # Errors
    ///
    /// Only propagates errors from the underlying deserializer.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(raw) => parse_timestamp(&raw),
            Value::Number(n) => n
                .as_i64()
                .and_then(chrono::DateTime::from_timestamp_millis),
            _ => None,
        })
    }
}
