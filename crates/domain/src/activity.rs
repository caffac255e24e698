//! Activity: one entry of the service's recent-activity feed.

use serde::{Deserialize, Serialize};

use crate::json::null_as_default;
use crate::time::{self, Timestamp};

/// Outcome category of an activity entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityKind {
    Success,
    Pending,
    Error,
    #[default]
    Other,
    Custom(String),
}

impl ActivityKind {
    /// Wire value, also used as CSS class.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Pending => "pending",
            Self::Error => "error",
            Self::Other => "",
            Self::Custom(raw) => raw,
        }
    }

    /// Icon shown next to the entry.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "\u{2705}",
            Self::Pending => "\u{23F3}",
            Self::Error => "\u{274C}",
            Self::Other | Self::Custom(_) => "\u{1F4DD}",
        }
    }
}

impl From<String> for ActivityKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "success" => Self::Success,
            "pending" => Self::Pending,
            "error" => Self::Error,
            "" => Self::Other,
            _ => Self::Custom(raw),
        }
    }
}

impl From<ActivityKind> for String {
    fn from(kind: ActivityKind) -> Self {
        kind.as_str().to_string()
    }
}

/// A read-only feed entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: ActivityKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "time::lenient::deserialize")]
    pub timestamp: Option<Timestamp>,
}

impl Activity {
    /// Relative age of the entry, or `"-"` when the timestamp is unreadable.
    #[must_use]
    pub fn age(&self, now: Timestamp) -> String {
        self.timestamp
            .map_or_else(|| "-".to_string(), |ts| time::time_ago(ts, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_map_kinds_to_icons() {
        assert_eq!(ActivityKind::Success.icon(), "\u{2705}");
        assert_eq!(ActivityKind::Pending.icon(), "\u{23F3}");
        assert_eq!(ActivityKind::Error.icon(), "\u{274C}");
        assert_eq!(ActivityKind::from("info".to_string()).icon(), "\u{1F4DD}");
    }

    #[test]
    fn should_deserialize_activity_and_render_age() {
        let activity: Activity = serde_json::from_value(json!({
            "type": "success",
            "title": "Backup Photos completed",
            "timestamp": "2024-05-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(activity.kind, ActivityKind::Success);
        let now = time::parse_timestamp("2024-05-01T13:30:00Z").unwrap();
        assert_eq!(activity.age(now), "3 hours");
    }

    #[test]
    fn should_tolerate_missing_fields() {
        let activity: Activity = serde_json::from_value(json!({})).unwrap();
        assert_eq!(activity.kind, ActivityKind::Other);
        assert_eq!(activity.age(time::now()), "-");
    }

    #[test]
    fn should_read_null_title_and_kind_as_blank() {
        let activity: Activity = serde_json::from_value(json!({
            "type": null,
            "title": null,
            "timestamp": null
        }))
        .unwrap();
        assert_eq!(activity.kind, ActivityKind::Other);
        assert_eq!(activity.title, "");
        assert_eq!(activity.age(time::now()), "-");
    }
}
