//! Backup: an archive of a path kept by the remote backup service.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::json::null_as_default;
use crate::time::{self, Timestamp};

/// Backup identifier. The service issues numbers today but strings are
/// accepted too; the id is only ever echoed back into URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BackupId {
    Number(i64),
    Text(String),
}

impl fmt::Display for BackupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => n.fmt(f),
            Self::Text(s) => s.fmt(f),
        }
    }
}

impl From<i64> for BackupId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

/// Lifecycle state reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BackupStatus {
    Completed,
    InProgress,
    Pending,
    Failed,
    #[default]
    Unknown,
    Other(String),
}

impl BackupStatus {
    /// The raw wire value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in_progress",
            Self::Pending => "pending",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
            Self::Other(raw) => raw,
        }
    }

    /// Human label: first `_` becomes a space (`in_progress` → `in progress`).
    #[must_use]
    pub fn label(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }

    /// CSS modifier: first `_` becomes a dash (`in_progress` → `in-progress`).
    #[must_use]
    pub fn css_modifier(&self) -> String {
        self.as_str().replacen('_', "-", 1)
    }
}

impl From<String> for BackupStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "completed" => Self::Completed,
            "in_progress" => Self::InProgress,
            "pending" => Self::Pending,
            "failed" => Self::Failed,
            "" | "unknown" => Self::Unknown,
            _ => Self::Other(raw),
        }
    }
}

impl From<BackupStatus> for String {
    fn from(status: BackupStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A backup as listed by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    pub id: BackupId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    /// Size with a unit suffix, e.g. `"2.3 GB"`.
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: BackupStatus,
    #[serde(default, deserialize_with = "time::lenient::deserialize")]
    pub created_at: Option<Timestamp>,
}

impl Backup {
    /// Size as displayed; missing sizes count as `"0 GB"`.
    #[must_use]
    pub fn size_label(&self) -> &str {
        self.size.as_deref().unwrap_or("0 GB")
    }

    /// Numeric component of [`Self::size_label`], see [`size_component`].
    #[must_use]
    pub fn size_value(&self) -> f64 {
        size_component(self.size_label())
    }

    /// Creation time formatted for the list, or `"-"` when unknown.
    #[must_use]
    pub fn created_label(&self) -> String {
        self.created_at
            .map_or_else(|| "-".to_string(), time::format_timestamp)
    }
}

/// Extract the numeric part of a size string.
///
/// Every character except digits and `.` is stripped, then the longest
/// prefix that parses as a decimal number is read. Anything unreadable is 0.
/// Units are ignored, so `"512 MB"` counts as 512.
#[must_use]
pub fn size_component(raw: &str) -> f64 {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    for (idx, c) in digits.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = idx + 1;
    }

    digits[..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Input of the create-backup form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BackupDraft {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub schedule: String,
    pub description: String,
}

impl BackupDraft {
    /// Trim free-text fields and check the required ones.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingBackupField`] naming the first
    /// blank field among name, path and type.
    pub fn normalized(self) -> Result<Self, ValidationError> {
        let draft = Self {
            name: self.name.trim().to_string(),
            path: self.path.trim().to_string(),
            kind: self.kind,
            schedule: self.schedule,
            description: self.description.trim().to_string(),
        };
        if draft.name.is_empty() {
            return Err(ValidationError::MissingBackupField { field: "name" });
        }
        if draft.path.is_empty() {
            return Err(ValidationError::MissingBackupField { field: "path" });
        }
        if draft.kind.is_empty() {
            return Err(ValidationError::MissingBackupField { field: "type" });
        }
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_deserialize_full_backup() {
        let backup: Backup = serde_json::from_value(json!({
            "id": 1,
            "name": "Photos",
            "path": "/home/alice/photos",
            "type": "full",
            "size": "2.3 GB",
            "status": "in_progress",
            "created_at": "2024-05-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(backup.id, BackupId::Number(1));
        assert_eq!(backup.kind, "full");
        assert_eq!(backup.status, BackupStatus::InProgress);
        assert_eq!(backup.status.label(), "in progress");
        assert_eq!(backup.status.css_modifier(), "in-progress");
        assert_eq!(backup.created_label(), "2024-05-01 10:00:00");
    }

    #[test]
    fn should_tolerate_sparse_backups() {
        let backup: Backup = serde_json::from_value(json!({"id": "b-7"})).unwrap();
        assert_eq!(backup.id.to_string(), "b-7");
        assert_eq!(backup.status, BackupStatus::Unknown);
        assert_eq!(backup.size_label(), "0 GB");
        assert!(backup.created_at.is_none());
        assert_eq!(backup.created_label(), "-");
    }

    #[test]
    fn should_read_null_fields_as_blank() {
        let backup: Backup = serde_json::from_value(json!({
            "id": 3,
            "name": null,
            "path": null,
            "type": null,
            "size": null,
            "status": null,
            "created_at": null
        }))
        .unwrap();
        assert_eq!(backup.name, "");
        assert_eq!(backup.path, "");
        assert_eq!(backup.kind, "");
        assert_eq!(backup.status, BackupStatus::Unknown);
        assert_eq!(backup.size_label(), "0 GB");
    }

    #[test]
    fn should_keep_unrecognized_status_verbatim() {
        let status = BackupStatus::from("queued_for_upload".to_string());
        assert_eq!(status.as_str(), "queued_for_upload");
        assert_eq!(status.label(), "queued for_upload");
    }

    #[test]
    fn should_parse_size_components() {
        assert!((size_component("2.5 GB") - 2.5).abs() < f64::EPSILON);
        assert!((size_component("512MB") - 512.0).abs() < f64::EPSILON);
        assert!((size_component("1.2.3 GB") - 1.2).abs() < f64::EPSILON);
        assert!((size_component("7. GB") - 7.0).abs() < f64::EPSILON);
        assert!((size_component(".5 TB") - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_treat_non_numeric_sizes_as_zero() {
        assert!(size_component("unknown").abs() < f64::EPSILON);
        assert!(size_component("").abs() < f64::EPSILON);
        assert!(size_component("...").abs() < f64::EPSILON);
    }

    #[test]
    fn should_serialize_draft_with_wire_field_names() {
        let draft = BackupDraft {
            name: "Docs".to_string(),
            path: "/docs".to_string(),
            kind: "incremental".to_string(),
            schedule: "daily".to_string(),
            description: String::new(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["type"], "incremental");
        assert_eq!(json["schedule"], "daily");
    }

    #[test]
    fn should_trim_and_require_draft_fields() {
        let draft = BackupDraft {
            name: "  Docs ".to_string(),
            path: " /docs ".to_string(),
            kind: "full".to_string(),
            ..BackupDraft::default()
        }
        .normalized()
        .unwrap();
        assert_eq!(draft.name, "Docs");
        assert_eq!(draft.path, "/docs");

        let missing_path = BackupDraft {
            name: "Docs".to_string(),
            path: "   ".to_string(),
            kind: "full".to_string(),
            ..BackupDraft::default()
        }
        .normalized();
        assert_eq!(
            missing_path,
            Err(ValidationError::MissingBackupField { field: "path" })
        );

        let missing_type = BackupDraft {
            name: "Docs".to_string(),
            path: "/docs".to_string(),
            ..BackupDraft::default()
        }
        .normalized();
        assert_eq!(
            missing_type,
            Err(ValidationError::MissingBackupField { field: "type" })
        );
    }
}
