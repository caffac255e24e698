//! Dashboard stats: derived from the cached backup list, never fetched.

use crate::backup::Backup;
use crate::time::{self, Timestamp};

/// Shown as the last-backup age when there are no backups.
pub const NEVER: &str = "Never";

/// Shown when backups exist but none has a readable `created_at`.
pub const UNKNOWN_AGE: &str = "Unknown";

/// Values of the three stat cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_backups: usize,
    /// Sum of the size components, one decimal (`"3.5"`).
    pub storage_used: String,
    /// Relative age of the newest backup, `"Never"` without backups.
    pub last_backup: String,
}

impl Default for DashboardStats {
    fn default() -> Self {
        compute(&[], time::now())
    }
}

/// Compute the stats for `backups` as seen at `now`.
///
/// The input order is left untouched; the newest backup is found by scan.
#[must_use]
pub fn compute(backups: &[Backup], now: Timestamp) -> DashboardStats {
    let storage: f64 = backups.iter().map(Backup::size_value).sum();

    let last_backup = if backups.is_empty() {
        NEVER.to_string()
    } else {
        most_recent(backups)
            .and_then(|backup| backup.created_at)
            .map_or_else(|| UNKNOWN_AGE.to_string(), |newest| time::time_ago(newest, now))
    };

    DashboardStats {
        total_backups: backups.len(),
        storage_used: format!("{storage:.1}"),
        last_backup,
    }
}

/// The newest backup by `created_at`, if any has one.
#[must_use]
pub fn most_recent(backups: &[Backup]) -> Option<&Backup> {
    backups
        .iter()
        .filter(|backup| backup.created_at.is_some())
        .max_by_key(|backup| backup.created_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::BackupId;
    use crate::time::parse_timestamp;

    fn backup(id: i64, size: Option<&str>, created_at: Option<&str>) -> Backup {
        Backup {
            id: BackupId::Number(id),
            name: format!("backup-{id}"),
            path: "/data".to_string(),
            kind: "full".to_string(),
            size: size.map(str::to_string),
            status: crate::backup::BackupStatus::Completed,
            created_at: created_at.and_then(parse_timestamp),
        }
    }

    #[test]
    fn should_sum_sizes_and_age_newest_backup() {
        let backups = vec![
            backup(1, Some("2.5 GB"), Some("2024-05-01T08:00:00Z")),
            backup(2, Some("1.0 GB"), Some("2024-05-01T09:00:00Z")),
        ];
        let now = parse_timestamp("2024-05-01T11:30:00Z").unwrap();

        let stats = compute(&backups, now);

        assert_eq!(stats.total_backups, 2);
        assert_eq!(stats.storage_used, "3.5");
        assert_eq!(stats.last_backup, "2 hours");
    }

    #[test]
    fn should_report_never_without_backups() {
        let stats = compute(&[], time::now());
        assert_eq!(stats.total_backups, 0);
        assert_eq!(stats.storage_used, "0.0");
        assert_eq!(stats.last_backup, "Never");
        assert_eq!(DashboardStats::default(), stats);
    }

    #[test]
    fn should_count_missing_and_garbage_sizes_as_zero() {
        let backups = vec![
            backup(1, None, None),
            backup(2, Some("n/a"), None),
            backup(3, Some("0.3 GB"), None),
        ];
        let stats = compute(&backups, time::now());
        assert_eq!(stats.storage_used, "0.3");
        assert_eq!(stats.last_backup, UNKNOWN_AGE);
    }

    #[test]
    fn should_not_reorder_input() {
        let backups = vec![
            backup(1, None, Some("2024-05-01T08:00:00Z")),
            backup(2, None, Some("2024-05-03T08:00:00Z")),
            backup(3, None, Some("2024-05-02T08:00:00Z")),
        ];
        let before = backups.clone();
        let _ = compute(&backups, time::now());
        assert_eq!(backups, before);
        assert_eq!(most_recent(&backups).map(|b| b.id.clone()), Some(BackupId::Number(2)));
    }
}
