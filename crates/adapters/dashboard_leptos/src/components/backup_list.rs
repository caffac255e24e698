//! Backup list with per-row restore and delete actions.

use backup_console_domain::backup::{Backup, BackupId};
use leptos::prelude::*;

const EMPTY: &str = "No backups found. Create your first backup to get started!";

/// The backup list, or its empty state.
#[component]
pub fn BackupList(
    #[prop(into)] backups: Signal<Vec<Backup>>,
    /// Called with the id of the backup to restore.
    #[prop(into)]
    on_restore: Callback<BackupId>,
    /// Called with the id of the backup to delete.
    #[prop(into)]
    on_delete: Callback<BackupId>,
) -> impl IntoView {
    view! {
        <div class="backup-list">
            {move || {
                let backups = backups.get();
                if backups.is_empty() {
                    view! { <p class="empty-state">{EMPTY}</p> }.into_any()
                } else {
                    backups
                        .into_iter()
                        .map(|backup| view! { <BackupRow backup on_restore on_delete/> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn BackupRow(
    backup: Backup,
    #[prop(into)] on_restore: Callback<BackupId>,
    #[prop(into)] on_delete: Callback<BackupId>,
) -> impl IntoView {
    let details = format!(
        "Path: {} \u{2022} Type: {} \u{2022} Size: {} \u{2022} Created: {}",
        backup.path,
        backup.kind,
        backup.size_label(),
        backup.created_label(),
    );
    let badge = format!(
        "status-badge-small status-{}",
        backup.status.css_modifier()
    );
    let restore_id = backup.id.clone();
    let delete_id = backup.id;

    view! {
        <div class="backup-item">
            <div class="backup-info">
                <div class="backup-name">{backup.name}</div>
                <div class="backup-details">{details}</div>
            </div>
            <div class="backup-actions">
                <span class=badge>{backup.status.label()}</span>
                <button
                    class="btn btn-secondary btn-small"
                    on:click=move |_| on_restore.run(restore_id.clone())
                >
                    <span>"\u{1F4E5}"</span>
                    " Restore"
                </button>
                <button
                    class="btn btn-danger btn-small"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    <span>"\u{1F5D1}\u{FE0F}"</span>
                    " Delete"
                </button>
            </div>
        </div>
    }
}
