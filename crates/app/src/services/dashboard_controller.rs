//! Dashboard: backups, recent activity, stats and the actions on them.

use std::cell::RefCell;

use backup_console_domain::activity::Activity;
use backup_console_domain::backup::{Backup, BackupDraft, BackupId};
use backup_console_domain::stats;
use backup_console_domain::time;
use backup_console_domain::user::avatar_initial;
use futures_util::future::join;

use crate::api_client::ApiClient;
use crate::config::TimingConfig;
use crate::ports::{
    Banner, BusyAction, DashboardView, HttpTransport, PageHost, Route, SessionStore,
};

pub const USER_STATUS: &str = "Active";
pub const LOAD_BACKUPS_FAILED: &str =
    "Failed to load backups. Please check your connection and try again.";
pub const BACKUP_CREATED: &str = "Backup created successfully!";
pub const RESTORE_PROMPT: &str =
    "Are you sure you want to restore this backup? This action cannot be undone.";
pub const RESTORE_STARTED: &str = "Backup restore initiated successfully!";
pub const DELETE_PROMPT: &str =
    "Are you sure you want to delete this backup? This action cannot be undone.";
pub const BACKUP_DELETED: &str = "Backup deleted successfully!";
pub const LOGOUT_PROMPT: &str = "Are you sure you want to logout?";
pub const BACKUPS_REFRESHED: &str = "Backups refreshed successfully!";

#[derive(Debug, Default)]
struct Cache {
    backups: Vec<Backup>,
    activities: Vec<Activity>,
    backups_visible: bool,
}

/// Drives the dashboard page.
///
/// The backup and activity caches always hold the last successful fetch in
/// full; nothing is merged.
pub struct DashboardController<T, S, P, V> {
    client: ApiClient<T, S, P>,
    view: V,
    timing: TimingConfig,
    cache: RefCell<Cache>,
}

impl<T, S, P, V> DashboardController<T, S, P, V>
where
    T: HttpTransport,
    S: SessionStore,
    P: PageHost,
    V: DashboardView,
{
    pub fn new(client: ApiClient<T, S, P>, view: V, timing: TimingConfig) -> Self {
        Self {
            client,
            view,
            timing,
            cache: RefCell::new(Cache {
                backups_visible: true,
                ..Cache::default()
            }),
        }
    }

    /// Cached backups, as last fetched.
    pub fn backups(&self) -> Vec<Backup> {
        self.cache.borrow().backups.clone()
    }

    /// Cached activity feed, as last fetched.
    pub fn activities(&self) -> Vec<Activity> {
        self.cache.borrow().activities.clone()
    }

    /// Enter the page: greet the user and load both lists side by side.
    ///
    /// Returns `false` (after redirecting to login) when there is no session.
    pub async fn bootstrap(&self) -> bool {
        let Some(session) = self.client.sessions().load() else {
            tracing::info!("no session, redirecting to login");
            self.client.page().navigate(Route::Login);
            return false;
        };

        let name = session.display_name();
        self.view.show_user(name, &avatar_initial(name), USER_STATUS);

        join(self.load_backups(), self.load_recent_activity()).await;
        self.update_stats();
        true
    }

    /// Reload the backup list. Returns whether the fetch succeeded.
    pub async fn load_backups(&self) -> bool {
        let loaded = match self.client.list_backups().await {
            Ok(backups) => {
                tracing::debug!(count = backups.len(), "backups loaded");
                self.cache.borrow_mut().backups = backups;
                true
            }
            Err(err) if err.is_unauthorized() => return false,
            Err(err) => {
                tracing::error!(error = %err, "failed to load backups");
                self.cache.borrow_mut().backups.clear();
                self.view.show_banner(Banner::error(LOAD_BACKUPS_FAILED));
                false
            }
        };
        self.view.show_backups(&self.backups());
        self.update_stats();
        loaded
    }

    /// Reload the activity feed. Failures degrade to an empty feed.
    pub async fn load_recent_activity(&self) -> bool {
        let loaded = match self.client.list_activities().await {
            Ok(activities) => {
                self.cache.borrow_mut().activities = activities;
                true
            }
            Err(err) if err.is_unauthorized() => return false,
            Err(err) => {
                tracing::error!(error = %err, "failed to load recent activity");
                self.cache.borrow_mut().activities.clear();
                false
            }
        };
        self.view.show_activities(&self.activities());
        loaded
    }

    /// Recompute the stat cards from the cached backups.
    pub fn update_stats(&self) {
        let stats = stats::compute(&self.cache.borrow().backups, time::now());
        self.view.show_stats(&stats);
    }

    /// Submit the create-backup form.
    pub async fn create_backup(&self, draft: BackupDraft) {
        self.view.clear_form_messages();

        let draft = match draft.normalized() {
            Ok(draft) => draft,
            Err(err) => {
                self.view.show_form_message(Banner::error(err.to_string()));
                return;
            }
        };

        self.view.set_busy(BusyAction::CreateBackup, true);
        let result = self.client.create_backup(&draft).await;
        self.view.set_busy(BusyAction::CreateBackup, false);

        match result {
            Ok(_) => {
                tracing::info!(name = %draft.name, "backup created");
                self.view.show_form_message(Banner::success(BACKUP_CREATED));
                self.client
                    .page()
                    .sleep(self.timing.create_close_delay())
                    .await;
                self.dismiss_create_form();
                self.load_backups().await;
            }
            Err(err) if err.is_unauthorized() => {}
            Err(err) => {
                self.view.show_form_message(Banner::error(format!(
                    "Failed to create backup: {err}"
                )));
            }
        }
    }

    /// Ask for confirmation, then start restoring `id`.
    pub async fn restore_backup(&self, id: &BackupId) {
        if !self.client.page().confirm(RESTORE_PROMPT) {
            return;
        }
        match self.client.restore_backup(id).await {
            Ok(()) => {
                tracing::info!(%id, "restore started");
                self.view.show_banner(Banner::success(RESTORE_STARTED));
                self.load_recent_activity().await;
            }
            Err(err) if err.is_unauthorized() => {}
            Err(err) => {
                self.view
                    .show_banner(Banner::error(format!("Failed to restore backup: {err}")));
            }
        }
    }

    /// Ask for confirmation, then delete `id`.
    pub async fn delete_backup(&self, id: &BackupId) {
        if !self.client.page().confirm(DELETE_PROMPT) {
            return;
        }
        match self.client.delete_backup(id).await {
            Ok(()) => {
                tracing::info!(%id, "backup deleted");
                self.view.show_banner(Banner::success(BACKUP_DELETED));
                join(self.load_backups(), self.load_recent_activity()).await;
            }
            Err(err) if err.is_unauthorized() => {}
            Err(err) => {
                self.view
                    .show_banner(Banner::error(format!("Failed to delete backup: {err}")));
            }
        }
    }

    /// Ask for confirmation, then forget the session and leave.
    pub fn logout(&self) -> bool {
        if !self.client.page().confirm(LOGOUT_PROMPT) {
            return false;
        }
        self.client.sessions().clear();
        self.client.page().navigate(Route::Login);
        true
    }

    /// One periodic refresh: activity and stats, only while the page is
    /// visible. Returns whether anything was reloaded.
    pub async fn refresh_tick(&self) -> bool {
        if !self.client.page().is_visible() {
            return false;
        }
        self.load_recent_activity().await;
        self.update_stats();
        true
    }

    /// Run [`Self::refresh_tick`] every refresh interval until the session
    /// goes away.
    pub async fn run_periodic_refresh(&self) {
        let interval = self.timing.refresh_interval();
        loop {
            self.client.page().sleep(interval).await;
            if !self.client.sessions().is_authenticated() {
                tracing::debug!("session gone, stopping refresh");
                return;
            }
            self.refresh_tick().await;
        }
    }

    /// Manual reload of the backup list.
    pub async fn refresh_backups(&self) {
        self.view.set_busy(BusyAction::RefreshBackups, true);
        let loaded = self.load_backups().await;
        self.view.set_busy(BusyAction::RefreshBackups, false);
        if loaded {
            self.view.show_banner(Banner::success(BACKUPS_REFRESHED));
        }
    }

    /// Show or hide the backup list. Showing it reloads the list.
    pub async fn toggle_backups_list(&self) {
        let visible = {
            let mut cache = self.cache.borrow_mut();
            cache.backups_visible = !cache.backups_visible;
            cache.backups_visible
        };
        self.view.set_backups_visible(visible);
        if visible {
            self.load_backups().await;
        }
    }

    /// Close the create-backup form and drop its messages.
    pub fn dismiss_create_form(&self) {
        self.view.close_create_form();
        self.view.clear_form_messages();
    }
}
