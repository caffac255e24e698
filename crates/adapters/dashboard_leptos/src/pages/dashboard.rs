//! Dashboard page: stats, backups, recent activity and the actions on them.

use std::rc::Rc;

use backup_console_app::ports::{Banner, BusyAction, DashboardView};
use backup_console_app::services::DashboardController;
use backup_console_domain::activity::Activity;
use backup_console_domain::backup::{Backup, BackupDraft, BackupId};
use backup_console_domain::stats::DashboardStats;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    ActivityList, BackupList, BusyButton, CreateBackupModal, StatCard, ToastProvider, use_toasts,
};
use crate::platform::{self, BrowserPage, BrowserSessionStorage, FetchTransport};

type Controller =
    DashboardController<FetchTransport, BrowserSessionStorage, BrowserPage, DashboardSignals>;

/// [`DashboardView`] backed by signals. Page banners go to the toasts.
#[derive(Clone)]
struct DashboardSignals {
    user_name: RwSignal<String>,
    avatar: RwSignal<String>,
    status: RwSignal<String>,
    backups: RwSignal<Vec<Backup>>,
    activities: RwSignal<Vec<Activity>>,
    stats: RwSignal<DashboardStats>,
    form_open: RwSignal<bool>,
    form_message: RwSignal<Option<Banner>>,
    backups_visible: RwSignal<bool>,
    refreshing: RwSignal<bool>,
    creating: RwSignal<bool>,
    toasts: ToastProvider,
}

impl DashboardSignals {
    fn new(toasts: ToastProvider) -> Self {
        Self {
            user_name: RwSignal::new(String::new()),
            avatar: RwSignal::new(String::new()),
            status: RwSignal::new(String::new()),
            backups: RwSignal::new(Vec::new()),
            activities: RwSignal::new(Vec::new()),
            stats: RwSignal::new(DashboardStats::default()),
            form_open: RwSignal::new(false),
            form_message: RwSignal::new(None),
            backups_visible: RwSignal::new(true),
            refreshing: RwSignal::new(false),
            creating: RwSignal::new(false),
            toasts,
        }
    }
}

impl DashboardView for DashboardSignals {
    fn show_user(&self, display_name: &str, avatar: &str, status: &str) {
        self.user_name.set(display_name.to_string());
        self.avatar.set(avatar.to_string());
        self.status.set(status.to_string());
    }

    fn show_backups(&self, backups: &[Backup]) {
        self.backups.set(backups.to_vec());
    }

    fn show_activities(&self, activities: &[Activity]) {
        self.activities.set(activities.to_vec());
    }

    fn show_stats(&self, stats: &DashboardStats) {
        self.stats.set(stats.clone());
    }

    fn show_banner(&self, banner: Banner) {
        self.toasts.push(banner);
    }

    fn show_form_message(&self, banner: Banner) {
        self.form_message.set(Some(banner));
    }

    fn clear_form_messages(&self) {
        self.form_message.set(None);
    }

    fn close_create_form(&self) {
        self.form_open.set(false);
    }

    fn set_backups_visible(&self, visible: bool) {
        self.backups_visible.set(visible);
    }

    fn set_busy(&self, action: BusyAction, busy: bool) {
        match action {
            BusyAction::RefreshBackups => self.refreshing.set(busy),
            BusyAction::CreateBackup => self.creating.set(busy),
        }
    }
}

/// Dashboard page component.
#[component]
pub fn Dashboard() -> impl IntoView {
    let config = crate::use_config();
    let signals = DashboardSignals::new(use_toasts());
    let DashboardSignals {
        user_name,
        avatar,
        status,
        backups,
        activities,
        stats,
        form_open,
        form_message,
        backups_visible,
        refreshing,
        creating,
        ..
    } = signals.clone();

    let controller: StoredValue<Rc<Controller>, LocalStorage> = StoredValue::new_local(Rc::new(
        DashboardController::new(platform::api_client(&config), signals, config.timing.clone()),
    ));

    let bootstrap = controller.with_value(Rc::clone);
    spawn_local(async move {
        if bootstrap.bootstrap().await {
            bootstrap.run_periodic_refresh().await;
        }
    });

    let on_restore = Callback::new(move |id: BackupId| {
        let controller = controller.with_value(Rc::clone);
        spawn_local(async move { controller.restore_backup(&id).await });
    });
    let on_delete = Callback::new(move |id: BackupId| {
        let controller = controller.with_value(Rc::clone);
        spawn_local(async move { controller.delete_backup(&id).await });
    });
    let on_create = Callback::new(move |draft: BackupDraft| {
        let controller = controller.with_value(Rc::clone);
        spawn_local(async move { controller.create_backup(draft).await });
    });
    let on_close = Callback::new(move |()| {
        controller.with_value(|c| c.dismiss_create_form());
    });
    let on_refresh = Callback::new(move |()| {
        let controller = controller.with_value(Rc::clone);
        spawn_local(async move { controller.refresh_backups().await });
    });
    let on_toggle = move |_| {
        let controller = controller.with_value(Rc::clone);
        spawn_local(async move { controller.toggle_backups_list().await });
    };
    let on_logout = move |_| {
        controller.with_value(|c| {
            c.logout();
        });
    };
    let on_new_backup = move |_| {
        form_message.set(None);
        form_open.set(true);
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Backup Console"</h1>
                <div class="user-info">
                    <span class="user-avatar">{avatar}</span>
                    <span class="user-name">{user_name}</span>
                    <span class="status-badge">{status}</span>
                    <button class="btn btn-secondary" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </header>

            <section class="stats-grid">
                <StatCard
                    label="Total Backups"
                    value=Signal::derive(move || stats.with(|s| s.total_backups.to_string()))
                />
                <StatCard
                    label="Storage Used"
                    value=Signal::derive(move || stats.with(|s| s.storage_used.clone()))
                    unit="GB"
                />
                <StatCard
                    label="Last Backup"
                    value=Signal::derive(move || stats.with(|s| s.last_backup.clone()))
                />
            </section>

            <section class="actions">
                <button class="btn btn-primary" on:click=on_new_backup>
                    "New Backup"
                </button>
                <button class="btn btn-secondary" on:click=on_toggle>
                    {move || if backups_visible.get() { "Hide Backups" } else { "View Backups" }}
                </button>
                <BusyButton
                    label="Refresh"
                    busy_label="Loading..."
                    busy=refreshing
                    class="btn btn-secondary"
                    kind="button"
                    on_click=on_refresh
                />
            </section>

            <Show when=move || backups_visible.get()>
                <section class="backups">
                    <h2>"Backups"</h2>
                    <BackupList backups on_restore on_delete/>
                </section>
            </Show>

            <section class="activity">
                <h2>"Recent Activity"</h2>
                <ActivityList activities/>
            </section>

            <CreateBackupModal
                open=form_open
                message=form_message
                creating
                on_submit=on_create
                on_close
            />
        </div>
    }
}
