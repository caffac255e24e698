//! View ports: what the controllers ask the UI to display.
//!
//! The controllers never touch the DOM. They push state into these traits
//! and the UI adapter decides how it looks.

use backup_console_domain::activity::Activity;
use backup_console_domain::backup::Backup;
use backup_console_domain::credentials::Field;
use backup_console_domain::stats::DashboardStats;

/// Success or error flavour of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerKind {
    Success,
    Error,
}

/// A user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }
}

/// Visible step of the login wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginStep {
    Credentials,
    Otp,
}

/// Login page output.
pub trait LoginView {
    /// Switch the visible wizard step.
    fn show_step(&self, step: LoginStep);

    /// Show an error message and flag `fields` as invalid.
    fn show_error(&self, message: &str, fields: &[Field]);

    /// Show a success message (hides any error).
    fn show_success(&self, message: &str);

    /// Hide messages and clear field error flags.
    fn clear_messages(&self);

    /// Toggle the loading indicator of the active step's button.
    fn set_loading(&self, loading: bool);
}

/// Buttons that show a busy state while their request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusyAction {
    RefreshBackups,
    CreateBackup,
}

/// Dashboard page output.
pub trait DashboardView {
    /// Show the signed-in user's name, avatar initial and status badge.
    fn show_user(&self, display_name: &str, avatar: &str, status: &str);

    /// Replace the rendered backup list.
    fn show_backups(&self, backups: &[Backup]);

    /// Replace the rendered activity feed.
    fn show_activities(&self, activities: &[Activity]);

    /// Replace the stat cards.
    fn show_stats(&self, stats: &DashboardStats);

    /// Show a page-level banner. The UI auto-dismisses it.
    fn show_banner(&self, banner: Banner);

    /// Show a message inside the create-backup form. It stays until the
    /// form is closed or resubmitted.
    fn show_form_message(&self, banner: Banner);

    /// Hide the create-backup form's messages.
    fn clear_form_messages(&self);

    /// Close and reset the create-backup form.
    fn close_create_form(&self);

    /// Show or hide the backup list panel.
    fn set_backups_visible(&self, visible: bool);

    /// Toggle a button's busy state.
    fn set_busy(&self, action: BusyAction, busy: bool);
}
