//! Application services: the page controllers.
//!
//! Each controller accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from the browser.
//! Controller state lives in `RefCell`s that are never held across an
//! `.await`, so a controller can be shared behind an `Rc` by the UI.

pub mod auth_controller;
pub mod dashboard_controller;

pub use auth_controller::{AuthController, AuthStep};
pub use dashboard_controller::DashboardController;

use backup_console_domain::error::ConsoleError;

/// Text for a failed call: the error's own message, or `fallback` when the
/// server's answer could not be read at all.
fn failure_message(err: &ConsoleError, fallback: &str) -> String {
    match err {
        ConsoleError::Decode(_) => fallback.to_string(),
        other => other.to_string(),
    }
}
