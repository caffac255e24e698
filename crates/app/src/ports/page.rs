//! Page host port: navigation, confirmation prompts, visibility and timers.

use std::future::Future;
use std::time::Duration;

/// The two pages of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
}

/// The page the controllers run in.
pub trait PageHost {
    /// Leave the current page for `route`.
    fn navigate(&self, route: Route);

    /// Ask the user a yes/no question; `true` means confirmed.
    fn confirm(&self, prompt: &str) -> bool;

    /// Whether the page is currently visible to the user.
    fn is_visible(&self) -> bool;

    /// Resolve after `duration` without blocking the page.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
