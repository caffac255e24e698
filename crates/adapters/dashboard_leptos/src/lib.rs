//! # backup-console-dashboard
//!
//! Browser front end and composition root.
//!
//! ## Responsibilities
//! - Implement the application ports with browser APIs (`platform`)
//! - Load the embedded configuration and install the console logger
//! - Build the controllers and bind them to Leptos signals (`pages`)

use backup_console_app::config::ClientConfig;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

mod components;
pub mod config;
pub mod logging;
mod pages;
pub mod platform;

use components::ToastContainer;
use pages::{Dashboard, Login, NotFound};

/// Root application component.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let timeout_ms = config.timing.banner_timeout_ms;
    provide_context(config);

    view! {
        <ToastContainer timeout_ms>
            <Router>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=Login/>
                        <Route path=path!("dashboard") view=Dashboard/>
                    </Routes>
                </main>
            </Router>
        </ToastContainer>
    }
}

/// The configuration provided by [`App`].
pub(crate) fn use_config() -> ClientConfig {
    use_context::<ClientConfig>().expect("ClientConfig not found in context")
}
