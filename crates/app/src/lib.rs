//! # backup-console-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `HttpTransport`: send one JSON request
//!   - `SessionStore`: per-tab key/value storage
//!   - `PageHost`: navigation, confirmation prompts, visibility, timers
//!   - `LoginView` / `DashboardView`: what the pages display
//! - Provide the typed **API client** and the **session manager**
//! - Provide the **controllers** that drive the login wizard and the dashboard
//! - Load and validate the client configuration
//!
//! ## Dependency rule
//! Depends on `backup-console-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod api_client;
pub mod config;
pub mod memory_store;
pub mod ports;
pub mod services;
pub mod session;

#[cfg(test)]
mod testing;
