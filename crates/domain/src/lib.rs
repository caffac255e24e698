//! # backup-console-domain
//!
//! Pure domain model for the backup-console front end.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps, relative-time formatting
//! - Define **Backups** (what the remote service stores) and **Activity** (its feed)
//! - Define **User profiles** and the **Session** issued after OTP verification
//! - Validate **Credentials** and **OTP codes** before anything reaches the network
//! - Derive the **dashboard stats** from a backup list
//! - Normalize the list **envelopes** the backup API answers with
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod json;
pub mod time;

pub mod activity;
pub mod backup;
pub mod credentials;
pub mod envelope;
pub mod session;
pub mod stats;
pub mod user;
