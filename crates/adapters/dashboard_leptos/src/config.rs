//! Configuration embedded in the bundle, with build-time overrides.

use backup_console_app::config::{API_URL_VAR, AUTH_URL_VAR, ClientConfig, LOG_VAR};

const EMBEDDED: &str = include_str!("../console.toml");

/// Override values captured when the bundle was compiled.
fn build_time_var(name: &str) -> Option<String> {
    let value = match name {
        AUTH_URL_VAR => option_env!("BACKUP_CONSOLE_AUTH_URL"),
        API_URL_VAR => option_env!("BACKUP_CONSOLE_API_URL"),
        LOG_VAR => option_env!("BACKUP_CONSOLE_LOG"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Load the embedded configuration. An invalid document is reported on the
/// console and replaced by the defaults.
#[must_use]
pub fn load() -> ClientConfig {
    match ClientConfig::load(EMBEDDED, build_time_var) {
        Ok(config) => config,
        Err(err) => {
            leptos::logging::error!("invalid console configuration, using defaults: {err}");
            ClientConfig::default()
        }
    }
}
