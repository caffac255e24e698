//! Configuration: TOML document with variable overrides.
//!
//! Every field has a sensible default so the document may be empty.
//! Overrides are looked up by name through a caller-supplied function,
//! which lets the browser build use compile-time variables and tests use a
//! plain map.

use std::time::Duration;

use serde::Deserialize;

/// Override holding the auth API base URL.
pub const AUTH_URL_VAR: &str = "BACKUP_CONSOLE_AUTH_URL";
/// Override holding the backup API base URL.
pub const API_URL_VAR: &str = "BACKUP_CONSOLE_API_URL";
/// Override holding the log filter.
pub const LOG_VAR: &str = "BACKUP_CONSOLE_LOG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Endpoint locations.
    pub api: ApiConfig,
    /// Wire details of the login handshake.
    pub auth: AuthConfig,
    /// Page paths.
    pub routes: RoutesConfig,
    /// Delays and intervals.
    pub timing: TimingConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Base URLs and paths of the remote API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the login and OTP endpoints.
    pub auth_base_url: String,
    /// Base URL of the backup service.
    pub backup_base_url: String,
    pub login_path: String,
    pub verify_otp_path: String,
    /// Path of the backup list, relative to `backup_base_url`.
    pub backups_path: String,
    pub activity_path: String,
    pub create_backup_path: String,
    /// `{id}` is replaced with the backup id.
    pub restore_backup_path: String,
    /// `{id}` is replaced with the backup id.
    pub delete_backup_path: String,
}

/// How the OTP is encoded in the verification body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpWireFormat {
    /// JSON number; leading zeros are lost.
    #[default]
    Number,
    /// JSON string of the digits as typed.
    String,
}

/// Wire details of the login handshake.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Body field carrying the email in the login request.
    pub login_identifier_field: String,
    pub otp_wire_format: OtpWireFormat,
}

/// Paths of the two pages.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    pub login: String,
    pub dashboard: String,
}

/// Delays and intervals, in milliseconds unless noted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// How long page banners stay visible.
    pub banner_timeout_ms: u64,
    /// Pause between login success and showing the OTP step.
    pub step_transition_delay_ms: u64,
    /// Pause between OTP success and leaving for the dashboard.
    pub redirect_delay_ms: u64,
    /// Pause between create success and closing the form.
    pub create_close_delay_ms: u64,
    /// Period of the activity refresh, in seconds.
    pub refresh_interval_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl ClientConfig {
    /// Parse `document`, apply overrides, validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or the result fails
    /// validation.
    pub fn load(
        document: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(document)?;
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup(AUTH_URL_VAR) {
            self.api.auth_base_url = val;
        }
        if let Some(val) = lookup(API_URL_VAR) {
            self.api.backup_base_url = val;
        }
        if let Some(val) = lookup(LOG_VAR) {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.auth_base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api.auth_base_url must not be empty".to_string(),
            ));
        }
        if self.api.backup_base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api.backup_base_url must not be empty".to_string(),
            ));
        }
        if self.auth.login_identifier_field.is_empty() {
            return Err(ConfigError::Validation(
                "auth.login_identifier_field must not be empty".to_string(),
            ));
        }
        if self.timing.refresh_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "timing.refresh_interval_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl ApiConfig {
    #[must_use]
    pub fn login_url(&self) -> String {
        join_url(&self.auth_base_url, &self.login_path)
    }

    #[must_use]
    pub fn verify_otp_url(&self) -> String {
        join_url(&self.auth_base_url, &self.verify_otp_path)
    }

    #[must_use]
    pub fn backups_url(&self) -> String {
        join_url(&self.backup_base_url, &self.backups_path)
    }

    #[must_use]
    pub fn activity_url(&self) -> String {
        join_url(&self.backup_base_url, &self.activity_path)
    }

    #[must_use]
    pub fn create_backup_url(&self) -> String {
        join_url(&self.backup_base_url, &self.create_backup_path)
    }

    #[must_use]
    pub fn restore_backup_url(&self, id: &str) -> String {
        join_url(
            &self.backup_base_url,
            &self.restore_backup_path.replace("{id}", id),
        )
    }

    #[must_use]
    pub fn delete_backup_url(&self, id: &str) -> String {
        join_url(
            &self.backup_base_url,
            &self.delete_backup_path.replace("{id}", id),
        )
    }
}

impl TimingConfig {
    #[must_use]
    pub fn banner_timeout(&self) -> Duration {
        Duration::from_millis(self.banner_timeout_ms)
    }

    #[must_use]
    pub fn step_transition_delay(&self) -> Duration {
        Duration::from_millis(self.step_transition_delay_ms)
    }

    #[must_use]
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    #[must_use]
    pub fn create_close_delay(&self) -> Duration {
        Duration::from_millis(self.create_close_delay_ms)
    }

    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

/// Join a base URL and a relative path with exactly one `/` between them.
///
/// An empty path yields the base with a trailing `/`.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let path = path.trim().trim_start_matches('/');
    format!("{base}/{path}")
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            auth_base_url: "https://api.example.com".to_string(),
            backup_base_url: "https://api.example.com/core/api".to_string(),
            login_path: "login".to_string(),
            verify_otp_path: "verify-otp".to_string(),
            backups_path: String::new(),
            activity_path: "activity/".to_string(),
            create_backup_path: "backups/create/".to_string(),
            restore_backup_path: "backups/{id}/restore/".to_string(),
            delete_backup_path: "backups/{id}/".to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_identifier_field: "phone".to_string(),
            otp_wire_format: OtpWireFormat::Number,
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login: "/".to_string(),
            dashboard: "/dashboard".to_string(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            banner_timeout_ms: 5000,
            step_transition_delay_ms: 1500,
            redirect_delay_ms: 1500,
            create_close_delay_ms: 2000,
            refresh_interval_secs: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "backup_console=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config document")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_overrides(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.auth.login_identifier_field, "phone");
        assert_eq!(config.auth.otp_wire_format, OtpWireFormat::Number);
        assert_eq!(config.routes.login, "/");
        assert_eq!(config.routes.dashboard, "/dashboard");
        assert_eq!(config.timing.banner_timeout(), Duration::from_secs(5));
        assert_eq!(config.timing.refresh_interval(), Duration::from_secs(30));
        assert_eq!(config.timing.create_close_delay(), Duration::from_secs(2));
    }

    #[test]
    fn should_load_empty_document() {
        let config = ClientConfig::load("", no_overrides).unwrap();
        assert_eq!(config.timing.redirect_delay_ms, 1500);
    }

    #[test]
    fn should_parse_full_document() {
        let toml = "
            [api]
            auth_base_url = 'https://auth.local'
            backup_base_url = 'https://backups.local/api/'

            [auth]
            login_identifier_field = 'email'
            otp_wire_format = 'string'

            [routes]
            login = '/login'

            [timing]
            refresh_interval_secs = 10

            [logging]
            filter = 'debug'
        ";
        let config = ClientConfig::load(toml, no_overrides).unwrap();
        assert_eq!(config.api.login_url(), "https://auth.local/login");
        assert_eq!(config.api.activity_url(), "https://backups.local/api/activity/");
        assert_eq!(config.auth.login_identifier_field, "email");
        assert_eq!(config.auth.otp_wire_format, OtpWireFormat::String);
        assert_eq!(config.routes.login, "/login");
        assert_eq!(config.routes.dashboard, "/dashboard");
        assert_eq!(config.timing.refresh_interval_secs, 10);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_apply_overrides() {
        let vars = HashMap::from([
            (API_URL_VAR, "https://override.local/core/api/"),
            (LOG_VAR, "trace"),
        ]);
        let config = ClientConfig::load("", |key| vars.get(key).map(ToString::to_string)).unwrap();
        assert_eq!(config.api.backups_url(), "https://override.local/core/api/");
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_reject_zero_refresh_interval() {
        let result = ClientConfig::load("[timing]\nrefresh_interval_secs = 0", no_overrides);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_blank_base_url() {
        let result = ClientConfig::load("[api]\nbackup_base_url = '  '", no_overrides);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result = ClientConfig::load("invalid {{{", no_overrides);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn should_build_endpoint_urls() {
        let api = ApiConfig::default();
        assert_eq!(api.backups_url(), "https://api.example.com/core/api/");
        assert_eq!(
            api.create_backup_url(),
            "https://api.example.com/core/api/backups/create/"
        );
        assert_eq!(
            api.restore_backup_url("42"),
            "https://api.example.com/core/api/backups/42/restore/"
        );
        assert_eq!(
            api.delete_backup_url("42"),
            "https://api.example.com/core/api/backups/42/"
        );
        assert_eq!(api.verify_otp_url(), "https://api.example.com/verify-otp");
    }

    #[test]
    fn should_join_with_single_slash() {
        assert_eq!(join_url("http://a/", "/b"), "http://a/b");
        assert_eq!(join_url("http://a", "b/"), "http://a/b/");
        assert_eq!(join_url("http://a/", ""), "http://a/");
    }
}
