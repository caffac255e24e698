//! Typed client for the backup API.
//!
//! Two request paths exist:
//! - **public** calls (login, OTP verification) carry no token; an error
//!   message is read from `message` or `error`, else `"Request failed"`.
//! - **authenticated** calls attach the stored bearer token. A 401 clears
//!   the session and navigates to the login page before the caller sees
//!   [`ConsoleError::Unauthorized`]; other errors read `message`, else
//!   `"HTTP error! status: N"`.

use backup_console_domain::activity::Activity;
use backup_console_domain::backup::{Backup, BackupDraft, BackupId};
use backup_console_domain::credentials::{Credentials, OtpCode};
use backup_console_domain::envelope::{self, EnvelopeSource, Unwrapped};
use backup_console_domain::error::ConsoleError;
use backup_console_domain::json::{field_is_truthy, first_string};
use backup_console_domain::session::{AuthGrant, Session};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use crate::config::{ApiConfig, AuthConfig, OtpWireFormat};
use crate::ports::{ApiRequest, HttpTransport, Method, PageHost, Route, SessionStore};
use crate::session::SessionManager;

const HTTP_UNAUTHORIZED: u16 = 401;

/// Backup API client bound to a transport, a session and a page.
pub struct ApiClient<T, S, P> {
    transport: T,
    sessions: SessionManager<S>,
    page: P,
    endpoints: ApiConfig,
    auth: AuthConfig,
}

impl<T, S, P> ApiClient<T, S, P>
where
    T: HttpTransport,
    S: SessionStore,
    P: PageHost,
{
    pub fn new(
        transport: T,
        sessions: SessionManager<S>,
        page: P,
        endpoints: ApiConfig,
        auth: AuthConfig,
    ) -> Self {
        Self {
            transport,
            sessions,
            page,
            endpoints,
            auth,
        }
    }

    /// The session this client authenticates with.
    pub fn sessions(&self) -> &SessionManager<S> {
        &self.sessions
    }

    /// The page this client redirects on 401.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Submit credentials. Success only means the OTP was sent.
    ///
    /// # Errors
    ///
    /// Transport failures and non-2xx answers.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ConsoleError> {
        let mut body = Map::new();
        body.insert(
            self.auth.login_identifier_field.clone(),
            Value::String(credentials.email.clone()),
        );
        body.insert(
            "password".to_string(),
            Value::String(credentials.password.clone()),
        );
        self.send_public(self.endpoints.login_url(), Value::Object(body))
            .await?;
        Ok(())
    }

    /// Exchange the emailed code for a session.
    ///
    /// # Errors
    ///
    /// Transport failures, non-2xx answers, and 2xx answers that carry no
    /// token ([`ConsoleError::Rejected`]).
    pub async fn verify_otp(&self, email: &str, code: &OtpCode) -> Result<Session, ConsoleError> {
        let otp = match self.auth.otp_wire_format {
            OtpWireFormat::Number => json!(code.as_number()),
            OtpWireFormat::String => json!(code.as_str()),
        };
        let body = self
            .send_public(
                self.endpoints.verify_otp_url(),
                json!({ "email": email, "otp": otp }),
            )
            .await?;
        let grant: AuthGrant = if body.is_null() {
            AuthGrant::default()
        } else {
            serde_json::from_value(body)?
        };
        grant.into_session().ok_or_else(|| ConsoleError::Rejected {
            message: "Verification succeeded but no access token was issued".to_string(),
        })
    }

    /// Fetch the backup list.
    ///
    /// # Errors
    ///
    /// Transport/HTTP failures, 401, or an undecodable envelope.
    pub async fn list_backups(&self) -> Result<Vec<Backup>, ConsoleError> {
        let body = self
            .send_authenticated(Method::Post, self.endpoints.backups_url(), None)
            .await?;
        unwrap_list(&body, envelope::BACKUPS_FIELD)
    }

    /// Fetch the recent-activity feed.
    ///
    /// # Errors
    ///
    /// Transport/HTTP failures, 401, or an undecodable envelope.
    pub async fn list_activities(&self) -> Result<Vec<Activity>, ConsoleError> {
        let body = self
            .send_authenticated(Method::Get, self.endpoints.activity_url(), None)
            .await?;
        unwrap_list(&body, envelope::ACTIVITIES_FIELD)
    }

    /// Create a backup. Acknowledged by a truthy `success` or `id`.
    ///
    /// # Errors
    ///
    /// Transport/HTTP failures, 401, or [`ConsoleError::Rejected`].
    pub async fn create_backup(&self, draft: &BackupDraft) -> Result<Value, ConsoleError> {
        let body = self
            .send_authenticated(
                Method::Post,
                self.endpoints.create_backup_url(),
                Some(serde_json::to_value(draft)?),
            )
            .await?;
        if field_is_truthy(&body, "success") || field_is_truthy(&body, "id") {
            Ok(body)
        } else {
            Err(rejected(&body, "Failed to create backup"))
        }
    }

    /// Start restoring a backup. Acknowledged by a truthy `success`.
    ///
    /// # Errors
    ///
    /// Transport/HTTP failures, 401, or [`ConsoleError::Rejected`].
    pub async fn restore_backup(&self, id: &BackupId) -> Result<(), ConsoleError> {
        let url = self.endpoints.restore_backup_url(&id.to_string());
        let body = self.send_authenticated(Method::Post, url, None).await?;
        if field_is_truthy(&body, "success") {
            Ok(())
        } else {
            Err(rejected(&body, "Failed to restore backup"))
        }
    }

    /// Delete a backup. Acknowledged by a truthy `success` or
    /// `status == "deleted"`.
    ///
    /// # Errors
    ///
    /// Transport/HTTP failures, 401, or [`ConsoleError::Rejected`].
    pub async fn delete_backup(&self, id: &BackupId) -> Result<(), ConsoleError> {
        let url = self.endpoints.delete_backup_url(&id.to_string());
        let body = self.send_authenticated(Method::Delete, url, None).await?;
        let deleted = body.get("status").and_then(Value::as_str) == Some("deleted");
        if field_is_truthy(&body, "success") || deleted {
            Ok(())
        } else {
            Err(rejected(&body, "Failed to delete backup"))
        }
    }

    async fn send_public(&self, url: String, body: Value) -> Result<Value, ConsoleError> {
        let request = ApiRequest {
            method: Method::Post,
            url,
            bearer: None,
            body: Some(body),
        };
        tracing::debug!(url = %request.url, "public request");
        let response = self.transport.send(request).await.inspect_err(|err| {
            tracing::error!(error = %err, "API call failed");
        })?;

        let parsed = parse_body(&response.body);
        if !response.is_success() {
            let message = parsed
                .as_ref()
                .ok()
                .and_then(|body| first_string(body, &["message", "error"]))
                .unwrap_or("Request failed")
                .to_string();
            tracing::error!(status = response.status, %message, "API call failed");
            return Err(ConsoleError::Api {
                status: response.status,
                message,
            });
        }
        Ok(parsed?)
    }

    /// Send an authenticated request, handling 401 centrally.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::Unauthorized`] without a token or on 401; otherwise
    /// transport, HTTP and decode failures.
    pub async fn send_authenticated(
        &self,
        method: Method,
        url: String,
        body: Option<Value>,
    ) -> Result<Value, ConsoleError> {
        let Some(token) = self.sessions.access_token() else {
            return Err(self.expire_session());
        };
        let request = ApiRequest {
            method,
            url,
            bearer: Some(token),
            body: if method == Method::Get { None } else { body },
        };
        tracing::debug!(method = method.as_str(), url = %request.url, "authenticated request");
        let response = self.transport.send(request).await.inspect_err(|err| {
            tracing::error!(error = %err, "API call failed");
        })?;

        if response.status == HTTP_UNAUTHORIZED {
            return Err(self.expire_session());
        }

        let parsed = parse_body(&response.body);
        if !response.is_success() {
            let message = parsed
                .as_ref()
                .ok()
                .and_then(|body| first_string(body, &["message"]))
                .map_or_else(
                    || format!("HTTP error! status: {}", response.status),
                    ToString::to_string,
                );
            tracing::error!(status = response.status, %message, "API call failed");
            return Err(ConsoleError::Api {
                status: response.status,
                message,
            });
        }
        Ok(parsed?)
    }

    fn expire_session(&self) -> ConsoleError {
        tracing::warn!("session rejected, returning to login");
        self.sessions.clear();
        self.page.navigate(Route::Login);
        ConsoleError::Unauthorized
    }
}

/// Decode a body; an empty body reads as `null`.
fn parse_body(raw: &str) -> Result<Value, serde_json::Error> {
    if raw.trim().is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str(raw)
    }
}

fn rejected(body: &Value, fallback: &str) -> ConsoleError {
    ConsoleError::Rejected {
        message: first_string(body, &["message"])
            .unwrap_or(fallback)
            .to_string(),
    }
}

fn unwrap_list<I: DeserializeOwned>(
    body: &Value,
    canonical: &'static str,
) -> Result<Vec<I>, ConsoleError> {
    let Unwrapped { items, source } = envelope::unwrap_list(body, canonical)?;
    match source {
        EnvelopeSource::Alias(alias) => {
            tracing::warn!(alias, canonical, "list returned under deprecated envelope field");
        }
        EnvelopeSource::Missing => {
            tracing::warn!(canonical, "list envelope carried no known field");
        }
        EnvelopeSource::Canonical => {}
    }
    Ok(items)
}
