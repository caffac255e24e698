//! Login wizard: credentials, then the emailed one-time code.

use std::cell::RefCell;

use backup_console_domain::credentials::{Credentials, Field, OtpCode};

use crate::api_client::ApiClient;
use crate::config::TimingConfig;
use crate::ports::{HttpTransport, LoginStep, LoginView, PageHost, Route, SessionStore};

use super::failure_message;

pub const LOGIN_SENT: &str = "Login successful! Please check your email for the OTP code.";
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const VERIFIED: &str = "Verification successful! Redirecting to dashboard...";
pub const OTP_REJECTED: &str = "Invalid OTP code. Please try again.";

/// Where the wizard currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStep {
    Credentials,
    /// The code was sent to `email`.
    Otp { email: String },
    /// Terminal: a session is stored and the dashboard is next.
    Authenticated,
}

/// Drives the login page.
pub struct AuthController<T, S, P, V> {
    client: ApiClient<T, S, P>,
    view: V,
    timing: TimingConfig,
    step: RefCell<AuthStep>,
}

impl<T, S, P, V> AuthController<T, S, P, V>
where
    T: HttpTransport,
    S: SessionStore,
    P: PageHost,
    V: LoginView,
{
    pub fn new(client: ApiClient<T, S, P>, view: V, timing: TimingConfig) -> Self {
        Self {
            client,
            view,
            timing,
            step: RefCell::new(AuthStep::Credentials),
        }
    }

    /// Current step.
    pub fn step(&self) -> AuthStep {
        self.step.borrow().clone()
    }

    /// Enter the page. An existing session skips straight to the dashboard.
    pub fn start(&self) {
        if self.client.sessions().is_authenticated() {
            tracing::debug!("already signed in, skipping login");
            self.set_step(AuthStep::Authenticated);
            self.client.page().navigate(Route::Dashboard);
            return;
        }
        self.set_step(AuthStep::Credentials);
        self.view.show_step(LoginStep::Credentials);
    }

    /// Validate the credentials and ask the server to send a code.
    pub async fn submit_credentials(&self, email: &str, password: &str) {
        if *self.step.borrow() != AuthStep::Credentials {
            return;
        }
        self.view.clear_messages();

        let credentials = match Credentials::parse(email, password) {
            Ok(credentials) => credentials,
            Err(err) => {
                let fields: Vec<Field> = err.field().into_iter().collect();
                self.view.show_error(&err.to_string(), &fields);
                return;
            }
        };

        self.view.set_loading(true);
        let result = self.client.login(&credentials).await;
        self.view.set_loading(false);

        match result {
            Ok(()) => {
                tracing::info!("login accepted, waiting for code");
                self.view.show_success(LOGIN_SENT);
                self.client
                    .page()
                    .sleep(self.timing.step_transition_delay())
                    .await;
                self.set_step(AuthStep::Otp {
                    email: credentials.email,
                });
                self.view.clear_messages();
                self.view.show_step(LoginStep::Otp);
            }
            Err(err) => {
                self.view.show_error(
                    &failure_message(&err, LOGIN_FAILED),
                    &[Field::Email, Field::Password],
                );
            }
        }
    }

    /// Verify the code, store the session and leave for the dashboard.
    pub async fn submit_otp(&self, code: &str) {
        let email = match &*self.step.borrow() {
            AuthStep::Otp { email } => email.clone(),
            _ => return,
        };
        self.view.clear_messages();

        let code = match OtpCode::parse(code) {
            Ok(code) => code,
            Err(err) => {
                self.view.show_error(&err.to_string(), &[Field::Otp]);
                return;
            }
        };

        self.view.set_loading(true);
        let result = self.client.verify_otp(&email, &code).await;
        self.view.set_loading(false);

        match result {
            Ok(session) => {
                tracing::info!("code verified, session stored");
                self.client.sessions().save(&session);
                self.view.show_success(VERIFIED);
                self.set_step(AuthStep::Authenticated);
                self.client.page().sleep(self.timing.redirect_delay()).await;
                self.client.page().navigate(Route::Dashboard);
            }
            Err(err) => {
                self.view
                    .show_error(&failure_message(&err, OTP_REJECTED), &[Field::Otp]);
            }
        }
    }

    /// Return from the code step to the credentials step.
    pub fn go_back(&self) {
        if !matches!(*self.step.borrow(), AuthStep::Otp { .. }) {
            return;
        }
        self.set_step(AuthStep::Credentials);
        self.view.clear_messages();
        self.view.show_step(LoginStep::Credentials);
    }

    fn set_step(&self, step: AuthStep) {
        *self.step.borrow_mut() = step;
    }
}
