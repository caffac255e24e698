//! Session: the tokens and profile issued after OTP verification.

use serde::Deserialize;

use crate::user::UserProfile;

/// An authenticated session as mirrored in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    /// Display name of the signed-in user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        crate::user::display_name_of(self.user.as_ref())
    }
}

/// Body of a successful OTP verification.
///
/// Older deployments answer with `token` instead of `access_token`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthGrant {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

impl AuthGrant {
    /// Turn the grant into a session. `None` when no token was issued.
    #[must_use]
    pub fn into_session(self) -> Option<Session> {
        let access_token = self
            .access_token
            .filter(|t| !t.is_empty())
            .or(self.token.filter(|t| !t.is_empty()))?;
        Some(Session {
            access_token,
            refresh_token: self.refresh_token.filter(|t| !t.is_empty()),
            user: self.user,
        })
    }
}
