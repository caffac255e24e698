//! Common error types used across the workspace.
//!
//! The `Display` output of every variant is the text shown to the user, so
//! the controllers can surface `err.to_string()` directly in a banner.

use crate::credentials::Field;

/// A local validation failure. Never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your email address")]
    EmptyEmail,

    #[error("Please enter your password")]
    EmptyPassword,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter the OTP code")]
    EmptyOtp,

    #[error("OTP must be 5 digits")]
    InvalidOtp,

    /// One of the required create-backup fields (name, path, type) is blank.
    #[error("Please fill in all required fields.")]
    MissingBackupField {
        /// Name of the first blank field.
        field: &'static str,
    },
}

impl ValidationError {
    /// The input field the error should be attached to, if any.
    #[must_use]
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::EmptyEmail | Self::InvalidEmail => Some(Field::Email),
            Self::EmptyPassword => Some(Field::Password),
            Self::EmptyOtp | Self::InvalidOtp => Some(Field::Otp),
            Self::MissingBackupField { .. } => None,
        }
    }
}

/// Top-level error for every operation the console performs.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The API answered 401, or no session token was available.
    #[error("Your session has expired. Please log in again.")]
    Unauthorized,

    /// The API answered with a non-2xx status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body, or a fallback.
        message: String,
    },

    /// The API answered 2xx but the body did not acknowledge the operation.
    #[error("{message}")]
    Rejected {
        /// Message extracted from the response body, or a fallback.
        message: String,
    },

    /// The request never produced a response (network failure, CORS, …).
    #[error(transparent)]
    Transport(Box<dyn std::error::Error>),

    /// The response body was not the JSON shape we expected.
    #[error("Unexpected response from server")]
    Decode(#[from] serde_json::Error),
}

impl ConsoleError {
    /// Build a [`ConsoleError::Transport`] from any error type.
    pub fn transport(err: impl std::error::Error + 'static) -> Self {
        Self::Transport(Box::new(err))
    }

    /// Whether this error must short-circuit normal error display.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
