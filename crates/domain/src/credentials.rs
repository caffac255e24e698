//! Login credentials and OTP codes, validated before any request is made.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

/// Number of digits in a one-time passcode.
pub const OTP_LENGTH: usize = 5;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Input fields of the login wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
    Otp,
}

/// Whether `email` has the basic `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validated email/password pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Trim and validate raw form input.
    ///
    /// # Errors
    ///
    /// Returns the first failing check, in form order: empty email, empty
    /// password, malformed email.
    pub fn parse(email: &str, password: &str) -> Result<Self, ValidationError> {
        let email = email.trim();
        let password = password.trim();
        if email.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A validated one-time passcode: exactly [`OTP_LENGTH`] ASCII digits.
///
/// The digit string is kept as typed so leading zeros survive until the
/// wire format is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    /// Trim and validate raw form input.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyOtp`] for blank input,
    /// [`ValidationError::InvalidOtp`] for anything but five digits.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let code = raw.trim();
        if code.is_empty() {
            return Err(ValidationError::EmptyOtp);
        }
        if code.len() != OTP_LENGTH || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidOtp);
        }
        Ok(Self(code.to_string()))
    }

    /// Keep only digits, at most [`OTP_LENGTH`] of them. Applied on every
    /// keystroke in the OTP input.
    #[must_use]
    pub fn sanitize_input(raw: &str) -> String {
        raw.chars()
            .filter(char::is_ascii_digit)
            .take(OTP_LENGTH)
            .collect()
    }

    /// The digits as typed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric value (leading zeros dropped).
    #[must_use]
    pub fn as_number(&self) -> u32 {
        self.0
            .bytes()
            .fold(0, |acc, digit| acc * 10 + u32::from(digit - b'0'))
    }
}
