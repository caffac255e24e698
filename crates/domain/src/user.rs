//! User profile as returned by the OTP verification endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Display name used when the profile carries no usable name field.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// Profile fields consulted for the display name, highest priority first.
const NAME_FIELDS: [&str; 6] = [
    "username",
    "name",
    "full_name",
    "display_name",
    "first_name",
    "email",
];

/// Loosely-typed user profile.
///
/// The backend sends an arbitrary object; it is kept verbatim so that it can
/// be written back to session storage without losing fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(Map<String, Value>);

impl UserProfile {
    /// Wrap an existing JSON object.
    #[must_use]
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Read a string field, ignoring empty strings and non-string values.
    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// First non-empty name field, or [`DEFAULT_DISPLAY_NAME`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        NAME_FIELDS
            .iter()
            .find_map(|field| self.get_str(field))
            .unwrap_or(DEFAULT_DISPLAY_NAME)
    }
}

/// Display name for an optional profile.
#[must_use]
pub fn display_name_of(profile: Option<&UserProfile>) -> &str {
    profile.map_or(DEFAULT_DISPLAY_NAME, UserProfile::display_name)
}

/// Upper-cased first character of a display name, for the avatar.
#[must_use]
pub fn avatar_initial(display_name: &str) -> String {
    display_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
