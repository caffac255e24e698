//! Typed access to the session persisted in a [`SessionStore`].

use backup_console_domain::session::Session;
use backup_console_domain::user::UserProfile;

use crate::ports::SessionStore;

/// Storage key of the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key of the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Storage key of the JSON-serialized user profile.
pub const USER_DATA_KEY: &str = "user_data";

/// Reads and writes the session under fixed storage keys.
#[derive(Debug, Clone)]
pub struct SessionManager<S> {
    store: S,
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored access token, if non-empty.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.store
            .get(ACCESS_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    /// Whether a usable access token is stored.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// The stored user profile. Unreadable data is logged and ignored.
    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        let raw = self.store.get(USER_DATA_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable stored user data");
                None
            }
        }
    }

    /// Rebuild the full session, or `None` without an access token.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        Some(Session {
            access_token: self.access_token()?,
            refresh_token: self.store.get(REFRESH_TOKEN_KEY),
            user: self.user(),
        })
    }

    /// Persist a freshly issued session.
    pub fn save(&self, session: &Session) {
        self.store.set(ACCESS_TOKEN_KEY, &session.access_token);
        if let Some(refresh) = &session.refresh_token {
            self.store.set(REFRESH_TOKEN_KEY, refresh);
        }
        if let Some(user) = &session.user {
            match serde_json::to_string(user) {
                Ok(json) => self.store.set(USER_DATA_KEY, &json),
                Err(err) => tracing::warn!(error = %err, "failed to serialize user profile"),
            }
        }
    }

    /// Forget the session.
    pub fn clear(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(REFRESH_TOKEN_KEY);
        self.store.remove(USER_DATA_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_store::InMemorySessionStore;
    use backup_console_domain::session::AuthGrant;
    use serde_json::json;

    fn manager() -> (SessionManager<InMemorySessionStore>, InMemorySessionStore) {
        let store = InMemorySessionStore::default();
        (SessionManager::new(store.clone()), store)
    }

    fn session(value: serde_json::Value) -> Session {
        serde_json::from_value::<AuthGrant>(value)
            .unwrap()
            .into_session()
            .unwrap()
    }

    #[test]
    fn should_persist_tokens_and_user_under_fixed_keys() {
        let (sessions, store) = manager();
        sessions.save(&session(json!({
            "access_token": "t1",
            "refresh_token": "r1",
            "user": {"username": "alice"}
        })));

        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("t1"));
        assert_eq!(store.get(REFRESH_TOKEN_KEY).as_deref(), Some("r1"));
        assert!(store.get(USER_DATA_KEY).unwrap().contains("alice"));
    }

    #[test]
    fn should_load_what_was_saved() {
        let (sessions, _) = manager();
        let saved = session(json!({"access_token": "t1", "user": {"username": "alice"}}));
        sessions.save(&saved);

        let loaded = sessions.load().unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.display_name(), "alice");
    }

    #[test]
    fn should_not_load_without_token() {
        let (sessions, store) = manager();
        store.set(USER_DATA_KEY, r#"{"username":"alice"}"#);
        assert!(sessions.load().is_none());

        store.set(ACCESS_TOKEN_KEY, "");
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn should_ignore_corrupt_user_data() {
        let (sessions, store) = manager();
        store.set(ACCESS_TOKEN_KEY, "t1");
        store.set(USER_DATA_KEY, "{not json");

        let loaded = sessions.load().unwrap();
        assert!(loaded.user.is_none());
        assert_eq!(loaded.display_name(), "User");
    }

    #[test]
    fn should_clear_every_key() {
        let (sessions, store) = manager();
        sessions.save(&session(json!({
            "access_token": "t1",
            "refresh_token": "r1",
            "user": {"username": "alice"}
        })));

        sessions.clear();

        assert!(store.is_empty());
        assert!(!sessions.is_authenticated());
    }
}
