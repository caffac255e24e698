//! Session storage port: string key/value storage scoped to the tab.

/// Key/value storage with the semantics of the browser's `sessionStorage`.
///
/// Writes are best-effort: a full or disabled store must not fail the
/// caller, so implementations log and swallow their own errors.
pub trait SessionStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove `key` if present.
    fn remove(&self, key: &str);
}
