//! In-memory [`SessionStore`], used when the browser's storage is unavailable
//! and as the store behind tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::ports::SessionStore;

/// Session store backed by a shared `HashMap`.
///
/// Clones share the same map, matching how every handle to the browser's
/// `sessionStorage` sees the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl InMemorySessionStore {
    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_share_entries_between_clones() {
        let a = InMemorySessionStore::default();
        let b = a.clone();

        a.set("k", "v");
        assert_eq!(b.get("k").as_deref(), Some("v"));

        b.remove("k");
        assert!(a.get("k").is_none());
        assert!(a.is_empty());
    }

    #[test]
    fn should_overwrite_existing_value() {
        let store = InMemorySessionStore::default();
        store.set("k", "1");
        store.set("k", "2");
        assert_eq!(store.get("k").as_deref(), Some("2"));
    }
}
