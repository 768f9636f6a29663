//! In-memory implementation of [`SessionStore`].

use std::collections::HashMap;

use fleetgate_core::error::GateResult;
use fleetgate_core::store::SessionStore;
use parking_lot::Mutex;

/// An ephemeral store backed by a mutex-guarded map.
///
/// Nothing survives the process; intended for tests and for embedders
/// that manage persistence themselves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> GateResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> GateResult<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> GateResult<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_absent_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("token").unwrap(), None);
    }

    #[test]
    fn set_overwrites() {
        let store = MemoryStore::new();
        store.set("token", "a").unwrap();
        store.set("token", "b").unwrap();
        assert_eq!(store.get("token").unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let store = MemoryStore::new();
        store.remove("token").unwrap();
    }
}
