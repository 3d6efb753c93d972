use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::CredentialStore;

/// In-memory CredentialStore for testing and native fallback.
///
/// Clones share the same backing map, so a clone handed to one component
/// observes writes made through another. That mirrors how every part of a
/// browser session sees the same localStorage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}
