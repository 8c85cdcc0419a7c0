//! Key-value session store abstraction.
//!
//! Models one learner's cookie session: opaque string keys, string values.
//! The web tier owns the real backing; tests use the in-memory store.

use std::collections::HashMap;
use std::sync::Mutex;

pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
}

/// In-memory session store.
#[derive(Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().expect("session lock").get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.values
            .lock()
            .expect("session lock")
            .insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.values.lock().expect("session lock").remove(key);
    }
}
