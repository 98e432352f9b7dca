//! In-memory credential store.
//!
//! Backs a session that does not survive a restart: tests, and the
//! degraded mode used when no durable storage is available (private
//! browsing, read-only profile directories).

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use keystone_application::CredentialStore;

/// Credential store held entirely in memory.
///
/// Cloning yields a handle to the same map, so a test can keep a handle
/// and inspect what the session store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    fn clear_all(&self, keys: &[&str]) {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        for key in keys {
            values.remove(*key);
        }
    }
}
