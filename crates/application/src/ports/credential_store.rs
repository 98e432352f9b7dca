//! Credential persistence port
//!
//! A narrow, synchronous key-value surface over whatever durable storage
//! the platform offers. Writes must be visible to a subsequent `get` in
//! the same tick; there is no write-then-stale-read window.

/// Port for durable credential storage.
///
/// Methods are infallible: an adapter that loses its durable backing (for
/// example a read-only profile directory) must degrade to serving from
/// memory rather than failing the session. A degraded session simply does
/// not survive a restart.
pub trait CredentialStore: Send + Sync + 'static {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Removes the value stored under `key`, if any.
    fn remove(&self, key: &str);

    /// Removes every key in `keys`. Used by logout and by failed startup
    /// checks to drop the whole credential set at once.
    fn clear_all(&self, keys: &[&str]) {
        for key in keys {
            self.remove(key);
        }
    }
}
