//! File-backed credential store.
//!
//! Credentials are stored as a single JSON document:
//!
//! ```json
//! {
//!   "schema_version": 1,
//!   "values": {
//!     "accessToken": "...",
//!     "userType": "student"
//!   }
//! }
//! ```
//!
//! Every write goes through to disk synchronously, so a value set here is
//! visible to a `get` in the same tick and survives a restart. A store
//! that cannot write its file degrades to memory-only: the failure is
//! logged and the session simply will not survive the next restart.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::warn;

use keystone_application::CredentialStore;

const SCHEMA_VERSION: u32 = 1;

/// On-disk shape of the credential file.
#[derive(Debug, Serialize, Deserialize)]
struct CredentialFile {
    schema_version: u32,
    values: HashMap<String, String>,
}

/// Durable credential store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: Arc<PathBuf>,
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl FileCredentialStore {
    /// Opens the store at `path`, loading any existing credential file.
    ///
    /// A missing file starts the store empty; an unreadable or corrupt
    /// file is logged and treated as empty rather than failing startup.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = Self::load(&path);
        Self {
            path: Arc::new(path),
            values: Arc::new(RwLock::new(values)),
        }
    }

    /// The platform-default location for the credential file, under the
    /// user's data directory. `None` when the platform reports no data
    /// directory (the caller should fall back to a memory store).
    #[must_use]
    pub fn default_location() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("keystone").join("credentials.json"))
    }

    /// Path this store writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.path.as_ref()
    }

    fn load(path: &Path) -> HashMap<String, String> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not read credential file");
                return HashMap::new();
            }
        };

        match serde_json::from_slice::<CredentialFile>(&bytes) {
            Ok(file) => file.values,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "corrupt credential file ignored");
                HashMap::new()
            }
        }
    }

    /// Writes the current map through to disk. Failures degrade to
    /// memory-only operation.
    fn flush(&self, values: &HashMap<String, String>) {
        let file = CredentialFile {
            schema_version: SCHEMA_VERSION,
            values: values.clone(),
        };

        let bytes = match serde_json::to_vec_pretty(&file) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(error = %err, "could not encode credential file");
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %err, "could not create credential directory; session will not survive restart");
                return;
            }
        }

        if let Err(err) = std::fs::write(self.path.as_ref(), bytes) {
            warn!(path = %self.path.display(), error = %err, "could not write credential file; session will not survive restart");
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        self.flush(&values);
    }

    fn remove(&self, key: &str) {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        if values.remove(key).is_some() {
            self.flush(&values);
        }
    }

    fn clear_all(&self, keys: &[&str]) {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        let mut changed = false;
        for key in keys {
            changed |= values.remove(*key).is_some();
        }
        if changed {
            self.flush(&values);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("credentials.json");

        let store = FileCredentialStore::open(&path);
        store.set("accessToken", "AT1");
        store.set("userType", "student");
        drop(store);

        let reopened = FileCredentialStore::open(&path);
        assert_eq!(reopened.get("accessToken").as_deref(), Some("AT1"));
        assert_eq!(reopened.get("userType").as_deref(), Some("student"));
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempdir().expect("temp dir");
        let store = FileCredentialStore::open(dir.path().join("absent.json"));
        assert!(store.get("accessToken").is_none());
    }

    #[test]
    fn test_corrupt_file_is_tolerated() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, b"not json at all").expect("seed file");

        let store = FileCredentialStore::open(&path);
        assert!(store.get("accessToken").is_none());

        // The store still works and repairs the file on the next write.
        store.set("accessToken", "AT1");
        let reopened = FileCredentialStore::open(&path);
        assert_eq!(reopened.get("accessToken").as_deref(), Some("AT1"));
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("credentials.json");

        let store = FileCredentialStore::open(&path);
        store.set("accessToken", "AT1");
        store.set("refreshToken", "RT1");
        store.remove("accessToken");

        let reopened = FileCredentialStore::open(&path);
        assert!(reopened.get("accessToken").is_none());
        assert_eq!(reopened.get("refreshToken").as_deref(), Some("RT1"));
    }

    #[test]
    fn test_file_carries_schema_version() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("credentials.json");

        let store = FileCredentialStore::open(&path);
        store.set("accessToken", "AT1");

        let raw = std::fs::read(&path).expect("read back");
        let file: CredentialFile = serde_json::from_slice(&raw).expect("parse");
        assert_eq!(file.schema_version, SCHEMA_VERSION);
        assert_eq!(file.values.get("accessToken").map(String::as_str), Some("AT1"));
    }
}
