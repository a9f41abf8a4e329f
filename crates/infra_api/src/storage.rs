//! File-backed key-value storage
//!
//! Persists the client-side session state as a small JSON map on disk,
//! read-modify-written per operation. The map is tiny (two keys), so
//! rewriting the whole file keeps the adapter simple and crash-safe enough
//! for a client cache.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use domain_session::{KeyValueStore, StorageError};

/// `KeyValueStore` over a JSON file
pub struct JsonFileStore {
    path: PathBuf,
    // serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_map(path: &Path) -> Result<HashMap<String, String>, StorageError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|e| StorageError::backend(e.to_string()))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(StorageError::backend(err.to_string())),
        }
    }

    fn write_map(path: &Path, map: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::backend(e.to_string()))?;
        }
        let contents =
            serde_json::to_string_pretty(map).map_err(|e| StorageError::backend(e.to_string()))?;
        fs::write(path, contents).map_err(|e| StorageError::backend(e.to_string()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StorageError::backend("store lock poisoned"))?;
        Ok(Self::read_map(&self.path)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StorageError::backend("store lock poisoned"))?;
        let mut map = Self::read_map(&self.path)?;
        map.insert(key.to_string(), value.to_string());
        Self::write_map(&self.path, &map)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StorageError::backend("store lock poisoned"))?;
        let mut map = Self::read_map(&self.path)?;
        map.remove(key);
        Self::write_map(&self.path, &map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_session::{SessionStore, User, UserRole};
    use std::sync::Arc;

    fn temp_store_path() -> PathBuf {
        std::env::temp_dir()
            .join("claimguard-tests")
            .join(format!("{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_set_get_remove_round_trip() {
        let path = temp_store_path();
        let store = JsonFileStore::new(&path);

        assert_eq!(store.get("token").unwrap(), None);
        store.set("token", "tok-123").unwrap();
        assert_eq!(store.get("token").unwrap().as_deref(), Some("tok-123"));

        store.remove("token").unwrap();
        assert_eq!(store.get("token").unwrap(), None);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_values_survive_reopening() {
        let path = temp_store_path();
        JsonFileStore::new(&path).set("user", "{}").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("user").unwrap().as_deref(), Some("{}"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_backs_a_session_store() {
        let path = temp_store_path();
        let session = SessionStore::new(Arc::new(JsonFileStore::new(&path)));
        let user = User {
            id: "u-1".to_string(),
            name: "Jordan Avery".to_string(),
            email: "jordan@example.com".to_string(),
            role: UserRole::Owner,
            avatar: None,
        };

        session.set_session(&user, "tok-123").unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.session().unwrap().unwrap().user.email, user.email);

        session.clear().unwrap();
        assert!(!session.is_authenticated());

        let _ = fs::remove_file(path);
    }
}
