//! Session store over a pluggable key-value backend
//!
//! The storage mechanism is external to this core: implementations range
//! from browser-local storage to a JSON file on disk. This module defines
//! the read/write contract, an in-memory adapter, and the `SessionStore`
//! that enforces the session invariant over two fixed keys.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::{SessionError, StorageError};
use crate::session::Session;
use crate::user::User;

/// Storage key for the bearer token
pub const TOKEN_KEY: &str = "token";
/// Storage key for the user record (JSON)
pub const USER_KEY: &str = "user";

/// Contract for persisted string key-value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory adapter for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StorageError::backend("store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::backend("store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::backend("store lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}

/// Read/write access to the persisted session
///
/// Writes keep the user and token in lockstep; reads treat a half-written
/// pair as logged out.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Convenience constructor over an in-memory backend
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Persists both halves of the session
    pub fn set_session(&self, user: &User, token: &str) -> Result<(), SessionError> {
        let user_json = serde_json::to_string(user)?;
        self.store.set(TOKEN_KEY, token)?;
        self.store.set(USER_KEY, &user_json)?;
        debug!(user = %user.email, "session stored");
        Ok(())
    }

    /// The stored bearer token, if any
    pub fn token(&self) -> Result<Option<String>, SessionError> {
        Ok(self.store.get(TOKEN_KEY)?)
    }

    /// The stored user, if the session is whole
    pub fn user(&self) -> Result<Option<User>, SessionError> {
        Ok(self.session()?.map(|session| session.user))
    }

    /// The whole session, present only when both halves are stored
    pub fn session(&self) -> Result<Option<Session>, SessionError> {
        let token = match self.store.get(TOKEN_KEY)? {
            Some(token) => token,
            None => return Ok(None),
        };
        let user_json = match self.store.get(USER_KEY)? {
            Some(user_json) => user_json,
            None => return Ok(None),
        };
        let user: User = serde_json::from_str(&user_json)?;
        Ok(Some(Session::new(user, token)))
    }

    /// Refreshes the stored user record, keeping the token
    pub fn update_user(&self, user: &User) -> Result<(), SessionError> {
        let user_json = serde_json::to_string(user)?;
        self.store.set(USER_KEY, &user_json)?;
        Ok(())
    }

    /// Removes both halves of the session
    pub fn clear(&self) -> Result<(), SessionError> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(USER_KEY)?;
        debug!("session cleared");
        Ok(())
    }

    /// True iff a token is stored
    pub fn is_authenticated(&self) -> bool {
        matches!(self.store.get(TOKEN_KEY), Ok(Some(_)))
    }
}
