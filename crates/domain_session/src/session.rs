//! The authenticated session

use serde::{Deserialize, Serialize};

use crate::user::User;

/// An authenticated identity plus its bearer credential
///
/// Constructing a `Session` requires both halves; a stored record with only
/// one of them present is treated as logged out by the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    /// Opaque bearer token attached to authenticated requests
    pub token: String,
}

impl Session {
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }
}
