//! The authenticated user as returned by the backend

use serde::{Deserialize, Serialize};

/// Role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Vehicle owner filing claims
    Owner,
    /// Insurance agent reviewing claims
    Agent,
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Owner
    }
}

/// A user account (backend `UserResponse` shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier (opaque to the client)
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
