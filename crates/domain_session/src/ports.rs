//! Session Domain Ports
//!
//! Port interface for the backend auth endpoints. The HTTP adapter persists
//! returned sessions to the session store; a mock can stand in for tests.

use async_trait::async_trait;
use serde::Serialize;

use core_kernel::TransportError;

use crate::session::Session;
use crate::user::{User, UserRole};

/// Login payload for `POST /auth/login-json`
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload for `POST /auth/signup`
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: UserRole,
}

/// Backend auth endpoints
///
/// All failures surface as [`TransportError`]; none retry automatically.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Exchanges credentials for a session
    async fn login(&self, credentials: &Credentials) -> Result<Session, TransportError>;

    /// Registers a new account and returns its first session
    async fn signup(&self, request: &SignupRequest) -> Result<Session, TransportError>;

    /// Ends the backend session; the stored session is cleared regardless
    async fn logout(&self) -> Result<(), TransportError>;

    /// Fetches the authenticated user behind the stored token
    async fn current_user(&self) -> Result<User, TransportError>;
}
