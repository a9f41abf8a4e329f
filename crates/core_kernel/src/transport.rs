//! Transport error type shared by every backend port
//!
//! All outbound operations surface failures as a `TransportError` so callers
//! can handle them exhaustively: convert to view state, redirect to login on
//! auth failures, or re-invoke the same action. No layer retries
//! automatically; every retry is user-initiated.

use thiserror::Error;

/// Error returned by any operation that crosses the HTTP boundary
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The backend answered with a non-2xx status
    #[error("API error {status}: {detail}")]
    Api { status: u16, detail: String },

    /// The request never produced a response (DNS, connect, timeout, IO)
    #[error("Network error: {message}")]
    Network { message: String },

    /// The response body could not be decoded into the expected shape
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    /// The persisted client-side state could not be read or written
    #[error("Session storage error: {message}")]
    Storage { message: String },

    /// An authenticated call was attempted with no stored token
    #[error("No active session")]
    MissingSession,

    /// The backend rejected the stored token
    #[error("Unauthorized")]
    Unauthorized,
}

impl TransportError {
    /// Creates an Api error
    pub fn api(status: u16, detail: impl Into<String>) -> Self {
        TransportError::Api {
            status,
            detail: detail.into(),
        }
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        TransportError::Network {
            message: message.into(),
        }
    }

    /// Creates a Decode error
    pub fn decode(message: impl Into<String>) -> Self {
        TransportError::Decode {
            message: message.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        TransportError::Storage {
            message: message.into(),
        }
    }

    /// Returns the backend's error detail, when the backend supplied one
    pub fn detail(&self) -> Option<&str> {
        match self {
            TransportError::Api { detail, .. } if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }

    /// Returns true if the failure means the session is missing or expired
    ///
    /// Callers redirect to the login screen instead of rendering an inline
    /// message for these.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            TransportError::MissingSession | TransportError::Unauthorized
        )
    }
}
