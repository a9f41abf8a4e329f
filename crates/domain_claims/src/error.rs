//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Unknown claim status: {0}")]
    UnknownStatus(String),

    #[error("Unknown damage type: {0}")]
    UnknownDamageType(String),
}
