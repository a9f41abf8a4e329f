//! Core Kernel - Foundational types and utilities for the ClaimGuard client
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed identifiers
//! - Pure validation primitives for form input and image files
//! - The transport error type shared by every backend port
//! - The navigational route table and display formatting helpers

pub mod error;
pub mod format;
pub mod identifiers;
pub mod navigation;
pub mod transport;
pub mod validation;

pub use error::CoreError;
pub use identifiers::{ClaimId, CommentId, NotificationId, UserId};
pub use navigation::Route;
pub use transport::TransportError;
pub use validation::PasswordStrength;
