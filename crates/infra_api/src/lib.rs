//! Infrastructure adapters for the ClaimGuard backend API
//!
//! Implements the domain ports over HTTP with `reqwest`:
//! - [`HttpClaimsClient`] for the claim endpoints (multipart create, list,
//!   get, update, delete)
//! - [`HttpAuthClient`] for login/signup/logout/me, persisting the session
//! - [`HttpAnalysisClient`] for the image-analysis endpoints
//!
//! plus [`JsonFileStore`], a file-backed key-value adapter for the persisted
//! client-side session state.

pub mod analysis;
pub mod auth;
pub mod claims;
pub mod client;
pub mod config;
pub mod storage;

pub use analysis::HttpAnalysisClient;
pub use auth::HttpAuthClient;
pub use claims::HttpClaimsClient;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use storage::JsonFileStore;
