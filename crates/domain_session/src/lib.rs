//! Session Domain
//!
//! The authenticated identity held by the running client: the user/session
//! model, the persisted session-store contract, auth form validation, and
//! the port to the backend auth endpoints.
//!
//! The session invariant is both-or-neither: a user without a token (or the
//! reverse) reads as logged out.

pub mod error;
pub mod forms;
pub mod ports;
pub mod session;
pub mod store;
pub mod user;

pub use error::{SessionError, StorageError};
pub use forms::{FieldError, FormValidation, LoginForm, SignupForm};
pub use ports::{AuthPort, Credentials, SignupRequest};
pub use session::Session;
pub use store::{KeyValueStore, MemoryStore, SessionStore};
pub use user::{User, UserRole};
