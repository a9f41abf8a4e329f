//! Test Utilities
//!
//! Shared fixtures, builders, and mock ports for the ClaimGuard client test
//! suite. Unit tests live with their crates; the cross-crate scenarios in
//! `tests/` drive the full wizard and session flows against the mocks here.

pub mod builders;
pub mod fixtures;
pub mod mock;

pub use builders::{ClaimBuilder, DraftClaimBuilder, UserBuilder};
pub use fixtures::{IdFixtures, ImageFixtures, TemporalFixtures};
pub use mock::{MockAuthClient, MockClaimsClient};

use once_cell::sync::OnceCell;

static TRACING: OnceCell<()> = OnceCell::new();

/// Initializes a test tracing subscriber once per process
///
/// Honors `RUST_LOG`; defaults to `debug` for workspace crates.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
