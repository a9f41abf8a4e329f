//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities across the client test suite.
//! These fixtures are deterministic so assertions stay predictable.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use core_kernel::{ClaimId, UserId};
use domain_claims::ImageAttachment;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard incident date used across wizard tests
    pub fn incident_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 24).unwrap()
    }

    /// The incident date in the wire format the backend expects
    pub fn incident_date_str() -> &'static str {
        "2024-10-24"
    }

    /// Timestamp a claim was created at
    pub fn claim_created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 24, 12, 0, 0).unwrap()
    }

    /// Timestamp a claim was resolved at, two days later
    pub fn claim_resolved_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 26, 12, 0, 0).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic claim ID for testing
    pub fn claim_id() -> ClaimId {
        ClaimId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic user ID for testing
    pub fn user_id() -> UserId {
        UserId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }
}

/// Fixture for image attachments
pub struct ImageFixtures;

impl ImageFixtures {
    /// A small valid JPEG attachment
    pub fn jpeg(name: &str) -> ImageAttachment {
        ImageAttachment::new(name, "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0])
    }

    /// A batch of numbered JPEG attachments
    pub fn batch(count: usize) -> Vec<ImageAttachment> {
        (0..count).map(|i| Self::jpeg(&format!("img-{i}.jpg"))).collect()
    }

    /// An attachment that fails the image prefilter (wrong media type)
    pub fn rejected_pdf() -> ImageAttachment {
        ImageAttachment::new("doc.pdf", "application/pdf", vec![0x25, 0x50])
    }
}
