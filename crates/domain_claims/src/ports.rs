//! Claims Domain Ports
//!
//! Port interfaces for the backend claim endpoints, enabling swappable
//! implementations (HTTP adapter, mock for tests). The wizard and the
//! dashboard depend on these traits, never on a concrete transport.

use async_trait::async_trait;

use core_kernel::TransportError;

use crate::draft::{DraftClaim, ImageAttachment};
use crate::model::{AiAnalysis, Claim, ClaimStatus, DamageType};

/// Query parameters for listing claims
#[derive(Debug, Clone, Default)]
pub struct ClaimQuery {
    /// Filter by claim status
    pub status: Option<ClaimStatus>,
    /// Limit results
    pub limit: Option<u32>,
    /// Offset for pagination
    pub offset: Option<u32>,
}

impl ClaimQuery {
    /// Creates a query filtered to one status
    pub fn by_status(status: ClaimStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Adds pagination to the query
    pub fn paginate(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }
}

/// The create-claim payload sent as one multipart request
#[derive(Debug, Clone, PartialEq)]
pub struct CreateClaimRequest {
    pub claimant_name: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: i32,
    pub vehicle_vin: Option<String>,
    pub incident_date: String,
    pub location: String,
    pub description: String,
    pub policy_number: String,
    pub policy_type: String,
    pub images: Vec<ImageAttachment>,
}

impl CreateClaimRequest {
    /// Snapshots a draft into a request on behalf of the named claimant
    ///
    /// The policy number is a submit-time placeholder; the policy itself is
    /// looked up by the backend.
    pub fn from_draft(draft: &DraftClaim, claimant_name: impl Into<String>) -> Self {
        Self {
            claimant_name: claimant_name.into(),
            vehicle_make: draft.vehicle_make.trim().to_string(),
            vehicle_model: draft.vehicle_model.trim().to_string(),
            vehicle_year: draft.parsed_year().unwrap_or_default(),
            vehicle_vin: None,
            incident_date: draft.incident_date.trim().to_string(),
            location: draft.location.trim().to_string(),
            description: draft.description.trim().to_string(),
            policy_number: generate_policy_number(),
            policy_type: "Comprehensive".to_string(),
            images: draft.images().to_vec(),
        }
    }
}

/// Patch payload for `PUT /claims/{id}`
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct UpdateClaimRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClaimStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<DamageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Backend claim endpoints
///
/// Every operation attaches the stored bearer token when present and
/// surfaces failures as [`TransportError`]. None retry automatically.
#[async_trait]
pub trait ClaimsPort: Send + Sync {
    /// Creates a claim from the full draft snapshot (multipart upload)
    async fn create_claim(&self, request: CreateClaimRequest) -> Result<Claim, TransportError>;

    /// Lists claims with optional status filter and pagination
    async fn list_claims(&self, query: ClaimQuery) -> Result<Vec<Claim>, TransportError>;

    /// Fetches a single claim by backend id
    async fn get_claim(&self, id: &str) -> Result<Claim, TransportError>;

    /// Applies a partial update to a claim
    async fn update_claim(
        &self,
        id: &str,
        patch: UpdateClaimRequest,
    ) -> Result<Claim, TransportError>;

    /// Deletes a claim
    async fn delete_claim(&self, id: &str) -> Result<(), TransportError>;
}

/// Backend image-analysis endpoints
#[async_trait]
pub trait AnalysisPort: Send + Sync {
    /// Runs fraud analysis on a single image
    async fn analyze_fraud(&self, image: &ImageAttachment) -> Result<AiAnalysis, TransportError>;

    /// Runs damage-severity analysis on a single image
    async fn analyze_damage(&self, image: &ImageAttachment) -> Result<AiAnalysis, TransportError>;

    /// Analyzes a batch of images in one request
    async fn analyze_batch(
        &self,
        images: &[ImageAttachment],
    ) -> Result<Vec<AiAnalysis>, TransportError>;
}

fn generate_policy_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("POL-{}", duration.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> DraftClaim {
        let mut draft = DraftClaim::new();
        draft.vehicle_make = "Ford".to_string();
        draft.vehicle_model = "Mustang".to_string();
        draft.vehicle_year = "2021".to_string();
        draft.incident_date = "2024-10-24".to_string();
        draft.location = "Austin, TX".to_string();
        draft.description = "Rear-ended at a light".to_string();
        draft.damage_type = Some(DamageType::Moderate);
        draft.add_images([ImageAttachment::new("front.jpg", "image/jpeg", vec![1, 2, 3])]);
        draft
    }

    #[test]
    fn test_from_draft_snapshots_all_fields() {
        let draft = filled_draft();
        let request = CreateClaimRequest::from_draft(&draft, "Jordan Avery");

        assert_eq!(request.claimant_name, "Jordan Avery");
        assert_eq!(request.vehicle_make, "Ford");
        assert_eq!(request.vehicle_model, "Mustang");
        assert_eq!(request.vehicle_year, 2021);
        assert_eq!(request.incident_date, "2024-10-24");
        assert_eq!(request.location, "Austin, TX");
        assert_eq!(request.images.len(), 1);
        assert!(request.policy_number.starts_with("POL-"));
        assert_eq!(request.policy_type, "Comprehensive");
    }

    #[test]
    fn test_from_draft_trims_entered_text() {
        let mut draft = filled_draft();
        draft.location = "  Austin, TX  ".to_string();
        let request = CreateClaimRequest::from_draft(&draft, "Jordan Avery");
        assert_eq!(request.location, "Austin, TX");
    }

    #[test]
    fn test_query_builders() {
        let query = ClaimQuery::by_status(ClaimStatus::Pending).paginate(20, 40);
        assert_eq!(query.status, Some(ClaimStatus::Pending));
        assert_eq!(query.limit, Some(20));
        assert_eq!(query.offset, Some(40));
    }

    #[test]
    fn test_update_request_skips_unset_fields() {
        let patch = UpdateClaimRequest {
            status: Some(ClaimStatus::Approved),
            ..Default::default()
        };
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({"status": "approved"}));
    }
}
