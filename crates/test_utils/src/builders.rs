//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults, so
//! tests specify only the fields they care about.

use chrono::{DateTime, Utc};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;

use domain_claims::{
    Claim, ClaimStatus, DamageType, DraftClaim, ImageAttachment, VehicleInfo,
};
use domain_session::{User, UserRole};

use crate::fixtures::{ImageFixtures, TemporalFixtures};

/// Builder for the wizard's draft claim
pub struct DraftClaimBuilder {
    draft: DraftClaim,
    images: Vec<ImageAttachment>,
}

impl Default for DraftClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftClaimBuilder {
    /// Creates a builder over an empty draft
    pub fn new() -> Self {
        Self {
            draft: DraftClaim::new(),
            images: Vec::new(),
        }
    }

    /// Pre-fills every step with a valid Ford Mustang scenario
    pub fn complete() -> Self {
        Self::new()
            .with_vehicle("Ford", "Mustang", "2021")
            .with_incident(TemporalFixtures::incident_date_str(), "Austin, TX")
            .with_images(1)
            .with_damage_type(DamageType::Moderate)
    }

    pub fn with_vehicle(mut self, make: &str, model: &str, year: &str) -> Self {
        self.draft.vehicle_make = make.to_string();
        self.draft.vehicle_model = model.to_string();
        self.draft.vehicle_year = year.to_string();
        self
    }

    pub fn with_incident(mut self, date: &str, location: &str) -> Self {
        self.draft.incident_date = date.to_string();
        self.draft.location = location.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.draft.description = description.to_string();
        self
    }

    pub fn with_images(mut self, count: usize) -> Self {
        self.images.extend(ImageFixtures::batch(count));
        self
    }

    pub fn with_damage_type(mut self, damage_type: DamageType) -> Self {
        self.draft.damage_type = Some(damage_type);
        self
    }

    /// Builds the draft, appending images through the capped slot logic
    pub fn build(mut self) -> DraftClaim {
        self.draft.add_images(self.images);
        self.draft
    }
}

/// Builder for claim wire models
pub struct ClaimBuilder {
    id: String,
    claim_number: String,
    claimant_name: String,
    status: ClaimStatus,
    damage_type: Option<DamageType>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            id: "claim-1".to_string(),
            claim_number: "CLM-20241024-TEST".to_string(),
            claimant_name: Name().fake(),
            status: ClaimStatus::Pending,
            damage_type: None,
            created_at: TemporalFixtures::claim_created_at(),
            updated_at: TemporalFixtures::claim_created_at(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_claim_number(mut self, number: impl Into<String>) -> Self {
        self.claim_number = number.into();
        self
    }

    pub fn with_claimant_name(mut self, name: impl Into<String>) -> Self {
        self.claimant_name = name.into();
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_damage_type(mut self, damage_type: DamageType) -> Self {
        self.damage_type = Some(damage_type);
        self
    }

    /// Marks the claim resolved at the standard resolution timestamp
    pub fn resolved(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self.updated_at = TemporalFixtures::claim_resolved_at();
        self
    }

    /// Builds the claim
    pub fn build(self) -> Claim {
        Claim {
            id: self.id,
            claim_number: self.claim_number,
            claimant_id: "user-1".to_string(),
            claimant_name: self.claimant_name,
            vehicle_info: VehicleInfo {
                make: "Ford".to_string(),
                model: "Mustang".to_string(),
                year: 2021,
                vin: None,
            },
            incident_date: TemporalFixtures::incident_date_str().to_string(),
            location: "Austin, TX".to_string(),
            description: "Rear-ended at a light".to_string(),
            images: vec!["uploads/front.jpg".to_string()],
            status: self.status,
            damage_type: self.damage_type,
            ai_analysis: None,
            policy_number: "POL-1".to_string(),
            policy_type: "Comprehensive".to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            comments: vec![],
        }
    }
}

/// Builder for user accounts
pub struct UserBuilder {
    id: String,
    name: String,
    email: String,
    role: UserRole,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UserBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            id: "user-1".to_string(),
            name: Name().fake(),
            email: SafeEmail().fake(),
            role: UserRole::Owner,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Builds the user
    pub fn build(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            avatar: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_claims::{step_is_valid, WizardStep};

    #[test]
    fn test_complete_draft_passes_every_step() {
        let draft = DraftClaimBuilder::complete().build();
        for step in WizardStep::ALL {
            assert!(step_is_valid(step, &draft), "step {step:?} should be valid");
        }
    }

    #[test]
    fn test_claim_builder_resolved() {
        let claim = ClaimBuilder::new().resolved(ClaimStatus::Approved).build();
        assert!(claim.is_resolved());
        assert!(claim.updated_at > claim.created_at);
    }
}
