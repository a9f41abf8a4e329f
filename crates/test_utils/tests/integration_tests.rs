//! Integration Tests for the ClaimGuard client core
//!
//! Cross-crate scenarios: the submission wizard against the mock claims
//! port, the session lifecycle, and the dashboard aggregates.

use std::sync::Arc;

use core_kernel::TransportError;
use domain_claims::{
    ClaimQuery, ClaimStatus, ClaimWizard, DamageType, DashboardStats, Notification,
    NotificationKind, unread_count, WizardOutcome, WizardStep,
};
use domain_session::{AuthPort, Credentials, LoginForm, SessionStore, UserRole};
use test_utils::{
    init_tracing, ClaimBuilder, MockAuthClient, MockClaimsClient, UserBuilder,
};

mod wizard_submission_flow {
    use super::*;

    fn wizard_with_complete_draft(claims: Arc<MockClaimsClient>) -> ClaimWizard {
        let mut wizard = ClaimWizard::new("Jordan Avery", claims);
        let built = test_utils::DraftClaimBuilder::complete().build();
        *wizard.draft_mut() = built;
        wizard
    }

    /// Steps 0 -> 1 -> 2 -> 3, asserting each move
    async fn walk_to_review(wizard: &mut ClaimWizard) {
        for expected in [
            WizardStep::UploadPhotos,
            WizardStep::DamageType,
            WizardStep::Review,
        ] {
            assert!(matches!(wizard.next().await, WizardOutcome::InProgress));
            assert_eq!(wizard.step(), expected);
        }
    }

    /// Tests the full submission scenario: one create call carrying the
    /// whole draft, ending in the terminal submitted outcome
    #[tokio::test]
    async fn test_submission_success_end_to_end() {
        init_tracing();
        let claims = Arc::new(MockClaimsClient::new());
        let mut wizard = wizard_with_complete_draft(claims.clone());

        walk_to_review(&mut wizard).await;
        let outcome = wizard.next().await;

        let claim = match outcome {
            WizardOutcome::Submitted(claim) => claim,
            other => panic!("expected Submitted, got {other:?}"),
        };
        assert_eq!(claim.status, ClaimStatus::Pending);
        assert_eq!(claims.create_call_count(), 1);

        let request = &claims.create_requests()[0];
        assert_eq!(request.claimant_name, "Jordan Avery");
        assert_eq!(request.vehicle_make, "Ford");
        assert_eq!(request.vehicle_model, "Mustang");
        assert_eq!(request.vehicle_year, 2021);
        assert_eq!(request.incident_date, "2024-10-24");
        assert_eq!(request.location, "Austin, TX");
        assert_eq!(request.policy_type, "Comprehensive");
        assert_eq!(request.images.len(), 1);
    }

    /// Tests the failure path: backend detail surfaces, wizard stays on
    /// review, and a user-initiated retry succeeds
    #[tokio::test]
    async fn test_submission_failure_then_retry() {
        init_tracing();
        let claims = Arc::new(MockClaimsClient::new());
        claims.script_create(Err(TransportError::api(400, "Invalid VIN")));
        let mut wizard = wizard_with_complete_draft(claims.clone());

        walk_to_review(&mut wizard).await;

        assert!(matches!(wizard.next().await, WizardOutcome::InProgress));
        assert_eq!(wizard.step(), WizardStep::Review);
        assert_eq!(wizard.submission_error(), Some("Invalid VIN"));
        assert!(!wizard.is_submitting());
        assert_eq!(claims.create_call_count(), 1);

        let outcome = wizard.next().await;
        assert!(matches!(outcome, WizardOutcome::Submitted(_)));
        assert_eq!(claims.create_call_count(), 2);
    }

    /// Tests that going back to fix data never loses what was collected
    #[tokio::test]
    async fn test_back_and_forward_preserves_draft() {
        init_tracing();
        let claims = Arc::new(MockClaimsClient::new());
        let mut wizard = wizard_with_complete_draft(claims.clone());

        walk_to_review(&mut wizard).await;
        wizard.back();
        wizard.back();
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::BasicInfo);
        assert_eq!(wizard.draft().images().len(), 1);
        assert_eq!(wizard.draft().damage_type, Some(DamageType::Moderate));

        walk_to_review(&mut wizard).await;
        assert!(matches!(wizard.next().await, WizardOutcome::Submitted(_)));
    }
}

mod intake_prefilter {
    use test_utils::{IdFixtures, ImageFixtures};

    /// Tests the selection-boundary prefilter that keeps non-images out of
    /// the draft
    #[test]
    fn test_prefilter_blocks_invalid_files() {
        assert!(ImageFixtures::jpeg("ok.jpg").is_valid_image());
        assert!(!ImageFixtures::rejected_pdf().is_valid_image());
    }

    /// Tests that typed ids round-trip through their display strings
    #[test]
    fn test_typed_ids_round_trip() {
        let id = IdFixtures::claim_id();
        let parsed: core_kernel::ClaimId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!(IdFixtures::user_id().to_string().starts_with("USR-"));
    }
}

mod session_flow {
    use super::*;

    /// Tests that invalid form input blocks the login action locally
    #[test]
    fn test_login_form_blocks_before_network() {
        let form = LoginForm {
            email: "not-an-email".to_string(),
            password: String::new(),
        };
        let validation = form.validate();
        assert!(!validation.is_valid());
        assert_eq!(
            validation.error_for("email"),
            Some("Please enter a valid email")
        );
        assert_eq!(validation.error_for("password"), Some("Password is required"));
    }

    /// Tests login persisting the session and logout clearing it
    #[tokio::test]
    async fn test_login_logout_lifecycle() {
        init_tracing();
        let store = SessionStore::in_memory();
        let user = UserBuilder::new()
            .with_name("Jordan Avery")
            .with_email("jordan@example.com")
            .with_role(UserRole::Owner)
            .build();
        let auth = MockAuthClient::new(store.clone(), user, "tok-123");

        assert!(!store.is_authenticated());

        let credentials = Credentials {
            email: "jordan@example.com".to_string(),
            password: "sunlit6".to_string(),
        };
        let session = auth.login(&credentials).await.unwrap();
        assert_eq!(session.token, "tok-123");
        assert!(store.is_authenticated());
        assert_eq!(
            store.user().unwrap().unwrap().email,
            "jordan@example.com"
        );

        auth.logout().await.unwrap();
        assert!(!store.is_authenticated());
        assert!(store.session().unwrap().is_none());
    }

    /// Tests that a failed login leaves the store logged out
    #[tokio::test]
    async fn test_failed_login_stores_nothing() {
        init_tracing();
        let store = SessionStore::in_memory();
        let user = UserBuilder::new().build();
        let auth = MockAuthClient::new(store.clone(), user, "tok-123");
        auth.fail_next(TransportError::api(401, "Invalid email or password"));

        let credentials = Credentials {
            email: "jordan@example.com".to_string(),
            password: "wrong".to_string(),
        };
        let error = auth.login(&credentials).await.unwrap_err();
        assert_eq!(error.detail(), Some("Invalid email or password"));
        assert!(!store.is_authenticated());
    }
}

mod dashboard_flow {
    use super::*;
    use domain_claims::ClaimsPort;

    /// Tests list filtering, stats, and the notification badge together
    #[tokio::test]
    async fn test_claim_list_drives_stats_and_notifications() {
        init_tracing();
        let claims = Arc::new(MockClaimsClient::new());
        claims.seed_claims(vec![
            ClaimBuilder::new().with_id("c-1").build(),
            ClaimBuilder::new()
                .with_id("c-2")
                .resolved(ClaimStatus::Approved)
                .build(),
            ClaimBuilder::new()
                .with_id("c-3")
                .resolved(ClaimStatus::Rejected)
                .build(),
        ]);

        let all = claims.list_claims(ClaimQuery::default()).await.unwrap();
        assert_eq!(all.len(), 3);

        let approved = claims
            .list_claims(ClaimQuery::by_status(ClaimStatus::Approved))
            .await
            .unwrap();
        assert_eq!(approved.len(), 1);

        let stats = DashboardStats::from_claims(&all);
        assert_eq!(stats.total_claims, 3);
        assert_eq!(stats.pending_claims, 1);
        assert_eq!(stats.approved_claims, 1);
        assert_eq!(stats.rejected_claims, 1);
        // both resolved claims took exactly two days
        assert!((stats.average_processing_days - 2.0).abs() < 1e-9);

        let mut notifications: Vec<Notification> = all
            .iter()
            .filter(|claim| claim.is_resolved())
            .map(Notification::for_status_change)
            .collect();
        assert_eq!(unread_count(&notifications), 2);
        assert_eq!(notifications[0].kind, NotificationKind::ClaimApproved);
        notifications[0].mark_read();
        assert_eq!(unread_count(&notifications), 1);
    }

    /// Tests the update/delete round trip through the port
    #[tokio::test]
    async fn test_update_and_delete_claim() {
        init_tracing();
        let claims = MockClaimsClient::new();
        claims.seed_claims(vec![ClaimBuilder::new().with_id("c-1").build()]);

        let patch = domain_claims::UpdateClaimRequest {
            status: Some(ClaimStatus::InfoRequested),
            damage_type: Some(DamageType::Minor),
            description: None,
        };
        let updated = claims.update_claim("c-1", patch).await.unwrap();
        assert_eq!(updated.status, ClaimStatus::InfoRequested);
        assert_eq!(updated.damage_type, Some(DamageType::Minor));

        claims.delete_claim("c-1").await.unwrap();
        let error = claims.get_claim("c-1").await.unwrap_err();
        assert!(error.detail().unwrap().contains("c-1"));
    }
}
