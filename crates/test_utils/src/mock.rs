//! Mock port implementations
//!
//! In-process stand-ins for the HTTP adapters. `MockClaimsClient` records
//! every create request and replays scripted responses so tests can assert
//! exactly how many calls crossed the transport boundary.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use core_kernel::TransportError;
use domain_claims::{
    Claim, ClaimQuery, ClaimsPort, ClaimStatus, CreateClaimRequest, UpdateClaimRequest,
    VehicleInfo,
};
use domain_session::{AuthPort, Credentials, Session, SessionStore, SignupRequest, User};

/// `ClaimsPort` mock backed by in-memory state
///
/// With nothing scripted, `create_claim` succeeds by echoing the request as
/// a pending claim, and `list_claims` returns the seeded claims.
#[derive(Default)]
pub struct MockClaimsClient {
    create_requests: Mutex<Vec<CreateClaimRequest>>,
    create_responses: Mutex<VecDeque<Result<Claim, TransportError>>>,
    claims: Mutex<Vec<Claim>>,
}

impl MockClaimsClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response for the next `create_claim` call
    pub fn script_create(&self, response: Result<Claim, TransportError>) {
        self.create_responses.lock().unwrap().push_back(response);
    }

    /// Seeds the claims returned by `list_claims`/`get_claim`
    pub fn seed_claims(&self, claims: Vec<Claim>) {
        *self.claims.lock().unwrap() = claims;
    }

    /// Every create request recorded so far
    pub fn create_requests(&self) -> Vec<CreateClaimRequest> {
        self.create_requests.lock().unwrap().clone()
    }

    /// Number of create calls that crossed the boundary
    pub fn create_call_count(&self) -> usize {
        self.create_requests.lock().unwrap().len()
    }

    fn echo(request: &CreateClaimRequest) -> Claim {
        let now = Utc::now();
        Claim {
            id: "claim-1".to_string(),
            claim_number: "CLM-20241024-TEST".to_string(),
            claimant_id: "user-1".to_string(),
            claimant_name: request.claimant_name.clone(),
            vehicle_info: VehicleInfo {
                make: request.vehicle_make.clone(),
                model: request.vehicle_model.clone(),
                year: request.vehicle_year,
                vin: request.vehicle_vin.clone(),
            },
            incident_date: request.incident_date.clone(),
            location: request.location.clone(),
            description: request.description.clone(),
            images: request.images.iter().map(|i| i.file_name.clone()).collect(),
            status: ClaimStatus::Pending,
            damage_type: None,
            ai_analysis: None,
            policy_number: request.policy_number.clone(),
            policy_type: request.policy_type.clone(),
            created_at: now,
            updated_at: now,
            comments: vec![],
        }
    }
}

#[async_trait]
impl ClaimsPort for MockClaimsClient {
    async fn create_claim(&self, request: CreateClaimRequest) -> Result<Claim, TransportError> {
        let scripted = self.create_responses.lock().unwrap().pop_front();
        let response = scripted.unwrap_or_else(|| Ok(Self::echo(&request)));
        self.create_requests.lock().unwrap().push(request);
        if let Ok(claim) = &response {
            self.claims.lock().unwrap().push(claim.clone());
        }
        response
    }

    async fn list_claims(&self, query: ClaimQuery) -> Result<Vec<Claim>, TransportError> {
        let claims = self.claims.lock().unwrap();
        let filtered: Vec<Claim> = claims
            .iter()
            .filter(|claim| query.status.map_or(true, |status| claim.status == status))
            .cloned()
            .collect();
        let offset = query.offset.unwrap_or(0) as usize;
        let limit = query.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        Ok(filtered.into_iter().skip(offset).take(limit).collect())
    }

    async fn get_claim(&self, id: &str) -> Result<Claim, TransportError> {
        self.claims
            .lock()
            .unwrap()
            .iter()
            .find(|claim| claim.id == id)
            .cloned()
            .ok_or_else(|| TransportError::api(404, format!("Claim not found: {id}")))
    }

    async fn update_claim(
        &self,
        id: &str,
        patch: UpdateClaimRequest,
    ) -> Result<Claim, TransportError> {
        let mut claims = self.claims.lock().unwrap();
        let claim = claims
            .iter_mut()
            .find(|claim| claim.id == id)
            .ok_or_else(|| TransportError::api(404, format!("Claim not found: {id}")))?;
        if let Some(status) = patch.status {
            claim.status = status;
        }
        if let Some(damage_type) = patch.damage_type {
            claim.damage_type = Some(damage_type);
        }
        if let Some(description) = patch.description {
            claim.description = description;
        }
        claim.updated_at = Utc::now();
        Ok(claim.clone())
    }

    async fn delete_claim(&self, id: &str) -> Result<(), TransportError> {
        let mut claims = self.claims.lock().unwrap();
        let before = claims.len();
        claims.retain(|claim| claim.id != id);
        if claims.len() == before {
            return Err(TransportError::api(404, format!("Claim not found: {id}")));
        }
        Ok(())
    }
}

/// `AuthPort` mock that persists sessions to a real `SessionStore`
pub struct MockAuthClient {
    store: SessionStore,
    user: User,
    token: String,
    next_failure: Mutex<Option<TransportError>>,
}

impl MockAuthClient {
    /// Accepts any credentials as the given user
    pub fn new(store: SessionStore, user: User, token: impl Into<String>) -> Self {
        Self {
            store,
            user,
            token: token.into(),
            next_failure: Mutex::new(None),
        }
    }

    /// Fails the next auth call with the given error
    pub fn fail_next(&self, error: TransportError) {
        *self.next_failure.lock().unwrap() = Some(error);
    }

    fn take_failure(&self) -> Option<TransportError> {
        self.next_failure.lock().unwrap().take()
    }

    fn persist(&self) -> Result<Session, TransportError> {
        self.store
            .set_session(&self.user, &self.token)
            .map_err(|e| TransportError::storage(e.to_string()))?;
        Ok(Session::new(self.user.clone(), self.token.clone()))
    }
}

#[async_trait]
impl AuthPort for MockAuthClient {
    async fn login(&self, _credentials: &Credentials) -> Result<Session, TransportError> {
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        self.persist()
    }

    async fn signup(&self, _request: &SignupRequest) -> Result<Session, TransportError> {
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        self.persist()
    }

    async fn logout(&self) -> Result<(), TransportError> {
        self.store
            .clear()
            .map_err(|e| TransportError::storage(e.to_string()))
    }

    async fn current_user(&self) -> Result<User, TransportError> {
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        Ok(self.user.clone())
    }
}
