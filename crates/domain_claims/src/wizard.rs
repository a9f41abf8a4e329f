//! Claim submission wizard
//!
//! A four-step linear state machine over a [`DraftClaim`]. The pure machine
//! ([`WizardState`]) owns step ordering, per-step validity gating, and the
//! single-submission guard; [`ClaimWizard`] layers the one outbound
//! create-claim call on top via [`ClaimsPort`].
//!
//! Execution is single-threaded and event-driven. The only suspension point
//! is the create-claim call; while it is in flight `is_submitting` blocks
//! re-entrant Next/Submit dispatches, which is the sole concurrency guard
//! against duplicate claim creation. There is no cancellation and no retry;
//! a failed submission leaves the wizard on the review step for the user to
//! retry or go back and correct data.

use std::sync::Arc;

use tracing::{debug, info, warn};

use core_kernel::validation::is_required;

use crate::draft::{DraftClaim, ImageAttachment};
use crate::model::Claim;
use crate::ports::{ClaimsPort, CreateClaimRequest};

const SUBMIT_FALLBACK_MESSAGE: &str = "Failed to submit claim. Please try again.";

/// One screen of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    BasicInfo,
    UploadPhotos,
    DamageType,
    Review,
}

impl WizardStep {
    /// All steps in order
    pub const ALL: [WizardStep; 4] = [
        WizardStep::BasicInfo,
        WizardStep::UploadPhotos,
        WizardStep::DamageType,
        WizardStep::Review,
    ];

    /// Zero-based position of the step
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Title shown in the progress stepper
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Info",
            WizardStep::UploadPhotos => "Upload Photos",
            WizardStep::DamageType => "Damage Type",
            WizardStep::Review => "Review",
        }
    }

    fn next(&self) -> Option<WizardStep> {
        WizardStep::ALL.get(self.index() + 1).copied()
    }

    fn prev(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| WizardStep::ALL[i])
    }
}

/// Validity predicate gating forward movement out of a step
///
/// The review step is always valid; submission itself may still fail.
pub fn step_is_valid(step: WizardStep, draft: &DraftClaim) -> bool {
    match step {
        WizardStep::BasicInfo => {
            is_required(&draft.vehicle_make)
                && is_required(&draft.vehicle_model)
                && draft.parsed_year().is_some()
                && is_required(&draft.incident_date)
                && is_required(&draft.location)
        }
        WizardStep::UploadPhotos => !draft.images().is_empty(),
        WizardStep::DamageType => draft.damage_type.is_some(),
        WizardStep::Review => true,
    }
}

/// Result of a forward transition attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The current step is invalid or a submission is in flight
    Blocked,
    /// Moved to the next step
    Moved(WizardStep),
    /// Already on review with a valid draft; the caller should submit
    ReadyToSubmit,
}

/// The pure wizard state machine
///
/// Independent of any rendering framework and any transport; transitions are
/// synchronous functions over in-memory state, so the machine is fully
/// unit-testable on its own.
#[derive(Debug, Clone)]
pub struct WizardState {
    step: WizardStep,
    draft: DraftClaim,
    is_submitting: bool,
    submission_error: Option<String>,
}

impl WizardState {
    /// Creates the initial state: first step, empty draft
    pub fn new() -> Self {
        Self::with_draft(DraftClaim::new())
    }

    /// Creates the initial state over a pre-populated draft
    pub fn with_draft(draft: DraftClaim) -> Self {
        Self {
            step: WizardStep::BasicInfo,
            draft,
            is_submitting: false,
            submission_error: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &DraftClaim {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftClaim {
        &mut self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn submission_error(&self) -> Option<&str> {
        self.submission_error.as_deref()
    }

    /// Returns true if the current step passes its validity predicate
    pub fn current_step_is_valid(&self) -> bool {
        step_is_valid(self.step, &self.draft)
    }

    /// Attempts to move forward by exactly one step
    pub fn advance(&mut self) -> Advance {
        if self.is_submitting || !self.current_step_is_valid() {
            return Advance::Blocked;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                Advance::Moved(next)
            }
            None => Advance::ReadyToSubmit,
        }
    }

    /// Moves back by exactly one step, never below the first
    ///
    /// Always allowed regardless of validity and never touches the draft;
    /// data collected in later steps is kept. Returns false when already on
    /// the first step.
    pub fn retreat(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Marks a submission as in flight and clears the previous error
    ///
    /// Returns false when a submission is already in flight; the caller must
    /// not issue a second create-claim call in that case.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        self.is_submitting = true;
        self.submission_error = None;
        true
    }

    /// Records a failed submission, staying on the review step
    pub fn fail_submit(&mut self, message: impl Into<String>) {
        self.submission_error = Some(message.into());
        self.is_submitting = false;
    }

    /// Unwinds an in-flight marker without recording an inline error
    ///
    /// Used for auth-class failures, which redirect instead of rendering a
    /// message.
    pub fn abort_submit(&mut self) {
        self.is_submitting = false;
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of dispatching a Next action
#[derive(Debug)]
pub enum WizardOutcome {
    /// Still collecting input, or a recoverable submission failure
    /// (inspect [`ClaimWizard::submission_error`])
    InProgress,
    /// The backend accepted the claim; the wizard is finished and should be
    /// discarded
    Submitted(Claim),
    /// The session is missing or expired; the caller should return to the
    /// login screen
    Unauthenticated,
}

/// The submission wizard: pure state machine plus the one outbound call
pub struct ClaimWizard {
    state: WizardState,
    claimant_name: String,
    claims: Arc<dyn ClaimsPort>,
}

impl ClaimWizard {
    /// Opens a wizard for the named claimant
    pub fn new(claimant_name: impl Into<String>, claims: Arc<dyn ClaimsPort>) -> Self {
        Self {
            state: WizardState::new(),
            claimant_name: claimant_name.into(),
            claims,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.state.step()
    }

    pub fn draft(&self) -> &DraftClaim {
        self.state.draft()
    }

    pub fn draft_mut(&mut self) -> &mut DraftClaim {
        self.state.draft_mut()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn submission_error(&self) -> Option<&str> {
        self.state.submission_error()
    }

    /// Returns true if the Next action would be accepted
    pub fn can_advance(&self) -> bool {
        !self.state.is_submitting() && self.state.current_step_is_valid()
    }

    /// Appends photos on the upload step; overflow past the cap is dropped
    pub fn add_images(&mut self, files: impl IntoIterator<Item = ImageAttachment>) -> usize {
        self.state.draft_mut().add_images(files)
    }

    /// Removes the photo at `index`; out-of-range is a no-op
    pub fn remove_image(&mut self, index: usize) {
        self.state.draft_mut().remove_image(index);
    }

    /// Dispatches a Back action
    pub fn back(&mut self) {
        self.state.retreat();
    }

    /// Dispatches a Next action
    ///
    /// Validates the current step and either moves forward or, from the
    /// review step, performs the submission. Exactly one create-claim call is
    /// issued per accepted confirmation.
    pub async fn next(&mut self) -> WizardOutcome {
        match self.state.advance() {
            Advance::Blocked | Advance::Moved(_) => WizardOutcome::InProgress,
            Advance::ReadyToSubmit => self.submit().await,
        }
    }

    async fn submit(&mut self) -> WizardOutcome {
        if !self.state.begin_submit() {
            return WizardOutcome::InProgress;
        }

        let request = CreateClaimRequest::from_draft(self.state.draft(), &self.claimant_name);
        debug!(
            images = request.images.len(),
            make = %request.vehicle_make,
            model = %request.vehicle_model,
            year = request.vehicle_year,
            "submitting claim"
        );

        match self.claims.create_claim(request).await {
            Ok(claim) => {
                info!(claim_number = %claim.claim_number, "claim submitted");
                WizardOutcome::Submitted(claim)
            }
            Err(err) if err.is_auth() => {
                warn!("claim submission rejected: session missing or expired");
                self.state.abort_submit();
                WizardOutcome::Unauthenticated
            }
            Err(err) => {
                warn!(error = %err, "claim submission failed");
                let message = err
                    .detail()
                    .map(str::to_owned)
                    .unwrap_or_else(|| SUBMIT_FALLBACK_MESSAGE.to_string());
                self.state.fail_submit(message);
                WizardOutcome::InProgress
            }
        }
    }
}
