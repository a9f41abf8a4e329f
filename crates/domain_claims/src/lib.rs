//! Claims Domain
//!
//! This crate implements the client side of the claim lifecycle: the claim
//! wire model, the in-progress draft collected by the submission wizard, and
//! the wizard state machine itself.
//!
//! # Submission flow
//!
//! ```text
//! Basic Info -> Upload Photos -> Damage Type -> Review -> Submit
//! ```
//!
//! Each step gates the next behind its validity predicate; the final
//! confirmation issues exactly one create-claim call through [`ClaimsPort`].

pub mod draft;
pub mod error;
pub mod model;
pub mod notification;
pub mod ports;
pub mod stats;
pub mod wizard;

pub use draft::{DraftClaim, ImageAttachment, DEFAULT_MAX_IMAGES};
pub use error::ClaimError;
pub use model::{
    AiAnalysis, Claim, ClaimStatus, Comment, DamageType, FraudRisk, VehicleInfo,
    VerificationChecks,
};
pub use notification::{unread_count, Notification, NotificationKind};
pub use ports::{
    AnalysisPort, ClaimQuery, ClaimsPort, CreateClaimRequest, UpdateClaimRequest,
};
pub use stats::DashboardStats;
pub use wizard::{step_is_valid, Advance, ClaimWizard, WizardOutcome, WizardState, WizardStep};
