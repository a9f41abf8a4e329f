//! Claim wire model
//!
//! These types mirror the backend's claim payloads. The client reads and
//! displays them; every state change goes back through the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ClaimError;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    /// Submitted, awaiting review
    Pending,
    /// Approved for payout
    Approved,
    /// Rejected
    Rejected,
    /// Reviewer asked the claimant for more information
    InfoRequested,
}

impl ClaimStatus {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending Review",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
            ClaimStatus::InfoRequested => "Information Requested",
        }
    }

    /// Wire representation, also used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::InfoRequested => "info_requested",
        }
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ClaimStatus::Pending),
            "approved" => Ok(ClaimStatus::Approved),
            "rejected" => Ok(ClaimStatus::Rejected),
            "info_requested" => Ok(ClaimStatus::InfoRequested),
            other => Err(ClaimError::UnknownStatus(other.to_string())),
        }
    }
}

/// Severity of vehicle damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    None,
    Minor,
    Moderate,
    Severe,
}

impl DamageType {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            DamageType::None => "No Damage",
            DamageType::Minor => "Minor Damage",
            DamageType::Moderate => "Moderate Damage",
            DamageType::Severe => "Severe Damage",
        }
    }

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DamageType::None => "none",
            DamageType::Minor => "minor",
            DamageType::Moderate => "moderate",
            DamageType::Severe => "severe",
        }
    }
}

impl FromStr for DamageType {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(DamageType::None),
            "minor" => Ok(DamageType::Minor),
            "moderate" => Ok(DamageType::Moderate),
            "severe" => Ok(DamageType::Severe),
            other => Err(ClaimError::UnknownDamageType(other.to_string())),
        }
    }
}

/// Fraud risk level assigned by the backend analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudRisk {
    Low,
    Medium,
    High,
}

/// Vehicle details attached to a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInfo {
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
}

/// Cross-checks performed by the backend against claim metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationChecks {
    pub gps_match: bool,
    pub time_match: bool,
    pub vin_match: bool,
}

/// Backend analysis of the submitted damage photos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub damage_severity: DamageType,
    pub fraud_risk: FraudRisk,
    /// Model confidence in [0, 1]
    pub confidence_score: f64,
    pub is_real_image: bool,
    pub verification_checks: VerificationChecks,
    /// Estimated repair cost in USD
    pub estimated_cost: f64,
}

/// A reviewer comment on a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A claim as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Backend identifier (opaque to the client)
    pub id: String,
    /// Display number, e.g. "CLM-20241024-1A2B3C4D"
    pub claim_number: String,
    pub claimant_id: String,
    pub claimant_name: String,
    pub vehicle_info: VehicleInfo,
    /// Calendar date of the incident as entered, e.g. "2024-10-24"
    pub incident_date: String,
    pub location: String,
    pub description: String,
    /// Storage paths of the uploaded photos
    pub images: Vec<String>,
    pub status: ClaimStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<DamageType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<AiAnalysis>,
    pub policy_number: String,
    pub policy_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Claim {
    /// Returns true once review has finished, one way or the other
    pub fn is_resolved(&self) -> bool {
        matches!(self.status, ClaimStatus::Approved | ClaimStatus::Rejected)
    }
}
