//! Dashboard aggregates derived from the claim list
//!
//! The backend has no stats endpoint; the dashboard computes its counters
//! from the claims it already fetched.

use crate::model::Claim;

/// Aggregate counters for the dashboard header
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardStats {
    pub total_claims: usize,
    pub approved_claims: usize,
    pub pending_claims: usize,
    pub rejected_claims: usize,
    /// Mean days from creation to resolution over resolved claims;
    /// 0 when nothing is resolved yet
    pub average_processing_days: f64,
}

impl DashboardStats {
    /// Computes the aggregates over a fetched claim list
    pub fn from_claims(claims: &[Claim]) -> Self {
        use crate::model::ClaimStatus::*;

        let mut stats = DashboardStats {
            total_claims: claims.len(),
            ..Default::default()
        };

        let mut resolved_seconds = 0_i64;
        let mut resolved = 0_usize;
        for claim in claims {
            match claim.status {
                Approved => stats.approved_claims += 1,
                Pending => stats.pending_claims += 1,
                Rejected => stats.rejected_claims += 1,
                InfoRequested => {}
            }
            if claim.is_resolved() {
                resolved_seconds += (claim.updated_at - claim.created_at).num_seconds();
                resolved += 1;
            }
        }

        if resolved > 0 {
            stats.average_processing_days =
                resolved_seconds as f64 / resolved as f64 / 86_400.0;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClaimStatus, VehicleInfo};
    use chrono::{Duration, TimeZone, Utc};

    fn claim(status: ClaimStatus, processing_days: i64) -> Claim {
        let created_at = Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0).unwrap();
        Claim {
            id: "c-1".to_string(),
            claim_number: "CLM-20241001-TEST".to_string(),
            claimant_id: "u-1".to_string(),
            claimant_name: "Jordan Avery".to_string(),
            vehicle_info: VehicleInfo {
                make: "Ford".to_string(),
                model: "Mustang".to_string(),
                year: 2021,
                vin: None,
            },
            incident_date: "2024-09-28".to_string(),
            location: "Austin, TX".to_string(),
            description: String::new(),
            images: vec![],
            status,
            damage_type: None,
            ai_analysis: None,
            policy_number: "POL-1".to_string(),
            policy_type: "Comprehensive".to_string(),
            created_at,
            updated_at: created_at + Duration::days(processing_days),
            comments: vec![],
        }
    }

    #[test]
    fn test_counts_by_status() {
        let claims = [
            claim(ClaimStatus::Pending, 0),
            claim(ClaimStatus::Pending, 0),
            claim(ClaimStatus::Approved, 2),
            claim(ClaimStatus::Rejected, 4),
            claim(ClaimStatus::InfoRequested, 0),
        ];
        let stats = DashboardStats::from_claims(&claims);
        assert_eq!(stats.total_claims, 5);
        assert_eq!(stats.pending_claims, 2);
        assert_eq!(stats.approved_claims, 1);
        assert_eq!(stats.rejected_claims, 1);
    }

    #[test]
    fn test_average_processing_days_over_resolved_only() {
        let claims = [
            claim(ClaimStatus::Approved, 2),
            claim(ClaimStatus::Rejected, 4),
            claim(ClaimStatus::Pending, 30),
        ];
        let stats = DashboardStats::from_claims(&claims);
        assert!((stats.average_processing_days - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_list() {
        let stats = DashboardStats::from_claims(&[]);
        assert_eq!(stats, DashboardStats::default());
    }
}
