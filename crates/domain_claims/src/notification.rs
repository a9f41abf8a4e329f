//! Claim notifications shown in the notifications list

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::NotificationId;

use crate::model::{Claim, ClaimStatus};

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ClaimSubmitted,
    ClaimApproved,
    ClaimRejected,
    InfoRequested,
    ClaimUpdated,
}

/// A notification entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Backend id of the related claim, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_id: Option<String>,
    pub read: bool,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    /// Creates an unread notification
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new_v7(),
            kind,
            title: title.into(),
            message: message.into(),
            claim_id: None,
            read: false,
            timestamp: Utc::now(),
        }
    }

    /// Builds the notification for a claim's current status
    pub fn for_status_change(claim: &Claim) -> Self {
        let (kind, title) = match claim.status {
            ClaimStatus::Pending => (NotificationKind::ClaimSubmitted, "Claim Submitted"),
            ClaimStatus::Approved => (NotificationKind::ClaimApproved, "Claim Approved"),
            ClaimStatus::Rejected => (NotificationKind::ClaimRejected, "Claim Rejected"),
            ClaimStatus::InfoRequested => {
                (NotificationKind::InfoRequested, "Information Requested")
            }
        };
        let message = format!("Claim {} is now {}.", claim.claim_number, claim.status.label());
        let mut notification = Self::new(kind, title, message);
        notification.claim_id = Some(claim.id.clone());
        notification
    }

    /// Marks the notification as read
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

/// Number of unread notifications, shown as the badge count
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}
