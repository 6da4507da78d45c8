use chrono::{DateTime, Utc};
use complaint_desk_db::models::complaint::category::serialize_category;
use complaint_desk_db::models::complaint::{
    ComplaintCategory, ComplaintId, ComplaintStatus, StatusCounts, UpdateModel,
};
use serde::Serialize;
use uuid::Uuid;

const SECONDS_PER_DAY: i64 = 86_400;

/// What a caller is allowed to see of one complaint
///
/// Built only by the access policy. For non-staff viewers `updates` holds
/// public entries only and `assigned_to` is always `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintView {
    pub id: ComplaintId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(serialize_with = "serialize_category")]
    pub category: ComplaintCategory,
    pub subject: String,
    pub description: String,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub updates: Vec<UpdateView>,
}

impl ComplaintView {
    /// Whole days since submission, rounded up; zero for future timestamps
    pub fn days_open(&self, now: DateTime<Utc>) -> i64 {
        let seconds = (now - self.created_at).num_seconds();
        if seconds <= 0 {
            return 0;
        }
        (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
    }

    /// The most recent visible update, if any
    pub fn latest_update(&self) -> Option<&UpdateView> {
        self.updates.last()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateView {
    pub id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_internal: bool,
}

impl From<&UpdateModel> for UpdateView {
    fn from(update: &UpdateModel) -> Self {
        Self {
            id: update.id,
            message: update.message.clone(),
            created_at: update.created_at,
            is_internal: update.is_internal,
        }
    }
}

/// Returned to the submitter; the identifier is all they need to track
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub id: ComplaintId,
}

/// Ticket totals shown on the staff dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total: usize,
    pub received: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl From<StatusCounts> for DashboardSummary {
    fn from(counts: StatusCounts) -> Self {
        Self {
            total: counts.total(),
            received: counts.received,
            in_progress: counts.in_progress,
            resolved: counts.resolved,
        }
    }
}
