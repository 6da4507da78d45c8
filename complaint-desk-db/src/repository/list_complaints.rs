use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::complaint::category::{
    deserialize_optional_category, serialize_optional_category, ComplaintCategory,
};
use crate::models::complaint::{ComplaintModel, ComplaintStatus};
use crate::repository::error::RepositoryResult;
use crate::repository::pagination::{Page, PageRequest};

/// Criteria for listing complaints; unset criteria match everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComplaintFilter {
    pub status: Option<ComplaintStatus>,

    #[serde(
        serialize_with = "serialize_optional_category",
        deserialize_with = "deserialize_optional_category"
    )]
    pub category: Option<ComplaintCategory>,

    /// Exact team or handler name
    pub assigned_to: Option<String>,
}

impl ComplaintFilter {
    pub fn by_status(status: ComplaintStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn matches(&self, complaint: &ComplaintModel) -> bool {
        self.status.map_or(true, |status| complaint.status == status)
            && self.category.map_or(true, |category| complaint.category == category)
            && self.assigned_to.as_deref().map_or(true, |assignee| {
                complaint.assigned_to.as_deref() == Some(assignee.trim())
            })
    }
}

/// Repository trait for listing complaints
///
/// Results are ordered by `created_at` descending (most recent first), ties
/// broken by identifier descending, then paginated.
///
/// # Example
/// ```ignore
/// let page = repo.list(ComplaintFilter::by_status(ComplaintStatus::Received), PageRequest::new(20, 0)).await?;
/// println!("{} of {} open tickets", page.items.len(), page.total);
/// ```
#[async_trait]
pub trait ListComplaints: Send + Sync {
    /// List complaints matching a filter
    ///
    /// # Arguments
    /// * `filter` - The criteria to match
    /// * `page` - The pagination parameters (limit and offset)
    ///
    /// # Returns
    /// * `Ok(Page<ComplaintModel>)` - One page of snapshots with the total match count
    /// * `Err` - An error if the listing could not be executed
    async fn list(
        &self,
        filter: ComplaintFilter,
        page: PageRequest,
    ) -> RepositoryResult<Page<ComplaintModel>>;
}
