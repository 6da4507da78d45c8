pub mod workflow;

pub use workflow::TicketWorkflowService;

use async_trait::async_trait;
use complaint_desk_db::models::complaint::ComplaintFields;
use complaint_desk_db::repository::list_complaints::ComplaintFilter;
use complaint_desk_db::repository::pagination::{Page, PageRequest};

use crate::domain::role::Viewer;
use crate::domain::staff_action::{NoteDraft, StaffAction};
use crate::domain::view::{ComplaintView, DashboardSummary, SubmissionReceipt, UpdateView};
use crate::error::DeskResult;

/// Operations offered to the UI layer
///
/// Every call either returns plain data or a typed [`crate::DeskError`].
/// Identifiers are accepted as raw strings and normalized (trimmed,
/// uppercased); a string that is not a well-formed identifier is reported as
/// `NotFound`, exactly like an unknown one.
///
/// # Example
/// ```ignore
/// let receipt = service.submit(fields).await?;
/// let view = service.track(receipt.id.as_str()).await?;
/// assert_eq!(view.status, ComplaintStatus::Received);
/// ```
#[async_trait]
pub trait TicketService: Send + Sync {
    /// Submit a new complaint
    ///
    /// # Arguments
    /// * `fields` - The raw form fields
    ///
    /// # Returns
    /// * `Ok(SubmissionReceipt)` - The identifier of the new complaint
    /// * `Err(DeskError::ValidationError)` - Listing every offending field
    async fn submit(&self, fields: ComplaintFields) -> DeskResult<SubmissionReceipt>;

    /// Look up a complaint by identifier with customer visibility
    ///
    /// Reachable anonymously. Internal updates and the assignee are never
    /// included.
    ///
    /// # Returns
    /// * `Ok(ComplaintView)` - The public view
    /// * `Err(DeskError::NotFound)` - If the identifier is malformed or unknown
    async fn track(&self, id: &str) -> DeskResult<ComplaintView>;

    /// Full view of one ticket for the staff ticket page
    ///
    /// # Returns
    /// * `Err(DeskError::Forbidden)` - If the viewer is not staff
    /// * `Err(DeskError::NotFound)` - If the identifier is malformed or unknown
    async fn ticket_for_staff(&self, viewer: Viewer, id: &str) -> DeskResult<ComplaintView>;

    /// Dashboard listing, most recent first
    ///
    /// # Arguments
    /// * `viewer` - Must be staff
    /// * `filter` - Status, category and assignee criteria
    /// * `page` - Pagination; `None` uses the configured default page size
    async fn list_for_staff(
        &self,
        viewer: Viewer,
        filter: ComplaintFilter,
        page: Option<PageRequest>,
    ) -> DeskResult<Page<ComplaintView>>;

    /// Apply a status change, an assignment and a note as one unit
    ///
    /// Checks run in this order: role (`Forbidden`), status value
    /// (`InvalidStatus`), assignee and note (`ValidationError`), then the
    /// store (`NotFound`). Either every part is applied or none is.
    ///
    /// # Returns
    /// * `Ok(ComplaintView)` - The staff view after the change
    async fn apply_staff_action(
        &self,
        viewer: Viewer,
        id: &str,
        action: StaffAction,
    ) -> DeskResult<ComplaintView>;

    /// Append one entry to a ticket's update log
    ///
    /// Public entries are open to every role; internal notes require staff.
    ///
    /// # Returns
    /// * `Ok(UpdateView)` - The stored entry
    /// * `Err(DeskError::ValidationError)` - If the message is blank
    async fn add_update(&self, viewer: Viewer, id: &str, note: NoteDraft) -> DeskResult<UpdateView>;

    /// Per-status ticket totals; staff only
    async fn dashboard_summary(&self, viewer: Viewer) -> DeskResult<DashboardSummary>;
}
