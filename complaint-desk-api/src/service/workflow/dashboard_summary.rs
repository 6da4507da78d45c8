use complaint_desk_db::repository::complaint_store::ComplaintStore;

use super::TicketWorkflowService;
use crate::domain::role::{Capability, Viewer};
use crate::domain::view::DashboardSummary;
use crate::error::DeskResult;
use crate::policy::AccessPolicy;

impl<S: ComplaintStore> TicketWorkflowService<S> {
    pub(super) async fn dashboard_summary_impl(&self, viewer: Viewer) -> DeskResult<DashboardSummary> {
        AccessPolicy::require(viewer.role, Capability::ManageTickets)?;
        Ok(self.store.count_by_status().await?.into())
    }
}
