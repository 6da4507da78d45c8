use complaint_desk_db::repository::complaint_store::ComplaintStore;

use super::TicketWorkflowService;
use crate::domain::role::{Capability, Role, Viewer};
use crate::domain::view::ComplaintView;
use crate::error::DeskResult;
use crate::policy::AccessPolicy;

impl<S: ComplaintStore> TicketWorkflowService<S> {
    pub(super) async fn track_impl(&self, id: &str) -> DeskResult<ComplaintView> {
        let complaint = self.load(id).await?;
        Ok(AccessPolicy::filter_for_viewer(&complaint, Role::Anonymous))
    }

    pub(super) async fn ticket_for_staff_impl(&self, viewer: Viewer, id: &str) -> DeskResult<ComplaintView> {
        AccessPolicy::require(viewer.role, Capability::ManageTickets)?;
        let complaint = self.load(id).await?;
        Ok(AccessPolicy::filter_for_viewer(&complaint, viewer.role))
    }
}
