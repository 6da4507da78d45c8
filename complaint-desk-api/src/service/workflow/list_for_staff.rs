use complaint_desk_db::repository::complaint_store::ComplaintStore;
use complaint_desk_db::repository::list_complaints::ComplaintFilter;
use complaint_desk_db::repository::pagination::{Page, PageRequest};

use super::TicketWorkflowService;
use crate::domain::role::{Capability, Viewer};
use crate::domain::view::ComplaintView;
use crate::error::DeskResult;
use crate::policy::AccessPolicy;

impl<S: ComplaintStore> TicketWorkflowService<S> {
    pub(super) async fn list_for_staff_impl(
        &self,
        viewer: Viewer,
        filter: ComplaintFilter,
        page: Option<PageRequest>,
    ) -> DeskResult<Page<ComplaintView>> {
        AccessPolicy::require(viewer.role, Capability::ManageTickets)?;
        let page = page.unwrap_or_else(|| PageRequest::new(self.config.default_page_size, 0));
        let complaints = self.store.list(filter, page).await?;
        Ok(complaints.map(|complaint| AccessPolicy::filter_for_viewer(&complaint, viewer.role)))
    }
}
