use complaint_desk_db::models::complaint::NewUpdate;
use complaint_desk_db::repository::complaint_store::ComplaintStore;
use tracing::info;

use super::{parse_id, TicketWorkflowService};
use crate::domain::role::{Capability, Viewer};
use crate::domain::staff_action::NoteDraft;
use crate::domain::view::UpdateView;
use crate::error::DeskResult;
use crate::policy::AccessPolicy;

impl<S: ComplaintStore> TicketWorkflowService<S> {
    pub(super) async fn add_update_impl(
        &self,
        viewer: Viewer,
        id: &str,
        note: NoteDraft,
    ) -> DeskResult<UpdateView> {
        let capability = if note.is_internal {
            Capability::AppendInternalNote
        } else {
            Capability::AppendPublicUpdate
        };
        AccessPolicy::require(viewer.role, capability)?;

        let note = NewUpdate::new(&note.message, note.is_internal)?;
        let id = parse_id(id)?;
        let update = self.store.append(id.clone(), note).await?;
        info!(
            complaint_id = %id,
            role = %viewer.role,
            is_internal = update.is_internal,
            "update added"
        );

        if update.is_public() {
            if let Some(complaint) = self.store.find_by_id(id).await? {
                self.notify(&complaint, &update).await;
            }
        }

        Ok(UpdateView::from(&update))
    }
}
