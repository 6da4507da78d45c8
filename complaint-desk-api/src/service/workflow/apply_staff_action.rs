use complaint_desk_db::models::complaint::{
    ChangeSet, ComplaintPatch, ComplaintStatus, NewUpdate,
};
use complaint_desk_db::repository::complaint_store::ComplaintStore;
use complaint_desk_db::repository::error::{RepositoryError, RepositoryResult};
use tracing::{info, warn};
use validator::Validate;

use super::{parse_id, TicketWorkflowService};
use crate::domain::role::{Capability, Viewer};
use crate::domain::staff_action::StaffAction;
use crate::domain::view::ComplaintView;
use crate::error::{DeskError, DeskResult};
use crate::policy::AccessPolicy;

impl<S: ComplaintStore> TicketWorkflowService<S> {
    pub(super) async fn apply_staff_action_impl(
        &self,
        viewer: Viewer,
        id: &str,
        action: StaffAction,
    ) -> DeskResult<ComplaintView> {
        AccessPolicy::require(viewer.role, Capability::ManageTickets)?;
        if action.status.is_some() {
            AccessPolicy::require(viewer.role, Capability::ChangeStatus)?;
        }
        if action.assigned_to.is_some() {
            AccessPolicy::require(viewer.role, Capability::Assign)?;
        }
        if action.note.as_ref().is_some_and(|note| note.is_internal) {
            AccessPolicy::require(viewer.role, Capability::AppendInternalNote)?;
        }

        let status = action
            .status
            .as_deref()
            .map(str::parse::<ComplaintStatus>)
            .transpose()?;

        let change_set = build_change_set(status, &action)?;

        if change_set.is_empty() {
            let complaint = self.load(id).await?;
            return Ok(AccessPolicy::filter_for_viewer(&complaint, viewer.role));
        }

        let applied = self.store.apply(parse_id(id)?, change_set).await?;
        let complaint = &applied.complaint;
        let transition = applied.previous_status.transition_to(complaint.status);

        if applied.previous_status.is_reopen(complaint.status) {
            warn!(
                complaint_id = %complaint.id,
                from = applied.previous_status.as_str(),
                to = complaint.status.as_str(),
                ?transition,
                "resolved ticket re-opened"
            );
        }
        info!(
            complaint_id = %complaint.id,
            status = complaint.status.as_str(),
            ?transition,
            role = %viewer.role,
            changed = applied.changed,
            "staff action applied"
        );

        if let Some(update) = &applied.appended {
            self.notify(complaint, update).await;
        }

        Ok(AccessPolicy::filter_for_viewer(complaint, viewer.role))
    }
}

/// Validate the assignee and note together so every bad field is reported at once
fn build_change_set(status: Option<ComplaintStatus>, action: &StaffAction) -> DeskResult<ChangeSet> {
    let mut invalid = Vec::new();
    if let Err(errors) = action.validate() {
        invalid.extend(errors.field_errors().into_keys().map(|field| field.to_string()));
    }

    let assigned_to = collect_invalid(
        action.assigned_to.as_deref().map(ComplaintPatch::assignee).transpose(),
        &mut invalid,
    )?;
    let note = collect_invalid(
        action
            .note
            .as_ref()
            .map(|note| NewUpdate::new(&note.message, note.is_internal))
            .transpose(),
        &mut invalid,
    )?;

    if !invalid.is_empty() {
        return Err(DeskError::validation(invalid));
    }

    Ok(ChangeSet {
        patch: ComplaintPatch {
            status,
            assigned_to: assigned_to.flatten(),
        },
        note: note.flatten(),
    })
}

fn collect_invalid<T>(result: RepositoryResult<T>, invalid: &mut Vec<String>) -> DeskResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(RepositoryError::Validation(fields)) => {
            invalid.extend(fields);
            Ok(None)
        }
        Err(error) => Err(error.into()),
    }
}
