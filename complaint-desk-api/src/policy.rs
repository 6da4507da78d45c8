use complaint_desk_db::models::complaint::ComplaintModel;

use crate::domain::role::{Capability, Role};
use crate::domain::view::{ComplaintView, UpdateView};
use crate::error::{DeskError, DeskResult};

/// Single place deciding what each role may see and do
pub struct AccessPolicy;

impl AccessPolicy {
    pub fn allows(role: Role, capability: Capability) -> bool {
        match capability {
            Capability::TrackComplaint | Capability::AppendPublicUpdate => true,
            Capability::AppendInternalNote
            | Capability::ChangeStatus
            | Capability::Assign
            | Capability::ViewInternalUpdates
            | Capability::ViewAssignment
            | Capability::ManageTickets => role.is_staff(),
        }
    }

    /// Turn a denied capability into [`DeskError::Forbidden`]
    pub fn require(role: Role, capability: Capability) -> DeskResult<()> {
        if Self::allows(role, capability) {
            Ok(())
        } else {
            Err(DeskError::Forbidden(format!(
                "role {role} may not {}",
                capability.as_str()
            )))
        }
    }

    /// Project a complaint onto what `role` is allowed to observe
    pub fn filter_for_viewer(complaint: &ComplaintModel, role: Role) -> ComplaintView {
        let show_internal = Self::allows(role, Capability::ViewInternalUpdates);
        let show_assignment = Self::allows(role, Capability::ViewAssignment);

        ComplaintView {
            id: complaint.id.clone(),
            name: complaint.name.to_string(),
            email: complaint.email.to_string(),
            phone: complaint.phone.as_ref().map(|phone| phone.to_string()),
            category: complaint.category,
            subject: complaint.subject.to_string(),
            description: complaint.description.clone(),
            status: complaint.status,
            created_at: complaint.created_at,
            updated_at: complaint.updated_at,
            assigned_to: complaint
                .assigned_to
                .as_ref()
                .filter(|_| show_assignment)
                .map(|team| team.to_string()),
            updates: complaint
                .updates
                .iter()
                .filter(|update| show_internal || update.is_public())
                .map(UpdateView::from)
                .collect(),
        }
    }
}
