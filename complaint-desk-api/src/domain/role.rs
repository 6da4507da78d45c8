use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller role as reported by the identity provider
///
/// Staff is a superset of user, which is a superset of anonymous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Anonymous,
    User,
    Staff,
}

impl Role {
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Staff)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Anonymous => "anonymous",
            Role::User => "user",
            Role::Staff => "staff",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request identity: who is calling and with which role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewer {
    /// `None` for anonymous callers.
    pub user_id: Option<Uuid>,
    pub role: Role,
}

impl Viewer {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            role: Role::User,
        }
    }

    pub fn staff(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            role: Role::Staff,
        }
    }
}

/// Actions and visibility rights checked by the access policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    TrackComplaint,
    AppendPublicUpdate,
    AppendInternalNote,
    ChangeStatus,
    Assign,
    ViewInternalUpdates,
    ViewAssignment,
    /// Dashboard listing, staff ticket detail and summary counts
    ManageTickets,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::TrackComplaint => "track complaints",
            Capability::AppendPublicUpdate => "append public updates",
            Capability::AppendInternalNote => "append internal notes",
            Capability::ChangeStatus => "change status",
            Capability::Assign => "assign tickets",
            Capability::ViewInternalUpdates => "view internal updates",
            Capability::ViewAssignment => "view assignment",
            Capability::ManageTickets => "manage tickets",
        }
    }
}
