use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Byte capacity of a stored assignee
const ASSIGNEE_CAPACITY: usize = 100;

/// A staff member's edit of one ticket
///
/// Every part is optional; whatever is present is applied together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffAction {
    /// Raw status string, parsed when the action is applied
    pub status: Option<String>,

    #[validate(custom(function = "assignee_fits"))]
    pub assigned_to: Option<String>,

    pub note: Option<NoteDraft>,
}

fn assignee_fits(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || value.len() > ASSIGNEE_CAPACITY {
        return Err(ValidationError::new("assignee"));
    }
    Ok(())
}

impl StaffAction {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.assigned_to.is_none() && self.note.is_none()
    }

    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }

    pub fn with_note(mut self, note: NoteDraft) -> Self {
        self.note = Some(note);
        self
    }

    pub fn with_assignee(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = Some(assigned_to.into());
        self
    }
}

/// Message to append to a ticket's update log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDraft {
    /// Trimmed on append; must not be blank
    pub message: String,

    #[serde(default)]
    pub is_internal: bool,
}

impl NoteDraft {
    pub fn public(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_internal: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_internal: true,
        }
    }
}
