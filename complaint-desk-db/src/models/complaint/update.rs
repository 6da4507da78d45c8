use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::complaint::complaint_id::ComplaintId;
use crate::models::identifiable::Identifiable;
use crate::repository::error::{RepositoryError, RepositoryResult};

/// # Documentation
/// One entry of a complaint's update log.
/// Entries are append-only: never edited, reordered or removed. A correction
/// is a new entry. Internal entries are visible to staff only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateModel {
    pub id: Uuid,

    /// The complaint this entry belongs to
    pub complaint_id: ComplaintId,

    pub message: String,

    /// Set once when the entry is appended
    pub created_at: DateTime<Utc>,

    pub is_internal: bool,
}

impl Identifiable for UpdateModel {
    type Id = Uuid;

    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl UpdateModel {
    pub fn is_public(&self) -> bool {
        !self.is_internal
    }
}

/// A validated update waiting to be appended
///
/// The message is trimmed and guaranteed non-empty; the only way to obtain a
/// value is through [`NewUpdate::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUpdate {
    message: String,
    is_internal: bool,
}

impl NewUpdate {
    pub fn new(message: &str, is_internal: bool) -> RepositoryResult<Self> {
        let message = message.trim();
        if message.is_empty() {
            return Err(RepositoryError::Validation(vec!["message".to_string()]));
        }
        Ok(Self {
            message: message.to_string(),
            is_internal,
        })
    }

    pub fn public(message: &str) -> RepositoryResult<Self> {
        Self::new(message, false)
    }

    pub fn internal(message: &str) -> RepositoryResult<Self> {
        Self::new(message, true)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_internal(&self) -> bool {
        self.is_internal
    }

    pub fn into_model(self, complaint_id: ComplaintId, now: DateTime<Utc>) -> UpdateModel {
        UpdateModel {
            id: Uuid::new_v4(),
            complaint_id,
            message: self.message,
            created_at: now,
            is_internal: self.is_internal,
        }
    }
}
