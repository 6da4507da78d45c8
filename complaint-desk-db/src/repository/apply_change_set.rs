use async_trait::async_trait;

use crate::models::complaint::{AppliedChangeSet, ChangeSet, ComplaintId};
use crate::repository::error::RepositoryResult;

/// Repository trait for applying a patch and an optional log entry together
///
/// This backs staff actions that change status, assignment and add a note
/// in one go. All parts become visible together with a single `updated_at`
/// refresh, or none of them do.
///
/// # Example
/// ```ignore
/// impl ApplyChangeSet for ComplaintRepositoryImpl {
///     async fn apply(&self, id: ComplaintId, change_set: ChangeSet) -> RepositoryResult<AppliedChangeSet> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait ApplyChangeSet: Send + Sync {
    /// Apply a change set atomically
    ///
    /// # Arguments
    /// * `id` - The identifier of the complaint
    /// * `change_set` - Patch plus optional note
    ///
    /// # Returns
    /// * `Ok(AppliedChangeSet)` - Snapshot after the change, the previous status and the appended entry
    /// * `Err(RepositoryError::NotFound)` - If `id` is unknown; nothing is changed
    async fn apply(&self, id: ComplaintId, change_set: ChangeSet) -> RepositoryResult<AppliedChangeSet>;
}
