use async_trait::async_trait;

use crate::models::complaint::{ComplaintId, ComplaintModel, ComplaintPatch};
use crate::repository::error::RepositoryResult;

/// Repository trait for partial updates of a complaint's mutable fields
///
/// Only `status` and `assigned_to` can change. `updated_at` is refreshed
/// when the patch actually changes a value; a patch repeating the stored
/// values leaves the complaint untouched. The update is atomic: readers see
/// either the old or the new complaint, never a mix.
///
/// # Example
/// ```ignore
/// impl UpdateComplaint for ComplaintRepositoryImpl {
///     async fn update(&self, id: ComplaintId, patch: ComplaintPatch) -> RepositoryResult<ComplaintModel> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait UpdateComplaint: Send + Sync {
    /// Apply a patch
    ///
    /// # Arguments
    /// * `id` - The identifier of the complaint
    /// * `patch` - The fields to change
    ///
    /// # Returns
    /// * `Ok(ComplaintModel)` - The complaint after the update
    /// * `Err(RepositoryError::NotFound)` - If `id` is unknown
    async fn update(&self, id: ComplaintId, patch: ComplaintPatch) -> RepositoryResult<ComplaintModel>;
}
