use async_trait::async_trait;

use crate::models::complaint::{ComplaintId, NewUpdate, UpdateModel};
use crate::repository::error::RepositoryResult;

/// Repository trait for appending to a complaint's update log
///
/// The new entry gets a fresh identifier and `created_at = now`, lands at
/// the end of the log, and the parent's `updated_at` is refreshed in the
/// same atomic step. There is no edit or delete counterpart.
///
/// # Example
/// ```ignore
/// impl AppendUpdate for ComplaintRepositoryImpl {
///     async fn append(&self, id: ComplaintId, note: NewUpdate) -> RepositoryResult<UpdateModel> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait AppendUpdate: Send + Sync {
    /// Append an entry
    ///
    /// # Arguments
    /// * `id` - The identifier of the parent complaint
    /// * `note` - The validated entry
    ///
    /// # Returns
    /// * `Ok(UpdateModel)` - The stored entry
    /// * `Err(RepositoryError::NotFound)` - If `id` is unknown
    async fn append(&self, id: ComplaintId, note: NewUpdate) -> RepositoryResult<UpdateModel>;
}
