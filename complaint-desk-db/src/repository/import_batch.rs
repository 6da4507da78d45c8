use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::repository::error::RepositoryResult;

/// Generic repository trait for loading pre-existing entities in a batch
///
/// Used to rehydrate a store from a persistent copy or to seed demo data.
/// Entities keep the identifiers they already carry. The batch is atomic:
/// if any identifier is already taken, or appears twice in the batch,
/// nothing is imported.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl ImportBatch<ComplaintModel> for ComplaintRepositoryImpl {
///     async fn import_batch(&self, items: Vec<ComplaintModel>) -> RepositoryResult<Vec<ComplaintModel>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait ImportBatch<T: Identifiable>: Send + Sync {
    /// Import multiple items as one unit
    ///
    /// # Arguments
    /// * `items` - A vector of entities carrying their own identifiers
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The imported entities
    /// * `Err(RepositoryError::Conflict)` - If an identifier is already in use
    /// * `Err(RepositoryError::Validation)` - If an entity breaks a model invariant
    async fn import_batch(&self, items: Vec<T>) -> RepositoryResult<Vec<T>>;
}
