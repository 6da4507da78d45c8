use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::repository::error::RepositoryResult;

/// Generic repository trait for finding an entity by its identifier
///
/// Lookup is an exact match on the canonical identifier. Callers are
/// responsible for normalizing user input (case, whitespace) first.
/// Returns an owned snapshot of the entity.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl FindById<ComplaintModel> for ComplaintRepositoryImpl {
///     async fn find_by_id(&self, id: ComplaintId) -> RepositoryResult<Option<ComplaintModel>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindById<T: Identifiable>: Send + Sync {
    /// Find an entity by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The identifier of the entity to find
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found entity
    /// * `Ok(None)` - If the entity does not exist
    /// * `Err` - An error if the lookup could not be executed
    async fn find_by_id(&self, id: T::Id) -> RepositoryResult<Option<T>>;
}
