use async_trait::async_trait;

use crate::models::complaint::{ComplaintFields, ComplaintModel};
use crate::repository::error::RepositoryResult;

/// Repository trait for creating a complaint from submitted fields
///
/// Implementations validate the fields (required values present, email
/// well-formed, category known), assign a fresh identifier that is unique
/// across the whole store, and persist the complaint with status
/// `received`, `created_at == updated_at == now` and an empty update log.
///
/// # Example
/// ```ignore
/// impl CreateComplaint for ComplaintRepositoryImpl {
///     async fn create(&self, fields: ComplaintFields) -> RepositoryResult<ComplaintModel> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait CreateComplaint: Send + Sync {
    /// Create a complaint
    ///
    /// # Arguments
    /// * `fields` - The raw submission
    ///
    /// # Returns
    /// * `Ok(ComplaintModel)` - The stored complaint with its identifier
    /// * `Err(RepositoryError::Validation)` - Listing every offending field
    /// * `Err(RepositoryError::IdentifierSpaceExhausted)` - If no identifier is left for the year
    async fn create(&self, fields: ComplaintFields) -> RepositoryResult<ComplaintModel>;
}
