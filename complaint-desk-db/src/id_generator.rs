use crate::models::complaint::complaint_id::ComplaintId;

/// Source of candidate ticket identifiers
///
/// A generator only proposes identifiers. The store that owns the records
/// calls it from behind its write lock and rejects any candidate already in
/// use, asking for the next one until a free slot is found or
/// [`ComplaintId::SLOTS_PER_YEAR`] candidates have been tried.
///
/// # Example
/// ```ignore
/// impl IdentifierGenerator for SequentialIdGenerator {
///     fn next_candidate(&mut self, year: i32) -> Option<ComplaintId> {
///         // Implementation
///     }
/// }
/// ```
pub trait IdentifierGenerator: Send + Sync {
    /// Propose the next identifier for `year`
    ///
    /// # Returns
    /// * `Some(ComplaintId)` - A candidate in the `CMP-YYYY-NNN` space of `year`
    /// * `None` - If `year` cannot be represented with four digits
    fn next_candidate(&mut self, year: i32) -> Option<ComplaintId>;
}
