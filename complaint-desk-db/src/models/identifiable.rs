/// Trait for entities that can be uniquely identified
pub trait Identifiable {
    /// The identifier type of the entity
    type Id: Clone + Send + Sync + 'static;

    /// Returns the unique identifier of the entity
    fn get_id(&self) -> Self::Id;
}
