pub mod identifiable;
pub mod complaint;

// Re-exports
pub use identifiable::*;
pub use complaint::*;
