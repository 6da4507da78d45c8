pub mod error;
pub mod pagination;
pub mod find_by_id;
pub mod import_batch;
pub mod create_complaint;
pub mod list_complaints;
pub mod count_by_status;
pub mod update_complaint;
pub mod append_update;
pub mod apply_change_set;
pub mod complaint_store;

// Re-exports
pub use error::*;
pub use pagination::*;
pub use find_by_id::*;
pub use import_batch::*;
pub use create_complaint::*;
pub use list_complaints::*;
pub use count_by_status::*;
pub use update_complaint::*;
pub use append_update::*;
pub use apply_change_set::*;
pub use complaint_store::*;
