pub mod repo_impl;
pub mod create;
pub mod find_by_id;
pub mod list;
pub mod count_by_status;
pub mod update;
pub mod append;
pub mod apply_change_set;
pub mod import_batch;

pub use repo_impl::ComplaintRepositoryImpl;
