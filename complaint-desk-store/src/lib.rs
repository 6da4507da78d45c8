pub mod id_generator;
pub mod repository;
pub mod store_repositories;

pub use id_generator::SequentialIdGenerator;
pub use repository::complaint_repository::ComplaintRepositoryImpl;
pub use store_repositories::{ComplaintRepoFactory, ComplaintRepositories};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_helper;
