use complaint_desk_db::{Clock, SystemClock};
use std::sync::Arc;

use crate::repository::complaint_repository::ComplaintRepositoryImpl;

/// Factory for creating complaint repositories
///
/// Holds the clock shared by every repository it builds. Each call to
/// [`ComplaintRepoFactory::build_complaint_repo`] returns a fresh, empty
/// store; an application normally builds one and shares the `Arc`.
pub struct ComplaintRepoFactory {
    clock: Arc<dyn Clock>,
}

impl ComplaintRepoFactory {
    pub fn new(clock: Arc<dyn Clock>) -> Arc<Self> {
        Arc::new(Self { clock })
    }

    /// Factory stamping records with wall-clock time
    pub fn system() -> Arc<Self> {
        Self::new(Arc::new(SystemClock))
    }

    pub fn build_complaint_repo(&self) -> Arc<ComplaintRepositoryImpl> {
        Arc::new(ComplaintRepositoryImpl::new(self.clock.clone()))
    }

    pub fn build_all_repos(&self) -> ComplaintRepositories {
        ComplaintRepositories {
            complaint_repository: self.build_complaint_repo(),
        }
    }
}

/// Container for all repositories of the desk
pub struct ComplaintRepositories {
    pub complaint_repository: Arc<ComplaintRepositoryImpl>,
}
