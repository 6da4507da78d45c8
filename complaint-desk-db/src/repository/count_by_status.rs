use async_trait::async_trait;

use crate::models::complaint::StatusCounts;
use crate::repository::error::RepositoryResult;

/// Repository trait for per-status totals, as shown on the staff dashboard
#[async_trait]
pub trait CountByStatus: Send + Sync {
    async fn count_by_status(&self) -> RepositoryResult<StatusCounts>;
}
