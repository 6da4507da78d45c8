use async_trait::async_trait;
use complaint_desk_db::models::complaint::StatusCounts;
use complaint_desk_db::repository::count_by_status::CountByStatus;
use complaint_desk_db::repository::error::RepositoryResult;

use super::repo_impl::ComplaintRepositoryImpl;

#[async_trait]
impl CountByStatus for ComplaintRepositoryImpl {
    async fn count_by_status(&self) -> RepositoryResult<StatusCounts> {
        let state = self.state.read();
        let mut counts = StatusCounts::default();
        for complaint in state.complaints.values() {
            counts.record(complaint.status);
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{demo_complaints, setup_test_context};
    use complaint_desk_db::models::complaint::StatusCounts;
    use complaint_desk_db::repository::count_by_status::CountByStatus;
    use complaint_desk_db::repository::import_batch::ImportBatch;

    #[tokio::test]
    async fn test_count_by_status() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = ctx.complaint_repo();
        assert_eq!(repo.count_by_status().await?, StatusCounts::default());

        repo.import_batch(demo_complaints(2024)).await?;
        let counts = repo.count_by_status().await?;
        assert_eq!(
            counts,
            StatusCounts {
                received: 1,
                in_progress: 1,
                resolved: 1,
            }
        );
        assert_eq!(counts.total(), 3);

        Ok(())
    }
}
