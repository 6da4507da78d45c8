use async_trait::async_trait;
use complaint_desk_db::models::complaint::{ComplaintId, ComplaintModel};
use complaint_desk_db::repository::error::RepositoryResult;
use complaint_desk_db::repository::find_by_id::FindById;

use super::repo_impl::ComplaintRepositoryImpl;

impl ComplaintRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &ComplaintRepositoryImpl,
        id: ComplaintId,
    ) -> RepositoryResult<Option<ComplaintModel>> {
        Ok(repo.state.read().complaints.get(&id).cloned())
    }
}

#[async_trait]
impl FindById<ComplaintModel> for ComplaintRepositoryImpl {
    async fn find_by_id(&self, id: ComplaintId) -> RepositoryResult<Option<ComplaintModel>> {
        Self::find_by_id_impl(self, id).await
    }
}
