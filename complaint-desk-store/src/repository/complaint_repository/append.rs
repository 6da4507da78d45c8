use async_trait::async_trait;
use complaint_desk_db::models::complaint::{ComplaintId, NewUpdate, UpdateModel};
use complaint_desk_db::repository::append_update::AppendUpdate;
use complaint_desk_db::repository::error::RepositoryResult;
use tracing::debug;

use super::repo_impl::ComplaintRepositoryImpl;

impl ComplaintRepositoryImpl {
    pub(super) async fn append_impl(
        repo: &ComplaintRepositoryImpl,
        id: ComplaintId,
        note: NewUpdate,
    ) -> RepositoryResult<UpdateModel> {
        let (_, update) = repo.mutate(&id, |complaint, now| {
            let at = complaint.mutation_time(now);
            let update = complaint.push_update(note, at);
            complaint.touch(at);
            Ok(update)
        })?;

        debug!(
            complaint_id = %id,
            update_id = %update.id,
            is_internal = update.is_internal,
            "update appended"
        );
        Ok(update)
    }
}

#[async_trait]
impl AppendUpdate for ComplaintRepositoryImpl {
    async fn append(&self, id: ComplaintId, note: NewUpdate) -> RepositoryResult<UpdateModel> {
        Self::append_impl(self, id, note).await
    }
}
