use async_trait::async_trait;
use complaint_desk_db::models::complaint::{ComplaintId, ComplaintModel, ComplaintPatch};
use complaint_desk_db::repository::error::RepositoryResult;
use complaint_desk_db::repository::update_complaint::UpdateComplaint;
use tracing::debug;

use super::repo_impl::ComplaintRepositoryImpl;

impl ComplaintRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &ComplaintRepositoryImpl,
        id: ComplaintId,
        patch: ComplaintPatch,
    ) -> RepositoryResult<ComplaintModel> {
        let (complaint, changed) = repo.mutate(&id, |complaint, now| {
            let changed = complaint.apply_patch(&patch);
            if changed {
                complaint.touch(now);
            }
            Ok(changed)
        })?;

        debug!(complaint_id = %id, changed, "complaint patched");
        Ok(complaint)
    }
}

#[async_trait]
impl UpdateComplaint for ComplaintRepositoryImpl {
    async fn update(&self, id: ComplaintId, patch: ComplaintPatch) -> RepositoryResult<ComplaintModel> {
        Self::update_impl(self, id, patch).await
    }
}
