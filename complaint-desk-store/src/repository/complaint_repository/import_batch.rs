use async_trait::async_trait;
use complaint_desk_db::models::complaint::ComplaintModel;
use complaint_desk_db::repository::error::{RepositoryError, RepositoryResult};
use complaint_desk_db::repository::import_batch::ImportBatch;
use std::collections::BTreeSet;
use tracing::info;

use super::repo_impl::ComplaintRepositoryImpl;

impl ComplaintRepositoryImpl {
    pub(super) async fn import_batch_impl(
        repo: &ComplaintRepositoryImpl,
        items: Vec<ComplaintModel>,
    ) -> RepositoryResult<Vec<ComplaintModel>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut state = repo.state.write();

        let mut seen = BTreeSet::new();
        for complaint in &items {
            if state.complaints.contains_key(&complaint.id) || !seen.insert(&complaint.id) {
                return Err(RepositoryError::Conflict(format!(
                    "complaint {} already exists",
                    complaint.id
                )));
            }
            let invalid = complaint.invariant_violations();
            if !invalid.is_empty() {
                return Err(RepositoryError::Validation(invalid));
            }
        }

        for complaint in &items {
            state.complaints.insert(complaint.id.clone(), complaint.clone());
        }
        drop(state);

        info!(count = items.len(), "complaints imported");
        Ok(items)
    }
}

#[async_trait]
impl ImportBatch<ComplaintModel> for ComplaintRepositoryImpl {
    async fn import_batch(&self, items: Vec<ComplaintModel>) -> RepositoryResult<Vec<ComplaintModel>> {
        Self::import_batch_impl(self, items).await
    }
}
