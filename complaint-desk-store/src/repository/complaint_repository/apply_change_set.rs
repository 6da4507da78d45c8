use async_trait::async_trait;
use complaint_desk_db::models::complaint::{AppliedChangeSet, ChangeSet, ComplaintId};
use complaint_desk_db::repository::apply_change_set::ApplyChangeSet;
use complaint_desk_db::repository::error::RepositoryResult;
use tracing::debug;

use super::repo_impl::ComplaintRepositoryImpl;

impl ComplaintRepositoryImpl {
    pub(super) async fn apply_impl(
        repo: &ComplaintRepositoryImpl,
        id: ComplaintId,
        change_set: ChangeSet,
    ) -> RepositoryResult<AppliedChangeSet> {
        let (complaint, (previous_status, changed, appended)) = repo.mutate(&id, |complaint, now| {
            let previous_status = complaint.status;
            let (changed, appended) = complaint.apply_change_set(change_set, now);
            Ok((previous_status, changed, appended))
        })?;

        debug!(complaint_id = %id, changed, "change set applied");
        Ok(AppliedChangeSet {
            complaint,
            previous_status,
            appended,
            changed,
        })
    }
}

#[async_trait]
impl ApplyChangeSet for ComplaintRepositoryImpl {
    async fn apply(&self, id: ComplaintId, change_set: ChangeSet) -> RepositoryResult<AppliedChangeSet> {
        Self::apply_impl(self, id, change_set).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{create_test_fields, demo_complaints, setup_test_context};
    use complaint_desk_db::models::complaint::{
        ChangeSet, ComplaintId, ComplaintPatch, ComplaintStatus, NewUpdate,
    };
    use complaint_desk_db::repository::apply_change_set::ApplyChangeSet;
    use complaint_desk_db::repository::create_complaint::CreateComplaint;
    use complaint_desk_db::repository::error::RepositoryError;
    use complaint_desk_db::repository::find_by_id::FindById;
    use complaint_desk_db::repository::import_batch::ImportBatch;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_apply_status_assignment_and_note_together() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = ctx.complaint_repo();
        let saved = repo.create(create_test_fields("John Smith", "Delivery Issues")).await?;

        ctx.clock.advance(chrono::Duration::hours(3));
        let applied = repo
            .apply(
                saved.id.clone(),
                ChangeSet {
                    patch: ComplaintPatch {
                        status: Some(ComplaintStatus::InProgress),
                        assigned_to: Some(ComplaintPatch::assignee("Support Team A")?),
                    },
                    note: Some(NewUpdate::public("We're investigating with our delivery partner.")?),
                },
            )
            .await?;

        assert!(applied.changed);
        assert_eq!(applied.previous_status, ComplaintStatus::Received);
        let appended = applied.appended.clone().unwrap();
        assert_eq!(applied.complaint.updated_at, appended.created_at);
        assert_eq!(applied.complaint.status, ComplaintStatus::InProgress);
        assert_eq!(applied.complaint.updates, vec![appended]);
        assert_eq!(repo.find_by_id(saved.id).await?, Some(applied.complaint));

        Ok(())
    }

    #[tokio::test]
    async fn test_apply_reports_previous_status_on_reopen() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = ctx.complaint_repo();
        repo.import_batch(demo_complaints(2024)).await?;

        let applied = repo
            .apply(
                ComplaintId::new(2024, 2).unwrap(),
                ChangeSet {
                    patch: ComplaintPatch::status(ComplaintStatus::Received),
                    note: None,
                },
            )
            .await?;

        assert_eq!(applied.previous_status, ComplaintStatus::Resolved);
        assert_eq!(applied.complaint.status, ComplaintStatus::Received);
        assert!(applied.changed);

        Ok(())
    }

    #[tokio::test]
    async fn test_apply_unknown_id_changes_nothing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = ctx.complaint_repo();
        repo.import_batch(demo_complaints(2024)).await?;
        let before: Vec<_> = {
            let mut all = Vec::new();
            for seq in 1..=3 {
                all.push(repo.find_by_id(ComplaintId::new(2024, seq).unwrap()).await?);
            }
            all
        };

        let result = repo
            .apply(
                ComplaintId::new(2024, 99).unwrap(),
                ChangeSet {
                    patch: ComplaintPatch::status(ComplaintStatus::Resolved),
                    note: Some(NewUpdate::public("Done")?),
                },
            )
            .await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));

        for (seq, expected) in (1..=3).zip(before) {
            assert_eq!(repo.find_by_id(ComplaintId::new(2024, seq).unwrap()).await?, expected);
        }
        assert_eq!(repo.len(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_all_kept() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = Arc::clone(ctx.complaint_repo());
        let saved = repo.create(create_test_fields("Sarah Johnson", "Billing & Payments")).await?;

        let mut handles = Vec::new();
        for i in 0..20 {
            let repo = Arc::clone(&repo);
            let id = saved.id.clone();
            handles.push(tokio::spawn(async move {
                repo.apply(
                    id,
                    ChangeSet {
                        patch: ComplaintPatch::default(),
                        note: Some(NewUpdate::internal(&format!("note {i}"))?),
                    },
                )
                .await
            }));
        }
        for handle in handles {
            handle.await??;
        }

        let stored = repo.find_by_id(saved.id).await?.unwrap();
        assert_eq!(stored.updates.len(), 20);

        Ok(())
    }
}
