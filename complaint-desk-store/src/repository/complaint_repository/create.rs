use async_trait::async_trait;
use complaint_desk_db::models::complaint::{ComplaintFields, ComplaintModel, NewComplaint};
use complaint_desk_db::repository::create_complaint::CreateComplaint;
use complaint_desk_db::repository::error::RepositoryResult;
use tracing::info;

use super::repo_impl::ComplaintRepositoryImpl;

impl ComplaintRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &ComplaintRepositoryImpl,
        fields: ComplaintFields,
    ) -> RepositoryResult<ComplaintModel> {
        // 1. Validate before touching the lock
        let new_complaint = NewComplaint::try_from(fields)?;

        // 2. Identifier and insert under one write lock
        let complaint = {
            let mut state = repo.state.write();
            let now = repo.clock.now();
            let id = state.next_free_id(now)?;
            let complaint = new_complaint.into_model(id.clone(), now);
            state.complaints.insert(id, complaint.clone());
            complaint
        };

        info!(
            complaint_id = %complaint.id,
            category = %complaint.category,
            "complaint created"
        );
        Ok(complaint)
    }
}

#[async_trait]
impl CreateComplaint for ComplaintRepositoryImpl {
    async fn create(&self, fields: ComplaintFields) -> RepositoryResult<ComplaintModel> {
        Self::create_impl(self, fields).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{create_test_fields, demo_complaints, setup_test_context, test_start};
    use complaint_desk_db::models::complaint::{ComplaintId, ComplaintStatus};
    use complaint_desk_db::repository::create_complaint::CreateComplaint;
    use complaint_desk_db::repository::error::RepositoryError;
    use complaint_desk_db::repository::import_batch::ImportBatch;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_create() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = ctx.complaint_repo();

        let saved = repo.create(create_test_fields("John Smith", "Delivery Issues")).await?;

        assert_eq!(saved.id.as_str(), "CMP-2024-001");
        assert_eq!(saved.status, ComplaintStatus::Received);
        assert_eq!(saved.created_at, test_start());
        assert_eq!(saved.created_at, saved.updated_at);
        assert!(saved.updates.is_empty());
        assert!(saved.assigned_to.is_none());
        assert_eq!(repo.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_fields() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = ctx.complaint_repo();

        let mut fields = create_test_fields("John Smith", "Delivery Issues");
        fields.email = "john-at-example".to_string();
        fields.subject = "  ".to_string();

        let err = repo.create(fields).await.unwrap_err();
        assert_eq!(
            err,
            RepositoryError::Validation(vec!["email".to_string(), "subject".to_string()])
        );
        assert!(repo.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_sequential_creates_are_distinct() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = ctx.complaint_repo();

        let mut ids = HashSet::new();
        for i in 0..250 {
            let saved = repo
                .create(create_test_fields(&format!("Customer {i}"), "Other"))
                .await?;
            assert!(ids.insert(saved.id));
        }
        assert_eq!(ids.len(), 250);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_skips_imported_identifiers() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = ctx.complaint_repo();
        repo.import_batch(demo_complaints(2024)).await?;

        let saved = repo.create(create_test_fields("Ana Lima", "Other")).await?;

        assert_eq!(saved.id, ComplaintId::new(2024, 4).unwrap());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_in_new_year_restarts_sequence() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = ctx.complaint_repo();

        repo.create(create_test_fields("First", "Other")).await?;
        ctx.clock.advance(chrono::Duration::days(30));
        let saved = repo.create(create_test_fields("Second", "Other")).await?;

        assert_eq!(saved.id.as_str(), "CMP-2025-001");
        Ok(())
    }

    #[tokio::test]
    async fn test_create_fails_when_year_is_full() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = ctx.complaint_repo();

        for _ in 0..1000 {
            repo.create(create_test_fields("Bulk", "Other")).await?;
        }
        let err = repo.create(create_test_fields("One too many", "Other")).await.unwrap_err();

        assert_eq!(err, RepositoryError::IdentifierSpaceExhausted { year: 2024 });
        assert_eq!(repo.len(), 1000);
        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_distinct() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = ctx.complaint_repo().clone();

        let mut handles = Vec::new();
        for i in 0..50 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.create(create_test_fields(&format!("Parallel {i}"), "Other")).await
            }));
        }
        let mut ids = HashSet::new();
        for handle in handles {
            let saved = handle.await??;
            assert!(ids.insert(saved.id));
        }
        assert_eq!(repo.len(), 50);
        Ok(())
    }
}
