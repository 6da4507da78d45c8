use complaint_desk_db::models::complaint::ComplaintFields;
use complaint_desk_db::repository::complaint_store::ComplaintStore;

use super::TicketWorkflowService;
use crate::domain::view::SubmissionReceipt;
use crate::error::DeskResult;

impl<S: ComplaintStore> TicketWorkflowService<S> {
    pub(super) async fn submit_impl(&self, fields: ComplaintFields) -> DeskResult<SubmissionReceipt> {
        let complaint = self.store.create(fields).await?;
        Ok(SubmissionReceipt { id: complaint.id })
    }
}

#[cfg(test)]
mod tests {
    use crate::error::DeskError;
    use crate::service::TicketService;
    use crate::test_utils::setup_service;
    use complaint_desk_db::models::complaint::{ComplaintFields, ComplaintStatus};
    use complaint_desk_store::test_helper::create_test_fields;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_submit_then_track() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (_ctx, service, _notifier) = setup_service();

        let receipt = service.submit(create_test_fields("John Smith", "Delivery Issues")).await?;
        let id = receipt.id.as_str();
        assert_eq!(id.len(), "CMP-2024-001".len());
        assert!(id.starts_with("CMP-2024-"));
        assert!(id[9..].chars().all(|c| c.is_ascii_digit()));

        let view = service.track(id).await?;
        assert_eq!(view.status, ComplaintStatus::Received);
        assert!(view.updates.is_empty());
        assert_eq!(view.created_at, view.updated_at);
        assert_eq!(view.name, "John Smith");

        Ok(())
    }

    #[tokio::test]
    async fn test_sequential_submissions_are_distinct() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (_ctx, service, _notifier) = setup_service();

        let mut seen = HashSet::new();
        for i in 0..100 {
            let receipt = service
                .submit(create_test_fields(&format!("Customer {i}"), "Other"))
                .await?;
            assert!(seen.insert(receipt.id));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_submit_reports_all_invalid_fields() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (ctx, service, _notifier) = setup_service();

        let result = service
            .submit(ComplaintFields {
                name: " ".to_string(),
                email: "not-an-email".to_string(),
                category: "Complaints About Complaints".to_string(),
                ..create_test_fields("Jane Doe", "Other")
            })
            .await;

        assert_eq!(
            result,
            Err(DeskError::ValidationError {
                fields: vec!["category".to_string(), "email".to_string(), "name".to_string()]
            })
        );
        assert!(ctx.complaint_repo().is_empty());

        Ok(())
    }
}
