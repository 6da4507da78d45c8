use async_trait::async_trait;
use complaint_desk_db::models::complaint::ComplaintModel;
use complaint_desk_db::repository::error::RepositoryResult;
use complaint_desk_db::repository::list_complaints::{ComplaintFilter, ListComplaints};
use complaint_desk_db::repository::pagination::{Page, PageRequest};

use super::repo_impl::ComplaintRepositoryImpl;

impl ComplaintRepositoryImpl {
    pub(super) async fn list_impl(
        repo: &ComplaintRepositoryImpl,
        filter: ComplaintFilter,
        page: PageRequest,
    ) -> RepositoryResult<Page<ComplaintModel>> {
        let mut matching: Vec<ComplaintModel> = {
            let state = repo.state.read();
            state
                .complaints
                .values()
                .filter(|complaint| filter.matches(complaint))
                .cloned()
                .collect()
        };

        // Most recent first
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(page.slice(matching))
    }
}

#[async_trait]
impl ListComplaints for ComplaintRepositoryImpl {
    async fn list(
        &self,
        filter: ComplaintFilter,
        page: PageRequest,
    ) -> RepositoryResult<Page<ComplaintModel>> {
        Self::list_impl(self, filter, page).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{create_test_fields, demo_complaints, setup_test_context};
    use complaint_desk_db::models::complaint::{ComplaintCategory, ComplaintStatus};
    use complaint_desk_db::repository::create_complaint::CreateComplaint;
    use complaint_desk_db::repository::import_batch::ImportBatch;
    use complaint_desk_db::repository::list_complaints::{ComplaintFilter, ListComplaints};
    use complaint_desk_db::repository::pagination::PageRequest;

    #[tokio::test]
    async fn test_list_orders_most_recent_first() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = ctx.complaint_repo();

        let first = repo.create(create_test_fields("First", "Other")).await?;
        ctx.clock.advance(chrono::Duration::minutes(1));
        let second = repo.create(create_test_fields("Second", "Other")).await?;
        ctx.clock.advance(chrono::Duration::minutes(1));
        let third = repo.create(create_test_fields("Third", "Other")).await?;

        let page = repo.list(ComplaintFilter::default(), PageRequest::default()).await?;
        let ids: Vec<_> = page.items.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
        assert_eq!(page.total, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_same_instant_breaks_ties_by_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = ctx.complaint_repo();

        let first = repo.create(create_test_fields("First", "Other")).await?;
        let second = repo.create(create_test_fields("Second", "Other")).await?;

        let page = repo.list(ComplaintFilter::default(), PageRequest::default()).await?;
        assert_eq!(page.items[0].id, second.id);
        assert_eq!(page.items[1].id, first.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_filters() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = ctx.complaint_repo();
        repo.import_batch(demo_complaints(2024)).await?;

        let received = repo
            .list(ComplaintFilter::by_status(ComplaintStatus::Received), PageRequest::default())
            .await?;
        assert_eq!(received.total, 1);
        assert_eq!(received.items[0].subject.as_str(), "Defective item received");

        let billing = repo
            .list(
                ComplaintFilter {
                    category: Some(ComplaintCategory::BillingAndPayments),
                    ..ComplaintFilter::default()
                },
                PageRequest::default(),
            )
            .await?;
        assert_eq!(billing.total, 1);
        assert_eq!(billing.items[0].status, ComplaintStatus::Resolved);

        let team_a = repo
            .list(
                ComplaintFilter {
                    assigned_to: Some("Support Team A".to_string()),
                    ..ComplaintFilter::default()
                },
                PageRequest::default(),
            )
            .await?;
        assert_eq!(team_a.total, 1);
        assert_eq!(team_a.items[0].name.as_str(), "John Smith");

        Ok(())
    }

    #[tokio::test]
    async fn test_list_paginates() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = ctx.complaint_repo();
        for i in 0..5 {
            repo.create(create_test_fields(&format!("Customer {i}"), "Other")).await?;
            ctx.clock.advance(chrono::Duration::seconds(1));
        }

        let page = repo.list(ComplaintFilter::default(), PageRequest::new(2, 0)).await?;
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_more());

        let last = repo.list(ComplaintFilter::default(), PageRequest::for_page(2, 3)).await?;
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].name.as_str(), "Customer 0");
        assert!(!last.has_more());

        Ok(())
    }
}
