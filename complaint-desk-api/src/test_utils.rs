//! Shared fixtures for workflow tests

use async_trait::async_trait;
use complaint_desk_db::models::complaint::{ComplaintModel, UpdateModel};
use complaint_desk_db::repository::error::RepositoryResult;
use complaint_desk_db::repository::import_batch::ImportBatch;
use complaint_desk_store::test_helper::{demo_complaints, setup_test_context, TestContext};
use complaint_desk_store::ComplaintRepositoryImpl;
use parking_lot::Mutex;
use std::error::Error;
use std::sync::Arc;

use crate::config::DeskConfig;
use crate::notifier::Notifier;
use crate::service::TicketWorkflowService;

/// Notifier that keeps every public update it was handed
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<UpdateModel>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<UpdateModel> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_public_update(
        &self,
        _complaint: &ComplaintModel,
        update: &UpdateModel,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.sent.lock().push(update.clone());
        Ok(())
    }
}

pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify_public_update(
        &self,
        _complaint: &ComplaintModel,
        _update: &UpdateModel,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        Err("mail relay unavailable".into())
    }
}

pub type TestService = TicketWorkflowService<ComplaintRepositoryImpl>;

pub fn setup_service() -> (TestContext, TestService, Arc<RecordingNotifier>) {
    let ctx = setup_test_context();
    let notifier = Arc::new(RecordingNotifier::default());
    let service = TicketWorkflowService::with_notifier(
        Arc::clone(ctx.complaint_repo()),
        notifier.clone(),
        DeskConfig::default(),
    );
    (ctx, service, notifier)
}

pub fn setup_service_with_failing_notifier() -> (TestContext, TestService) {
    let ctx = setup_test_context();
    let service = TicketWorkflowService::with_notifier(
        Arc::clone(ctx.complaint_repo()),
        Arc::new(FailingNotifier),
        DeskConfig::default(),
    );
    (ctx, service)
}

/// Load the demo tickets CMP-2024-001 to CMP-2024-003
pub async fn seed_demo(ctx: &TestContext) -> RepositoryResult<Vec<ComplaintModel>> {
    ctx.complaint_repo().import_batch(demo_complaints(2024)).await
}
