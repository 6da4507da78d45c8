mod add_update;
mod apply_staff_action;
mod dashboard_summary;
mod list_for_staff;
mod submit;
mod track;

use async_trait::async_trait;
use complaint_desk_db::models::complaint::{ComplaintFields, ComplaintId, ComplaintModel, UpdateModel};
use complaint_desk_db::repository::complaint_store::ComplaintStore;
use complaint_desk_db::repository::list_complaints::ComplaintFilter;
use complaint_desk_db::repository::pagination::{Page, PageRequest};
use std::sync::Arc;
use tracing::warn;

use crate::config::DeskConfig;
use crate::domain::role::Viewer;
use crate::domain::staff_action::{NoteDraft, StaffAction};
use crate::domain::view::{ComplaintView, DashboardSummary, SubmissionReceipt, UpdateView};
use crate::error::{DeskError, DeskResult};
use crate::notifier::{LogNotifier, Notifier};
use crate::service::TicketService;

/// Ticket workflow on top of an injected complaint store
pub struct TicketWorkflowService<S: ComplaintStore> {
    store: Arc<S>,
    notifier: Arc<dyn Notifier>,
    config: DeskConfig,
}

impl<S: ComplaintStore> TicketWorkflowService<S> {
    pub fn new(store: Arc<S>, config: DeskConfig) -> Self {
        Self::with_notifier(store, Arc::new(LogNotifier), config)
    }

    pub fn with_notifier(store: Arc<S>, notifier: Arc<dyn Notifier>, config: DeskConfig) -> Self {
        Self {
            store,
            notifier,
            config,
        }
    }

    /// Assignment targets offered to staff
    pub fn teams(&self) -> &[String] {
        &self.config.teams
    }

    /// Load a complaint by raw identifier; malformed and unknown ids are both `NotFound`
    async fn load(&self, raw_id: &str) -> DeskResult<ComplaintModel> {
        let id = parse_id(raw_id)?;
        self.store
            .find_by_id(id.clone())
            .await?
            .ok_or_else(|| DeskError::NotFound(id.to_string()))
    }

    /// Hand a public update to the notifier; failures are logged only
    async fn notify(&self, complaint: &ComplaintModel, update: &UpdateModel) {
        if update.is_internal {
            return;
        }
        if let Err(error) = self.notifier.notify_public_update(complaint, update).await {
            warn!(
                complaint_id = %complaint.id,
                update_id = %update.id,
                error = %error,
                "public update notification failed"
            );
        }
    }
}

fn parse_id(raw: &str) -> DeskResult<ComplaintId> {
    ComplaintId::normalize(raw).ok_or_else(|| DeskError::NotFound(raw.trim().to_string()))
}

#[async_trait]
impl<S: ComplaintStore> TicketService for TicketWorkflowService<S> {
    async fn submit(&self, fields: ComplaintFields) -> DeskResult<SubmissionReceipt> {
        self.submit_impl(fields).await
    }

    async fn track(&self, id: &str) -> DeskResult<ComplaintView> {
        self.track_impl(id).await
    }

    async fn ticket_for_staff(&self, viewer: Viewer, id: &str) -> DeskResult<ComplaintView> {
        self.ticket_for_staff_impl(viewer, id).await
    }

    async fn list_for_staff(
        &self,
        viewer: Viewer,
        filter: ComplaintFilter,
        page: Option<PageRequest>,
    ) -> DeskResult<Page<ComplaintView>> {
        self.list_for_staff_impl(viewer, filter, page).await
    }

    async fn apply_staff_action(
        &self,
        viewer: Viewer,
        id: &str,
        action: StaffAction,
    ) -> DeskResult<ComplaintView> {
        self.apply_staff_action_impl(viewer, id, action).await
    }

    async fn add_update(&self, viewer: Viewer, id: &str, note: NoteDraft) -> DeskResult<UpdateView> {
        self.add_update_impl(viewer, id, note).await
    }

    async fn dashboard_summary(&self, viewer: Viewer) -> DeskResult<DashboardSummary> {
        self.dashboard_summary_impl(viewer).await
    }
}
