use async_trait::async_trait;
use complaint_desk_db::models::complaint::{ComplaintModel, UpdateModel};
use std::error::Error;
use tracing::info;

/// Outbound notification for customer-visible updates
///
/// Delivery (email, toast, push) lives outside this crate. Implementations
/// should return quickly; a failure is logged by the caller and never undoes
/// the update that triggered it.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Signal that a public update was appended
    ///
    /// # Arguments
    /// * `complaint` - Snapshot of the complaint after the append
    /// * `update` - The public entry that was appended
    async fn notify_public_update(
        &self,
        complaint: &ComplaintModel,
        update: &UpdateModel,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// Notifier that only records a tracing event
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify_public_update(
        &self,
        complaint: &ComplaintModel,
        update: &UpdateModel,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        info!(
            complaint_id = %complaint.id,
            update_id = %update.id,
            email = %complaint.email,
            "public update ready for delivery"
        );
        Ok(())
    }
}
