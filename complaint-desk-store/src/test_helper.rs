//! Test helpers for building isolated stores with a controllable clock
//!
//! Every context owns its own in-memory store, so tests never share state
//! and need no cleanup.

use chrono::{DateTime, Duration, TimeZone, Utc};
use complaint_desk_db::models::complaint::{
    ComplaintCategory, ComplaintFields, ComplaintId, ComplaintModel, ComplaintStatus, UpdateModel,
};
use complaint_desk_db::Clock;
use heapless::String as HeaplessString;
use parking_lot::Mutex;
use std::sync::Arc;
use uuid::Uuid;

use crate::store_repositories::{ComplaintRepoFactory, ComplaintRepositories};
use crate::ComplaintRepositoryImpl;

/// Clock that only moves when told to
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock() = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// Test context with its own store and clock
pub struct TestContext {
    pub clock: Arc<ManualClock>,
    pub repos: ComplaintRepositories,
}

impl TestContext {
    pub fn complaint_repo(&self) -> &Arc<ComplaintRepositoryImpl> {
        &self.repos.complaint_repository
    }
}

/// Start time of every test context: 2024-12-10 09:00 UTC
pub fn test_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 10, 9, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Setup a fresh store whose clock starts at [`test_start`]
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context();
///     let repo = ctx.complaint_repo();
///     let saved = repo.create(create_test_fields("John Smith", "Delivery Issues")).await?;
///     ctx.clock.advance(chrono::Duration::hours(1));
///     Ok(())
/// }
/// ```
pub fn setup_test_context() -> TestContext {
    let clock = Arc::new(ManualClock::new(test_start()));
    let factory = ComplaintRepoFactory::new(clock.clone());
    TestContext {
        clock,
        repos: factory.build_all_repos(),
    }
}

pub fn create_test_fields(name: &str, category: &str) -> ComplaintFields {
    ComplaintFields {
        name: name.to_string(),
        email: format!("{}@email.com", name.to_lowercase().replace(' ', ".")),
        phone: None,
        category: category.to_string(),
        subject: format!("{category} complaint"),
        description: format!("Complaint raised by {name}."),
    }
}

fn bounded<const N: usize>(value: &str) -> HeaplessString<N> {
    HeaplessString::try_from(value).unwrap()
}

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// The three sample tickets shown on the demo dashboard, dated in `year`
pub fn demo_complaints(year: i32) -> Vec<ComplaintModel> {
    let first = ComplaintId::new(year, 1).unwrap();
    let second = ComplaintId::new(year, 2).unwrap();
    let third = ComplaintId::new(year, 3).unwrap();
    vec![
        ComplaintModel {
            id: first.clone(),
            name: bounded("John Smith"),
            email: bounded("john.smith@email.com"),
            phone: Some(bounded("+1 234 567 8900")),
            category: ComplaintCategory::DeliveryIssues,
            subject: bounded("Package not received"),
            description: "I ordered a laptop on December 1st and was supposed to receive it by December 5th. The tracking shows it was delivered but I never got it.".to_string(),
            status: ComplaintStatus::InProgress,
            created_at: at(year, 12, 1),
            updated_at: at(year, 12, 8),
            assigned_to: Some(bounded("Support Team A")),
            updates: vec![UpdateModel {
                id: Uuid::new_v4(),
                complaint_id: first,
                message: "We're investigating with our delivery partner. We'll update you within 24 hours.".to_string(),
                created_at: at(year, 12, 8),
                is_internal: false,
            }],
        },
        ComplaintModel {
            id: second.clone(),
            name: bounded("Sarah Johnson"),
            email: bounded("sarah.j@email.com"),
            phone: None,
            category: ComplaintCategory::BillingAndPayments,
            subject: bounded("Double charged for subscription"),
            description: "My credit card was charged twice for my monthly subscription.".to_string(),
            status: ComplaintStatus::Resolved,
            created_at: at(year, 11, 28),
            updated_at: at(year, 12, 2),
            assigned_to: Some(bounded("Billing Team")),
            updates: vec![
                UpdateModel {
                    id: Uuid::new_v4(),
                    complaint_id: second.clone(),
                    message: "Duplicate charge confirmed with the payment provider.".to_string(),
                    created_at: at(year, 11, 29),
                    is_internal: true,
                },
                UpdateModel {
                    id: Uuid::new_v4(),
                    complaint_id: second,
                    message: "Refund has been processed successfully. This ticket is now resolved.".to_string(),
                    created_at: at(year, 12, 2),
                    is_internal: false,
                },
            ],
        },
        ComplaintModel {
            id: third,
            name: bounded("Michael Chen"),
            email: bounded("m.chen@email.com"),
            phone: Some(bounded("+1 987 654 3210")),
            category: ComplaintCategory::ProductQuality,
            subject: bounded("Defective item received"),
            description: "The electronic device I received is not working properly.".to_string(),
            status: ComplaintStatus::Received,
            created_at: at(year, 12, 10),
            updated_at: at(year, 12, 10),
            assigned_to: None,
            updates: Vec::new(),
        },
    ]
}
