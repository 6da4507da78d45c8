use chrono::{DateTime, Duration, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::complaint::category::{deserialize_category, serialize_category, ComplaintCategory};
use crate::models::complaint::complaint_id::ComplaintId;
use crate::models::complaint::status::ComplaintStatus;
use crate::models::complaint::update::{NewUpdate, UpdateModel};
use crate::models::identifiable::Identifiable;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::utils::bounded_string;

/// Database model for Complaint
/// A single submitted issue, its lifecycle status and its update log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintModel {
    /// Assigned at creation, never changed or reused
    pub id: ComplaintId,

    pub name: HeaplessString<100>,
    pub email: HeaplessString<254>,
    pub phone: Option<HeaplessString<32>>,

    #[serde(serialize_with = "serialize_category", deserialize_with = "deserialize_category")]
    pub category: ComplaintCategory,

    pub subject: HeaplessString<200>,
    pub description: String,

    pub status: ComplaintStatus,

    /// Set once at creation
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation, never earlier than `created_at`
    pub updated_at: DateTime<Utc>,

    /// Team or handler name; only staff can change it
    pub assigned_to: Option<HeaplessString<100>>,

    /// Chronological, append-only
    #[serde(default)]
    pub updates: Vec<UpdateModel>,
}

impl Identifiable for ComplaintModel {
    type Id = ComplaintId;

    fn get_id(&self) -> ComplaintId {
        self.id.clone()
    }
}

/// Partial change to the mutable fields of a complaint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplaintPatch {
    pub status: Option<ComplaintStatus>,
    pub assigned_to: Option<HeaplessString<100>>,
}

impl ComplaintPatch {
    pub fn status(status: ComplaintStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Validate a team or handler name for assignment
    pub fn assignee(name: &str) -> RepositoryResult<HeaplessString<100>> {
        let mut invalid = Vec::new();
        let name = name.trim();
        if name.is_empty() {
            return Err(RepositoryError::Validation(vec!["assigned_to".to_string()]));
        }
        bounded_string::<100>("assigned_to", name, &mut invalid)
            .ok_or(RepositoryError::Validation(invalid))
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.assigned_to.is_none()
    }
}

/// Everything a single staff action may change, applied as one unit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub patch: ComplaintPatch,
    pub note: Option<NewUpdate>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.patch.is_empty() && self.note.is_none()
    }
}

/// Outcome of an atomic change set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedChangeSet {
    /// Snapshot of the complaint after the change
    pub complaint: ComplaintModel,
    pub previous_status: ComplaintStatus,
    pub appended: Option<UpdateModel>,
    /// False when the patch matched the stored values and no note was given
    pub changed: bool,
}

impl ComplaintModel {
    /// Apply the patch in place, returning whether any field changed.
    /// Does not refresh `updated_at`.
    pub fn apply_patch(&mut self, patch: &ComplaintPatch) -> bool {
        let mut changed = false;
        if let Some(status) = patch.status {
            if self.status != status {
                self.status = status;
                changed = true;
            }
        }
        if let Some(assigned_to) = &patch.assigned_to {
            if self.assigned_to.as_ref() != Some(assigned_to) {
                self.assigned_to = Some(assigned_to.clone());
                changed = true;
            }
        }
        changed
    }

    /// Time to stamp a mutation made at `now`
    ///
    /// Strictly later than `updated_at`, so the update log stays chronological
    /// and every real change moves `updated_at` even if the clock steps back.
    pub fn mutation_time(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        }
    }

    /// Append to the update log, stamped with `at`, and return the stored entry.
    /// Does not refresh `updated_at`.
    pub fn push_update(&mut self, note: NewUpdate, at: DateTime<Utc>) -> UpdateModel {
        let update = note.into_model(self.id.clone(), at);
        self.updates.push(update.clone());
        update
    }

    /// Refresh `updated_at` for a change made at `now`
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = self.mutation_time(now);
    }

    /// Apply a whole change set; `updated_at` moves only when something changed
    pub fn apply_change_set(
        &mut self,
        change_set: ChangeSet,
        now: DateTime<Utc>,
    ) -> (bool, Option<UpdateModel>) {
        let at = self.mutation_time(now);
        let mut changed = self.apply_patch(&change_set.patch);
        let appended = change_set.note.map(|note| self.push_update(note, at));
        changed |= appended.is_some();
        if changed {
            self.updated_at = at;
        }
        (changed, appended)
    }

    /// Fields breaking a record invariant, sorted; empty for a consistent record
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut invalid = Vec::new();
        for (field, value) in [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("subject", self.subject.as_str()),
            ("description", self.description.as_str()),
        ] {
            if value.trim().is_empty() {
                invalid.push(field.to_string());
            }
        }
        if self.updated_at < self.created_at {
            invalid.push("updated_at".to_string());
        }

        let mut ids = BTreeSet::new();
        let mut previous = self.created_at;
        let updates_consistent = self.updates.iter().all(|update| {
            let in_order = update.created_at >= previous && update.created_at <= self.updated_at;
            previous = update.created_at;
            in_order
                && ids.insert(update.id)
                && update.complaint_id == self.id
                && !update.message.trim().is_empty()
        });
        if !updates_consistent {
            invalid.push("updates".to_string());
        }

        invalid.sort();
        invalid
    }

    pub fn public_updates(&self) -> impl Iterator<Item = &UpdateModel> {
        self.updates.iter().filter(|update| update.is_public())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample(now: DateTime<Utc>) -> ComplaintModel {
        ComplaintModel {
            id: ComplaintId::new(2024, 1).unwrap(),
            name: HeaplessString::try_from("Michael Chen").unwrap(),
            email: HeaplessString::try_from("m.chen@email.com").unwrap(),
            phone: None,
            category: ComplaintCategory::ProductQuality,
            subject: HeaplessString::try_from("Defective item received").unwrap(),
            description: "The screen flickers.".to_string(),
            status: ComplaintStatus::Received,
            created_at: now,
            updated_at: now,
            assigned_to: None,
            updates: Vec::new(),
        }
    }

    #[test]
    fn test_noop_patch_keeps_updated_at() {
        let now = Utc::now();
        let mut complaint = sample(now);
        let later = now + Duration::minutes(5);
        let (changed, appended) = complaint.apply_change_set(
            ChangeSet {
                patch: ComplaintPatch::status(ComplaintStatus::Received),
                note: None,
            },
            later,
        );
        assert!(!changed);
        assert!(appended.is_none());
        assert_eq!(complaint.updated_at, now);
    }

    #[test]
    fn test_change_set_applies_all_parts_with_one_timestamp() {
        let now = Utc::now();
        let mut complaint = sample(now);
        let later = now + Duration::hours(1);
        let (changed, appended) = complaint.apply_change_set(
            ChangeSet {
                patch: ComplaintPatch {
                    status: Some(ComplaintStatus::InProgress),
                    assigned_to: Some(ComplaintPatch::assignee("Technical Team").unwrap()),
                },
                note: Some(NewUpdate::internal("Asked for photos.").unwrap()),
            },
            later,
        );
        assert!(changed);
        let appended = appended.unwrap();
        assert_eq!(appended.created_at, later);
        assert_eq!(complaint.updated_at, later);
        assert_eq!(complaint.status, ComplaintStatus::InProgress);
        assert_eq!(complaint.assigned_to.as_deref(), Some("Technical Team"));
        assert_eq!(complaint.updates, vec![appended]);
        assert_eq!(complaint.public_updates().count(), 0);
    }

    #[test]
    fn test_touch_never_moves_backward() {
        let now = Utc::now();
        let mut complaint = sample(now);
        complaint.touch(now - Duration::seconds(30));
        assert!(complaint.updated_at > now);
        assert!(complaint.updated_at < now + Duration::seconds(1));
    }

    #[test]
    fn test_change_set_after_clock_step_back_stays_chronological() {
        let now = Utc::now();
        let mut complaint = sample(now);
        let later = now + Duration::minutes(10);
        let (_, first) = complaint.apply_change_set(
            ChangeSet {
                patch: ComplaintPatch::default(),
                note: Some(NewUpdate::public("first").unwrap()),
            },
            later,
        );
        let (changed, second) = complaint.apply_change_set(
            ChangeSet {
                patch: ComplaintPatch::default(),
                note: Some(NewUpdate::public("second").unwrap()),
            },
            now + Duration::minutes(5),
        );
        let (first, second) = (first.unwrap(), second.unwrap());
        assert!(changed);
        assert!(second.created_at > first.created_at);
        assert_eq!(complaint.updated_at, second.created_at);
        assert!(complaint.invariant_violations().is_empty());
    }

    #[test]
    fn test_invariant_violations() {
        let now = Utc::now();
        assert!(sample(now).invariant_violations().is_empty());

        let mut broken = sample(now);
        broken.name = HeaplessString::try_from("  ").unwrap();
        broken.updated_at = now - Duration::seconds(1);
        assert_eq!(broken.invariant_violations(), vec!["name", "updated_at"]);

        let mut duplicated = sample(now);
        let entry = UpdateModel {
            id: Uuid::new_v4(),
            complaint_id: duplicated.id.clone(),
            message: "Checked.".to_string(),
            created_at: now,
            is_internal: true,
        };
        duplicated.updates = vec![entry.clone(), entry];
        assert_eq!(duplicated.invariant_violations(), vec!["updates"]);

        let mut out_of_order = sample(now);
        out_of_order.updated_at = now + Duration::hours(2);
        for offset in [2, 1] {
            out_of_order.updates.push(UpdateModel {
                id: Uuid::new_v4(),
                complaint_id: out_of_order.id.clone(),
                message: "Entry.".to_string(),
                created_at: now + Duration::hours(offset),
                is_internal: false,
            });
        }
        assert_eq!(out_of_order.invariant_violations(), vec!["updates"]);
    }

    #[test]
    fn test_assignee_validation() {
        assert_eq!(
            ComplaintPatch::assignee("   "),
            Err(RepositoryError::Validation(vec!["assigned_to".to_string()]))
        );
        assert!(ComplaintPatch::assignee(&"x".repeat(101)).is_err());
        assert_eq!(ComplaintPatch::assignee(" Billing Team ").unwrap().as_str(), "Billing Team");
    }
}
