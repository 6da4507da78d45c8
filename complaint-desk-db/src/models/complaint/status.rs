use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle status of a complaint
///
/// The normal flow is `received` → `in-progress` → `resolved`, but staff may
/// set any value directly, including moving backward or re-opening a
/// resolved ticket. Only strings outside this set are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "complaint_status", rename_all = "kebab-case"))]
pub enum ComplaintStatus {
    #[default]
    Received,
    InProgress,
    Resolved,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid complaint status: {0}")]
pub struct InvalidStatusError(pub String);

/// Direction of a status change relative to the normal flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    Forward,
    Backward,
}

impl ComplaintStatus {
    /// All statuses in lifecycle order
    pub const ALL: [ComplaintStatus; 3] = [
        ComplaintStatus::Received,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Received => "received",
            ComplaintStatus::InProgress => "in-progress",
            ComplaintStatus::Resolved => "resolved",
        }
    }

    /// Display label shown on status badges
    pub fn label(&self) -> &'static str {
        match self {
            ComplaintStatus::Received => "Received",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
        }
    }

    /// Terminal for the normal flow; staff can still re-open
    pub fn is_terminal(&self) -> bool {
        matches!(self, ComplaintStatus::Resolved)
    }

    fn rank(&self) -> u8 {
        match self {
            ComplaintStatus::Received => 0,
            ComplaintStatus::InProgress => 1,
            ComplaintStatus::Resolved => 2,
        }
    }

    pub fn transition_to(&self, next: ComplaintStatus) -> Transition {
        match self.rank().cmp(&next.rank()) {
            std::cmp::Ordering::Equal => Transition::Unchanged,
            std::cmp::Ordering::Less => Transition::Forward,
            std::cmp::Ordering::Greater => Transition::Backward,
        }
    }

    /// True when `next` moves a resolved ticket back into the open states
    pub fn is_reopen(&self, next: ComplaintStatus) -> bool {
        self.is_terminal() && !next.is_terminal()
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = InvalidStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "received" => Ok(ComplaintStatus::Received),
            "in-progress" => Ok(ComplaintStatus::InProgress),
            "resolved" => Ok(ComplaintStatus::Resolved),
            _ => Err(InvalidStatusError(s.to_string())),
        }
    }
}

/// Number of complaints per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub received: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: ComplaintStatus) {
        match status {
            ComplaintStatus::Received => self.received += 1,
            ComplaintStatus::InProgress => self.in_progress += 1,
            ComplaintStatus::Resolved => self.resolved += 1,
        }
    }

    pub fn get(&self, status: ComplaintStatus) -> usize {
        match status {
            ComplaintStatus::Received => self.received,
            ComplaintStatus::InProgress => self.in_progress,
            ComplaintStatus::Resolved => self.resolved,
        }
    }

    pub fn total(&self) -> usize {
        self.received + self.in_progress + self.resolved
    }
}
