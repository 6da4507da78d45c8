use chrono::{DateTime, Datelike, Utc};
use complaint_desk_db::models::complaint::{ComplaintId, ComplaintModel};
use complaint_desk_db::repository::error::{RepositoryError, RepositoryResult};
use complaint_desk_db::{Clock, IdentifierGenerator};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::id_generator::SequentialIdGenerator;

/// In-memory complaint store
///
/// All complaints and the identifier generator sit behind one lock. Writers
/// build the new state of a complaint on a private copy and swap it in before
/// releasing the lock, so readers only ever observe complete snapshots and a
/// failed mutation leaves the stored record untouched.
pub struct ComplaintRepositoryImpl {
    pub(super) state: RwLock<StoreState>,
    pub(super) clock: Arc<dyn Clock>,
}

pub(super) struct StoreState {
    pub(super) complaints: BTreeMap<ComplaintId, ComplaintModel>,
    pub(super) generator: Box<dyn IdentifierGenerator>,
}

impl ComplaintRepositoryImpl {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_generator(clock, Box::new(SequentialIdGenerator::new()))
    }

    pub fn with_generator(clock: Arc<dyn Clock>, generator: Box<dyn IdentifierGenerator>) -> Self {
        Self {
            state: RwLock::new(StoreState {
                complaints: BTreeMap::new(),
                generator,
            }),
            clock,
        }
    }

    /// Number of stored complaints
    pub fn len(&self) -> usize {
        self.state.read().complaints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `change` against a copy of the complaint and store the copy only
    /// if `change` succeeds.
    pub(super) fn mutate<R>(
        &self,
        id: &ComplaintId,
        change: impl FnOnce(&mut ComplaintModel, DateTime<Utc>) -> RepositoryResult<R>,
    ) -> RepositoryResult<(ComplaintModel, R)> {
        let mut state = self.state.write();
        let current = state
            .complaints
            .get(id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        let mut next = current.clone();
        let outcome = change(&mut next, self.clock.now())?;
        state.complaints.insert(id.clone(), next.clone());
        Ok((next, outcome))
    }
}

impl StoreState {
    /// Draw candidates until one is not taken. Must be called with the
    /// write lock held; that lock is what serializes concurrent submissions.
    pub(super) fn next_free_id(&mut self, now: DateTime<Utc>) -> RepositoryResult<ComplaintId> {
        let year = now.year();
        for _ in 0..ComplaintId::SLOTS_PER_YEAR {
            let candidate = self
                .generator
                .next_candidate(year)
                .ok_or(RepositoryError::IdentifierSpaceExhausted { year })?;
            if !self.complaints.contains_key(&candidate) {
                return Ok(candidate);
            }
            debug!(complaint_id = %candidate, "identifier already taken, regenerating");
        }
        Err(RepositoryError::IdentifierSpaceExhausted { year })
    }
}
