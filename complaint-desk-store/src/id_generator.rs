use complaint_desk_db::models::complaint::ComplaintId;
use complaint_desk_db::IdentifierGenerator;

/// Per-year counter proposing `CMP-YYYY-001`, `CMP-YYYY-002`, ...
///
/// After `999` the counter wraps to `000` and continues, so once every slot
/// has been proposed the store's collision check decides whether any is free.
/// A new year restarts at `001`.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    year: Option<i32>,
    next: u16,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentifierGenerator for SequentialIdGenerator {
    fn next_candidate(&mut self, year: i32) -> Option<ComplaintId> {
        if self.year != Some(year) {
            self.year = Some(year);
            self.next = 1;
        }
        let sequence = self.next;
        self.next = (self.next + 1) % ComplaintId::SLOTS_PER_YEAR;
        ComplaintId::new(year, sequence)
    }
}
