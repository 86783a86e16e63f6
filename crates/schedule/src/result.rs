//! Output type for lesson-date generation.

use serde::Serialize;

use crate::entry::ScheduleEntry;

/// Ordered lesson dates produced by one call to [`generate`](crate::generate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
    n_rollover: usize,
}

impl Schedule {
    /// Creates a schedule from its entries; the last `n_rollover` came from
    /// the roll-over scan.
    pub(crate) fn new(entries: Vec<ScheduleEntry>, n_rollover: usize) -> Self {
        Self {
            entries,
            n_rollover,
        }
    }

    /// Returns the entries in generation order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Consumes the schedule and returns the entries.
    pub fn into_entries(self) -> Vec<ScheduleEntry> {
        self.entries
    }

    /// Returns the formatted dates in generation order.
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(ScheduleEntry::text).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no date was generated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries appended by the roll-over scan.
    pub fn n_rollover(&self) -> usize {
        self.n_rollover
    }
}
