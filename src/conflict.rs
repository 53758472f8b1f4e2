//! Committed-booking conflict tracking.
//!
//! Tracks which (teacher, day, period) keys are already taken and
//! answers "is this teacher busy here?" in O(1). [`ConflictTracker::reserve`]
//! is an insert into a set guarded by one mutex: the insert either claims
//! the key or observes it taken, which is the compare-and-set that keeps
//! double-booking impossible under concurrent allocation requests. This
//! is the in-process form of the unique (day, slot, teacher) index the
//! persistent store enforces.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::models::TimeSlot;

/// A reservation key: one teacher at one slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct BookingKey {
    teacher_id: String,
    slot: TimeSlot,
}

/// Records committed reservations and rejects duplicates.
///
/// Created once per process/session; queried and mutated only through
/// this contract.
#[derive(Debug, Default)]
pub struct ConflictTracker {
    reserved: Mutex<HashSet<BookingKey>>,
}

impl ConflictTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the teacher already holds a reservation at the slot.
    pub fn is_busy(&self, teacher_id: &str, slot: TimeSlot) -> bool {
        let reserved = self.reserved.lock().expect("conflict tracker poisoned");
        reserved.contains(&BookingKey {
            teacher_id: teacher_id.to_string(),
            slot,
        })
    }

    /// Claims the (teacher, slot) key.
    ///
    /// Returns `false` when the key is already reserved: a second
    /// reservation is rejected, never merged. The insert under the lock
    /// guarantees at most one caller ever gets `true` for a given key.
    #[must_use]
    pub fn reserve(&self, teacher_id: &str, slot: TimeSlot) -> bool {
        let mut reserved = self.reserved.lock().expect("conflict tracker poisoned");
        reserved.insert(BookingKey {
            teacher_id: teacher_id.to_string(),
            slot,
        })
    }

    /// Releases a reservation (the un-assign hook).
    ///
    /// Returns `false` when no such reservation exists, so callers can
    /// detect stale references instead of silently succeeding.
    pub fn release(&self, teacher_id: &str, slot: TimeSlot) -> bool {
        let mut reserved = self.reserved.lock().expect("conflict tracker poisoned");
        reserved.remove(&BookingKey {
            teacher_id: teacher_id.to_string(),
            slot,
        })
    }

    /// Number of live reservations.
    pub fn len(&self) -> usize {
        self.reserved.lock().expect("conflict tracker poisoned").len()
    }

    /// Whether no reservations exist.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
