//! Teacher availability model.
//!
//! An [`AvailabilitySet`] is the canonical, typed form of a free-slot
//! expression: the set of time slots a teacher may be booked into. All
//! downstream logic operates on this set, never on raw expression text.
//!
//! # Canonical Form
//! `canonical_form` renders the set as a comma-separated list of
//! `Mon 08:00-09:00` tokens in (day, period) order, the format existing
//! exported data uses. Feeding that string back through the parser
//! reproduces the same set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Day, Period, TimeSlot};

/// The set of time slots a teacher is free to teach in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySet {
    slots: BTreeSet<TimeSlot>,
}

impl AvailabilitySet {
    /// Creates an empty set (available nowhere).
    pub fn empty() -> Self {
        Self {
            slots: BTreeSet::new(),
        }
    }

    /// Creates the full weekly set: every teaching period, all five days.
    ///
    /// This is the default when a teacher supplies no expression.
    pub fn full() -> Self {
        let mut slots = BTreeSet::new();
        for day in Day::ALL {
            for period in Period::all() {
                slots.insert(TimeSlot::new(day, period));
            }
        }
        Self { slots }
    }

    /// Adds a slot. Returns `false` if it was already present.
    pub fn insert(&mut self, slot: TimeSlot) -> bool {
        self.slots.insert(slot)
    }

    /// Removes a slot. Returns `false` if it was absent.
    pub fn remove(&mut self, slot: &TimeSlot) -> bool {
        self.slots.remove(slot)
    }

    /// Whether the teacher is free at the given slot.
    #[inline]
    pub fn contains(&self, slot: &TimeSlot) -> bool {
        self.slots.contains(slot)
    }

    /// Whether the teacher is free at (day, period).
    #[inline]
    pub fn contains_at(&self, day: Day, period: Period) -> bool {
        self.slots.contains(&TimeSlot::new(day, period))
    }

    /// Number of free slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates slots in (day, period) order.
    pub fn iter(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter()
    }

    /// Renders the canonical expression for this set.
    ///
    /// Round-trips through the parser: `parse(canonical_form(a)) == a`.
    pub fn canonical_form(&self) -> String {
        let tokens: Vec<String> = self.slots.iter().map(|s| s.to_string()).collect();
        tokens.join(", ")
    }
}

impl FromIterator<TimeSlot> for AvailabilitySet {
    fn from_iter<I: IntoIterator<Item = TimeSlot>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}
