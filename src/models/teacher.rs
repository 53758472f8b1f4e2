//! Teacher model.
//!
//! A teacher carries a stable identity, a display name, and an
//! [`AvailabilitySet`]. Skill membership is held by the skill index, not
//! on the entity. The allocation engine only reads teachers; mutation is
//! the persistence collaborator's responsibility.

use serde::{Deserialize, Serialize};

use super::{AvailabilitySet, Day, Period};

/// A teacher that can be booked into timetable slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Stable identity supplied by the persistence layer.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Slots the teacher is free to teach in.
    pub availability: AvailabilitySet,
}

impl Teacher {
    /// Creates a teacher with full weekly availability.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            availability: AvailabilitySet::full(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the availability set.
    pub fn with_availability(mut self, availability: AvailabilitySet) -> Self {
        self.availability = availability;
        self
    }

    /// Whether the teacher is free at (day, period).
    #[inline]
    pub fn is_free_at(&self, day: Day, period: Period) -> bool {
        self.availability.contains_at(day, period)
    }
}
