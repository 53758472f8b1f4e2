//! Timetable domain models.
//!
//! Core data types for the weekly teaching grid and the entities
//! scheduled on it. Everything downstream (parser, indexes, engine)
//! operates on these typed values; raw expression text never leaves
//! the parser.

mod availability;
mod booking;
mod grid;
mod skill;
mod teacher;

pub use availability::AvailabilitySet;
pub use booking::{Booking, GradeClass};
pub use grid::{
    Day, Period, TimeOfDay, TimeSlot, DAY_END_MINUTES, DAY_START_MINUTES, LUNCH_END_MINUTES,
    LUNCH_START_MINUTES, PERIOD_MINUTES,
};
pub use skill::{normalize_name, Skill};
pub use teacher::Teacher;
