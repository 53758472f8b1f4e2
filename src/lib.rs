//! Teacher timetable allocation engine.
//!
//! Assigns teachers to weekly timetable slots (day x period x grade/class)
//! while enforcing three constraints: the teacher is free at the slot, the
//! teacher is not already booked elsewhere at the slot, and, where the cell
//! requires one, the teacher holds the needed skill.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Day`, `Period`, `TimeSlot`,
//!   `AvailabilitySet`, `Teacher`, `Skill`, `Booking`, `GradeClass`
//! - **`parser`**: Free-slot expression grammar, producing a typed
//!   `AvailabilitySet` plus non-fatal warnings
//! - **`skills`**: Bidirectional teacher/skill index with on-demand,
//!   race-free skill creation
//! - **`conflict`**: Committed-booking set with O(1) busy queries and
//!   atomic reservation
//! - **`roster`**: In-memory teacher directory the engine reads
//! - **`engine`**: The allocation engine: ordered validation, typed
//!   rejections, atomic commit
//! - **`import`**: Bulk roster import row semantics
//!
//! # Architecture
//!
//! The engine performs direct feasibility checks per proposed assignment.
//! It is not a constraint solver: nothing here searches for an optimal
//! timetable across all teachers. Callers propose one assignment at a
//! time and receive either a committed [`models::Booking`] or a typed
//! [`engine::AllocationError`] naming the invariant that blocked it.

pub mod conflict;
pub mod engine;
pub mod import;
pub mod models;
pub mod parser;
pub mod roster;
pub mod skills;
