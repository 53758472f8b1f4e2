//! Allocation engine.
//!
//! Orchestrates a single assignment request: validates grid bounds,
//! availability, conflicts, and skill match in order, then commits or
//! rejects. Rejections are typed and mutate nothing; the engine reports
//! which invariant blocked the request and leaves user-facing messaging
//! to the calling layer.
//!
//! # Concurrency
//! Validation steps are ordered reads. The commit is a single atomic
//! insert in the [`ConflictTracker`]; a request that loses the commit
//! race reports [`AllocationError::TeacherBusyConflict`] exactly as if
//! the busy check had caught it. At most one of N concurrent requests
//! for the same (teacher, day, period) key ever receives a booking.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::conflict::ConflictTracker;
use crate::models::{normalize_name, Booking, Day, GradeClass, Period, TimeOfDay, TimeSlot};
use crate::roster::Roster;
use crate::skills::SkillIndex;

/// Why an allocation request was rejected.
///
/// One variant per blocked invariant, in validation order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// No teacher with this id.
    #[error("Teacher not found: {0}")]
    TeacherNotFound(String),

    /// No teaching period at the requested time (outside 08:00-15:00,
    /// inside lunch, or off the hour boundary).
    #[error("No teaching period at {day} {start}")]
    SlotOutOfGrid { day: Day, start: TimeOfDay },

    /// The slot is not in the teacher's availability set.
    #[error("Teacher {teacher_id} is not free at {slot}")]
    TeacherUnavailable { teacher_id: String, slot: TimeSlot },

    /// The teacher already holds a booking at the slot.
    #[error("Teacher {teacher_id} is already allocated at {slot}")]
    TeacherBusyConflict { teacher_id: String, slot: TimeSlot },

    /// The cell requires a skill the teacher does not hold.
    #[error("Teacher {teacher_id} does not have skill '{skill_id}'")]
    SkillMismatch { teacher_id: String, skill_id: String },
}

/// Why a deallocation request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeallocationError {
    /// No booking exists for the key; the caller holds a stale reference.
    #[error("No booking for teacher {teacher_id} at {day} {start}")]
    BookingNotFound {
        teacher_id: String,
        day: Day,
        start: TimeOfDay,
    },
}

/// Per-teacher feasibility snapshot for one grid cell.
///
/// Read-only view for selection UIs (e.g. greying out busy teachers);
/// nothing here commits anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotOption {
    /// Teacher identity.
    pub teacher_id: String,
    /// Teacher display name.
    pub teacher_name: String,
    /// Slot is in the teacher's availability set.
    pub available: bool,
    /// Teacher already holds a booking at the slot.
    pub busy: bool,
    /// Teacher holds the cell's required skill (true when none required).
    pub has_skill: bool,
    /// All three checks pass; the teacher could be allocated here.
    pub selectable: bool,
}

/// Decides whether a proposed assignment is legal and commits it.
///
/// Reads teachers from the [`Roster`] and skill membership from the
/// [`SkillIndex`]; owns the [`ConflictTracker`] that holds committed
/// reservations. One engine per process/session.
#[derive(Debug)]
pub struct AllocationEngine {
    roster: Arc<Roster>,
    skills: Arc<SkillIndex>,
    tracker: ConflictTracker,
}

impl AllocationEngine {
    /// Creates an engine over the given roster and skill index.
    pub fn new(roster: Arc<Roster>, skills: Arc<SkillIndex>) -> Self {
        Self {
            roster,
            skills,
            tracker: ConflictTracker::new(),
        }
    }

    /// Validates and commits one assignment.
    ///
    /// Checks run in order and short-circuit on the first failure:
    /// teacher exists, slot on the grid, teacher available, teacher not
    /// busy, required skill held. On success the reservation is claimed
    /// atomically and a [`Booking`] is returned. On any failure no state
    /// changes.
    ///
    /// `required_skill` accepts a skill id or a raw display name; both
    /// resolve through the same normalization.
    pub fn allocate(
        &self,
        teacher_id: &str,
        day: Day,
        start: TimeOfDay,
        grade_class: GradeClass,
        required_skill: Option<&str>,
    ) -> Result<Booking, AllocationError> {
        let Some(teacher) = self.roster.get(teacher_id) else {
            return Err(rejected(AllocationError::TeacherNotFound(
                teacher_id.to_string(),
            )));
        };

        let Some(period) = Period::starting_at(start) else {
            return Err(rejected(AllocationError::SlotOutOfGrid { day, start }));
        };
        let slot = TimeSlot::new(day, period);

        if !teacher.availability.contains(&slot) {
            return Err(rejected(AllocationError::TeacherUnavailable {
                teacher_id: teacher.id,
                slot,
            }));
        }

        if self.tracker.is_busy(&teacher.id, slot) {
            return Err(rejected(AllocationError::TeacherBusyConflict {
                teacher_id: teacher.id,
                slot,
            }));
        }

        let skill_id = required_skill.map(normalize_name);
        if let Some(skill_id) = &skill_id {
            if !self.skills.teacher_has(&teacher.id, skill_id) {
                return Err(rejected(AllocationError::SkillMismatch {
                    teacher_id: teacher.id,
                    skill_id: skill_id.clone(),
                }));
            }
        }

        // Commit point: the insert re-checks the busy condition and
        // claims the key in one step. Losing the race to a concurrent
        // request is indistinguishable from the busy check above.
        if !self.tracker.reserve(&teacher.id, slot) {
            return Err(rejected(AllocationError::TeacherBusyConflict {
                teacher_id: teacher.id,
                slot,
            }));
        }

        let mut booking = Booking::new(teacher.id, slot, grade_class);
        if let Some(skill_id) = skill_id {
            booking = booking.with_required_skill(skill_id);
        }
        info!(
            teacher_id = %booking.teacher_id,
            slot = %booking.slot,
            grade_class = %booking.grade_class,
            "allocation committed"
        );
        Ok(booking)
    }

    /// Releases a committed booking (the un-assign operation).
    ///
    /// Reports [`DeallocationError::BookingNotFound`] when no booking
    /// exists for the key, so stale references surface instead of
    /// silently succeeding.
    pub fn deallocate(
        &self,
        teacher_id: &str,
        day: Day,
        start: TimeOfDay,
    ) -> Result<(), DeallocationError> {
        let released = Period::starting_at(start)
            .map(|period| self.tracker.release(teacher_id, TimeSlot::new(day, period)))
            .unwrap_or(false);

        if released {
            info!(teacher_id, day = %day, start = %start, "allocation released");
            Ok(())
        } else {
            warn!(teacher_id, day = %day, start = %start, "release of unknown booking");
            Err(DeallocationError::BookingNotFound {
                teacher_id: teacher_id.to_string(),
                day,
                start,
            })
        }
    }

    /// Whether the teacher already holds a booking at (day, start).
    ///
    /// Read-only; times off the grid are never busy.
    pub fn is_busy(&self, teacher_id: &str, day: Day, start: TimeOfDay) -> bool {
        Period::starting_at(start)
            .map(|period| self.tracker.is_busy(teacher_id, TimeSlot::new(day, period)))
            .unwrap_or(false)
    }

    /// Feasibility snapshot of every teacher for one grid cell.
    ///
    /// Returns an empty list for times off the grid. Teachers come back
    /// in id order.
    pub fn slot_options(
        &self,
        day: Day,
        start: TimeOfDay,
        required_skill: Option<&str>,
    ) -> Vec<SlotOption> {
        let Some(period) = Period::starting_at(start) else {
            return Vec::new();
        };
        let slot = TimeSlot::new(day, period);
        let skill_id = required_skill.map(normalize_name);

        self.roster
            .ids()
            .into_iter()
            .filter_map(|id| self.roster.get(&id))
            .map(|teacher| {
                let available = teacher.availability.contains(&slot);
                let busy = self.tracker.is_busy(&teacher.id, slot);
                let has_skill = skill_id
                    .as_deref()
                    .map_or(true, |sid| self.skills.teacher_has(&teacher.id, sid));
                SlotOption {
                    selectable: available && !busy && has_skill,
                    teacher_id: teacher.id,
                    teacher_name: teacher.name,
                    available,
                    busy,
                    has_skill,
                }
            })
            .collect()
    }
}

fn rejected(error: AllocationError) -> AllocationError {
    warn!(reason = %error, "allocation rejected");
    error
}
