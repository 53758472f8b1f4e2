//! Booking (committed session) model.
//!
//! A booking records that a teacher is committed to a (day, period,
//! grade/class) cell. Bookings are created only by a successful engine
//! commit and destroyed by an explicit deallocation; the engine treats
//! their lifetime as caller-controlled.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TimeSlot;

/// The grade/class column a booking is assigned into.
///
/// Opaque to the engine beyond being part of a booking's identity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum GradeClass {
    Grade1,
    Grade2,
    Grade3,
    Grade4,
    Grade5,
}

impl GradeClass {
    /// All grade/class columns, Grade 1 first.
    pub const ALL: [GradeClass; 5] = [
        GradeClass::Grade1,
        GradeClass::Grade2,
        GradeClass::Grade3,
        GradeClass::Grade4,
        GradeClass::Grade5,
    ];

    /// Parses `Grade N` or a legacy ordinal name (`First`..`Fifth`),
    /// case-insensitive. Older exports use the ordinal form.
    pub fn parse_token(token: &str) -> Option<GradeClass> {
        let lower = token.trim().to_lowercase();
        match lower.as_str() {
            "grade 1" | "first" => Some(GradeClass::Grade1),
            "grade 2" | "second" => Some(GradeClass::Grade2),
            "grade 3" | "third" => Some(GradeClass::Grade3),
            "grade 4" | "fourth" => Some(GradeClass::Grade4),
            "grade 5" | "fifth" => Some(GradeClass::Grade5),
            _ => None,
        }
    }
}

impl fmt::Display for GradeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GradeClass::Grade1 => "Grade 1",
            GradeClass::Grade2 => "Grade 2",
            GradeClass::Grade3 => "Grade 3",
            GradeClass::Grade4 => "Grade 4",
            GradeClass::Grade5 => "Grade 5",
        };
        f.write_str(label)
    }
}

/// A committed teacher-slot-class assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Assigned teacher.
    pub teacher_id: String,
    /// Where in the week the session happens.
    pub slot: TimeSlot,
    /// Which grade/class column the session belongs to.
    pub grade_class: GradeClass,
    /// Skill the cell requires, if any (skill identity).
    pub required_skill: Option<String>,
}

impl Booking {
    /// Creates a booking with no skill requirement.
    pub fn new(teacher_id: impl Into<String>, slot: TimeSlot, grade_class: GradeClass) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            slot,
            grade_class,
            required_skill: None,
        }
    }

    /// Sets the required skill.
    pub fn with_required_skill(mut self, skill_id: impl Into<String>) -> Self {
        self.required_skill = Some(skill_id.into());
        self
    }
}
