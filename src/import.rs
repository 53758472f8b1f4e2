//! Bulk roster import.
//!
//! Applies pre-extracted spreadsheet rows to the roster and skill index.
//! File decoding and row iteration belong to the caller; this module owns
//! the row semantics: an empty availability cell defaults to the full
//! week, skill names are split delimiter-tolerantly and deduplicated
//! within a row, unknown skills are created on demand, and a bad row is
//! counted and skipped without aborting the batch.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::{normalize_name, AvailabilitySet, Teacher};
use crate::parser::{self, ParseWarning};
use crate::roster::Roster;
use crate::skills::SkillIndex;

/// Splits a multi-value cell on `|`, `;`, or `,`, trimming each part and
/// dropping empties. Shared by skill lists and any other tolerant cell.
pub fn split_multi_value(text: &str) -> Vec<String> {
    text.split(['|', ';', ','])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// One pre-extracted teacher row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherRow {
    /// Display name; a row without one is skipped.
    pub name: String,
    /// Raw free-slot expression; empty means full availability.
    pub free_slots: String,
    /// Raw skills cell, delimiter-tolerant.
    pub skills: String,
}

/// Outcome counters for one import batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Teachers added to the roster.
    pub imported: usize,
    /// Rows dropped (missing name).
    pub skipped_rows: usize,
    /// Rows whose empty availability cell defaulted to the full week.
    pub defaulted_availability: usize,
    /// Skills created on demand across the batch.
    pub auto_created_skills: usize,
    /// Availability parse warnings, tagged with their 1-based row number.
    pub warnings: Vec<(usize, ParseWarning)>,
}

/// Imports a batch of teacher rows.
///
/// Each accepted row becomes a roster entry with a generated id; its
/// skills are resolved (creating unknown ones) and granted. Rows never
/// abort the batch: problems end up in the summary.
pub fn import_teachers(
    rows: &[TeacherRow],
    roster: &Roster,
    skills: &SkillIndex,
) -> ImportSummary {
    let mut summary = ImportSummary::default();

    for (index, row) in rows.iter().enumerate() {
        let row_no = index + 1;

        let name = row.name.trim();
        if name.is_empty() {
            summary.skipped_rows += 1;
            warn!(row = row_no, "import row skipped: missing name");
            continue;
        }

        let expression = row.free_slots.trim();
        let availability = if expression.is_empty() {
            summary.defaulted_availability += 1;
            info!(row = row_no, teacher_name = name, "availability defaulted to full week");
            AvailabilitySet::full()
        } else {
            let (set, row_warnings) = parser::parse(expression);
            for warning in row_warnings {
                warn!(row = row_no, reason = %warning.message, "availability entry dropped");
                summary.warnings.push((row_no, warning));
            }
            set
        };

        // Generated ids only collide when the caller registered teachers
        // by hand; skip past those.
        let mut teacher_id = roster.next_id();
        while roster.contains(&teacher_id) {
            teacher_id = roster.next_id();
        }
        roster.insert(
            Teacher::new(&teacher_id)
                .with_name(name)
                .with_availability(availability),
        );

        let mut seen = HashSet::new();
        for skill_name in split_multi_value(&row.skills) {
            if !seen.insert(normalize_name(&skill_name)) {
                info!(row = row_no, skill = %skill_name, "duplicate skill in row ignored");
                continue;
            }
            let is_new = skills.lookup(&skill_name).is_none();
            let skill = skills.resolve_or_create(&skill_name);
            if is_new {
                summary.auto_created_skills += 1;
                info!(row = row_no, skill = %skill.name, "skill auto-created");
            }
            skills.grant(&teacher_id, &skill.id);
        }

        summary.imported += 1;
        info!(row = row_no, teacher_id = %teacher_id, "import row added");
    }

    info!(
        imported = summary.imported,
        skipped = summary.skipped_rows,
        defaulted = summary.defaulted_availability,
        auto_created_skills = summary.auto_created_skills,
        "teacher import complete"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Period, TimeOfDay, TimeSlot};
    use crate::parser::ParseWarningKind;

    fn row(name: &str, free_slots: &str, skills: &str) -> TeacherRow {
        TeacherRow {
            name: name.to_string(),
            free_slots: free_slots.to_string(),
            skills: skills.to_string(),
        }
    }

    #[test]
    fn test_split_multi_value() {
        assert_eq!(
            split_multi_value("Math| Art ;PE, , Music"),
            vec!["Math", "Art", "PE", "Music"]
        );
        assert!(split_multi_value("").is_empty());
        assert!(split_multi_value(" ;| ").is_empty());
    }

    #[test]
    fn test_import_basic() {
        let roster = Roster::new();
        let skills = SkillIndex::new();

        let summary = import_teachers(
            &[
                row("Ada", "Mon 08:00-10:00", "Math|Art"),
                row("Ben", "", "math"),
            ],
            &roster,
            &skills,
        );

        assert_eq!(summary.imported, 2);
        assert_eq!(summary.skipped_rows, 0);
        assert_eq!(summary.defaulted_availability, 1);
        assert_eq!(summary.auto_created_skills, 2); // Math and Art; Ben reuses math
        assert!(summary.warnings.is_empty());

        let ada = roster.get("T1").unwrap();
        assert_eq!(ada.name, "Ada");
        assert_eq!(ada.availability.len(), 2);

        let ben = roster.get("T2").unwrap();
        assert_eq!(ben.availability.len(), 30); // defaulted

        assert_eq!(skills.len(), 2);
        assert!(skills.teacher_has("T1", "math"));
        assert!(skills.teacher_has("T1", "art"));
        assert!(skills.teacher_has("T2", "math"));
    }

    #[test]
    fn test_row_without_name_is_skipped() {
        let roster = Roster::new();
        let skills = SkillIndex::new();

        let summary = import_teachers(
            &[row("  ", "Mon 08:00", "Math"), row("Ada", "", "")],
            &roster,
            &skills,
        );

        assert_eq!(summary.imported, 1);
        assert_eq!(summary.skipped_rows, 1);
        assert_eq!(roster.len(), 1);
        assert!(skills.is_empty()); // skipped row creates nothing
    }

    #[test]
    fn test_parse_warnings_are_tagged_with_row() {
        let roster = Roster::new();
        let skills = SkillIndex::new();

        let summary = import_teachers(
            &[
                row("Ada", "Mon 08:00", ""),
                row("Ben", "Funday 09:00, Tue 09:00", ""),
            ],
            &roster,
            &skills,
        );

        assert_eq!(summary.imported, 2);
        assert_eq!(summary.warnings.len(), 1);
        let (row_no, warning) = &summary.warnings[0];
        assert_eq!(*row_no, 2);
        assert_eq!(warning.kind, ParseWarningKind::UnknownDay);

        // The partial availability survives the bad entry.
        let period = Period::starting_at(TimeOfDay::new(9, 0).unwrap()).unwrap();
        let ben = roster.get("T2").unwrap();
        assert!(ben.availability.contains(&TimeSlot::new(Day::Tuesday, period)));
        assert_eq!(ben.availability.len(), 1);
    }

    #[test]
    fn test_duplicate_skills_within_row_granted_once() {
        let roster = Roster::new();
        let skills = SkillIndex::new();

        let summary = import_teachers(&[row("Ada", "", "Math|math; MATH")], &roster, &skills);

        assert_eq!(summary.auto_created_skills, 1);
        assert_eq!(skills.len(), 1);
        assert_eq!(skills.skills_of("T1").len(), 1);
    }

    #[test]
    fn test_existing_skills_are_not_counted_as_created() {
        let roster = Roster::new();
        let skills = SkillIndex::new();
        skills.resolve_or_create("Math");

        let summary = import_teachers(&[row("Ada", "", "Math|Art")], &roster, &skills);

        assert_eq!(summary.auto_created_skills, 1); // only Art
        assert!(skills.teacher_has("T1", "math"));
    }

    #[test]
    fn test_generated_ids_skip_manual_entries() {
        let roster = Roster::new();
        let skills = SkillIndex::new();
        roster.insert(Teacher::new("T1").with_name("Manual"));

        let summary = import_teachers(&[row("Ada", "", "")], &roster, &skills);

        assert_eq!(summary.imported, 1);
        assert_eq!(roster.get("T1").unwrap().name, "Manual");
        assert_eq!(roster.get("T2").unwrap().name, "Ada");
    }
}
