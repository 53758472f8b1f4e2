//! Teacher/skill index.
//!
//! Bidirectional many-to-many lookup between teachers and skills, with
//! on-demand skill creation. Skill names are unique case-insensitively;
//! [`SkillIndex::resolve_or_create`] is the only mutating path that
//! creates skills, and it performs its lookup-or-insert under a single
//! write lock so concurrent callers for the same name observe exactly
//! one skill.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::models::{normalize_name, Skill};

#[derive(Debug, Default)]
struct IndexInner {
    /// Skill id (normalized name) to skill.
    skills: HashMap<String, Skill>,
    /// Teacher id to held skill ids.
    teacher_skills: HashMap<String, HashSet<String>>,
    /// Skill id to holding teacher ids.
    skill_teachers: HashMap<String, HashSet<String>>,
}

/// Bidirectional teacher/skill lookup with on-demand skill creation.
///
/// Shared across concurrent allocation requests; all methods take `&self`.
#[derive(Debug, Default)]
pub struct SkillIndex {
    inner: RwLock<IndexInner>,
}

impl SkillIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the skill matching the name case-insensitively, creating
    /// and registering it if absent.
    ///
    /// At most one skill ever exists per distinct normalized name, even
    /// under concurrent callers.
    pub fn resolve_or_create(&self, name: &str) -> Skill {
        let key = normalize_name(name);
        let mut inner = self.inner.write().expect("skill index poisoned");
        inner
            .skills
            .entry(key)
            .or_insert_with(|| Skill::new(name))
            .clone()
    }

    /// Read-only resolve by name (case-insensitive).
    pub fn lookup(&self, name: &str) -> Option<Skill> {
        let inner = self.inner.read().expect("skill index poisoned");
        inner.skills.get(&normalize_name(name)).cloned()
    }

    /// Records that a teacher holds a skill.
    ///
    /// Returns `false` (and records nothing) when the skill id is not
    /// registered; resolve it first.
    pub fn grant(&self, teacher_id: &str, skill_id: &str) -> bool {
        let mut inner = self.inner.write().expect("skill index poisoned");
        if !inner.skills.contains_key(skill_id) {
            return false;
        }
        inner
            .teacher_skills
            .entry(teacher_id.to_string())
            .or_default()
            .insert(skill_id.to_string());
        inner
            .skill_teachers
            .entry(skill_id.to_string())
            .or_default()
            .insert(teacher_id.to_string());
        true
    }

    /// Removes a teacher-skill edge. Returns `false` if it was absent.
    pub fn revoke(&self, teacher_id: &str, skill_id: &str) -> bool {
        let mut inner = self.inner.write().expect("skill index poisoned");
        let removed = inner
            .teacher_skills
            .get_mut(teacher_id)
            .is_some_and(|set| set.remove(skill_id));
        if removed {
            if let Some(set) = inner.skill_teachers.get_mut(skill_id) {
                set.remove(teacher_id);
            }
        }
        removed
    }

    /// Drops every edge for a teacher (CRUD delete hook).
    pub fn remove_teacher(&self, teacher_id: &str) {
        let mut inner = self.inner.write().expect("skill index poisoned");
        if let Some(skill_ids) = inner.teacher_skills.remove(teacher_id) {
            for skill_id in skill_ids {
                if let Some(set) = inner.skill_teachers.get_mut(&skill_id) {
                    set.remove(teacher_id);
                }
            }
        }
    }

    /// Whether a teacher holds a skill.
    pub fn teacher_has(&self, teacher_id: &str, skill_id: &str) -> bool {
        let inner = self.inner.read().expect("skill index poisoned");
        inner
            .teacher_skills
            .get(teacher_id)
            .is_some_and(|set| set.contains(skill_id))
    }

    /// Skills held by a teacher, sorted by id for deterministic output.
    pub fn skills_of(&self, teacher_id: &str) -> Vec<Skill> {
        let inner = self.inner.read().expect("skill index poisoned");
        let mut skills: Vec<Skill> = inner
            .teacher_skills
            .get(teacher_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| inner.skills.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        skills.sort_by(|a, b| a.id.cmp(&b.id));
        skills
    }

    /// Teacher ids holding a skill, sorted for deterministic output.
    pub fn teachers_with(&self, skill_id: &str) -> Vec<String> {
        let inner = self.inner.read().expect("skill index poisoned");
        let mut ids: Vec<String> = inner
            .skill_teachers
            .get(skill_id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        ids.sort();
        ids
    }

    /// Number of registered skills.
    pub fn len(&self) -> usize {
        self.inner.read().expect("skill index poisoned").skills.len()
    }

    /// Whether no skills are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_resolve_or_create_dedups_case_insensitively() {
        let index = SkillIndex::new();
        let a = index.resolve_or_create("math");
        let b = index.resolve_or_create("Math");
        let c = index.resolve_or_create("  MATH ");

        assert_eq!(a.id, b.id);
        assert_eq!(b.id, c.id);
        assert_eq!(index.len(), 1);
        assert_eq!(a.name, "math"); // first-seen casing wins
    }

    #[test]
    fn test_lookup_does_not_create() {
        let index = SkillIndex::new();
        assert!(index.lookup("art").is_none());
        index.resolve_or_create("Art");
        assert_eq!(index.lookup("ART").unwrap().name, "Art");
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_bidirectional_lookup() {
        let index = SkillIndex::new();
        let math = index.resolve_or_create("Math");
        let art = index.resolve_or_create("Art");

        assert!(index.grant("T1", &math.id));
        assert!(index.grant("T1", &art.id));
        assert!(index.grant("T2", &math.id));

        let t1_skills: Vec<String> =
            index.skills_of("T1").into_iter().map(|s| s.id).collect();
        assert_eq!(t1_skills, vec!["art", "math"]);
        assert_eq!(index.teachers_with(&math.id), vec!["T1", "T2"]);
        assert_eq!(index.teachers_with(&art.id), vec!["T1"]);

        assert!(index.teacher_has("T1", &art.id));
        assert!(!index.teacher_has("T2", &art.id));
    }

    #[test]
    fn test_grant_requires_registered_skill() {
        let index = SkillIndex::new();
        assert!(!index.grant("T1", "welding"));
        assert!(!index.teacher_has("T1", "welding"));
    }

    #[test]
    fn test_revoke() {
        let index = SkillIndex::new();
        let math = index.resolve_or_create("Math");
        index.grant("T1", &math.id);

        assert!(index.revoke("T1", &math.id));
        assert!(!index.teacher_has("T1", &math.id));
        assert!(index.teachers_with(&math.id).is_empty());
        assert!(!index.revoke("T1", &math.id)); // already gone
    }

    #[test]
    fn test_remove_teacher_drops_all_edges() {
        let index = SkillIndex::new();
        let math = index.resolve_or_create("Math");
        let art = index.resolve_or_create("Art");
        index.grant("T1", &math.id);
        index.grant("T1", &art.id);

        index.remove_teacher("T1");
        assert!(index.skills_of("T1").is_empty());
        assert!(index.teachers_with(&math.id).is_empty());
        assert_eq!(index.len(), 2); // skills themselves survive
    }

    #[test]
    fn test_concurrent_resolve_creates_one_skill() {
        let index = Arc::new(SkillIndex::new());
        let names = ["math", "Math", "MATH", "mAtH"];

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let index = Arc::clone(&index);
                thread::spawn(move || index.resolve_or_create(names[i % names.len()]).id)
            })
            .collect();

        let ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(ids.iter().all(|id| id == "math"));
        assert_eq!(index.len(), 1);
    }
}
