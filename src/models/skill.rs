//! Skill model.
//!
//! Skill names are unique case-insensitively (and ignoring extra
//! whitespace). The normalized name doubles as the skill's identity, so
//! identity survives export/import round trips through raw name lists.

use serde::{Deserialize, Serialize};

/// A teachable skill (e.g. "Math", "Physical Education").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Normalized-name identity (see [`normalize_name`]).
    pub id: String,
    /// Display name, first-seen casing preserved.
    pub name: String,
}

impl Skill {
    /// Creates a skill from a raw name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: normalize_name(&name),
            name: name.trim().to_string(),
        }
    }
}

/// Normalizes a skill name for identity and dedup: trimmed, lowercased,
/// inner whitespace runs collapsed to single spaces.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Math"), "math");
        assert_eq!(normalize_name("  Physical   Education "), "physical education");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_skill_identity() {
        let a = Skill::new("Math");
        let b = Skill::new("math");
        assert_eq!(a.id, b.id);
        assert_eq!(a.name, "Math"); // casing preserved for display
        assert_eq!(b.name, "math");
    }
}
