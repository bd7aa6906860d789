//! Skill book loader.

use std::collections::HashMap;
use std::path::Path;

use combat_core::{Skill, SkillOracle, normalize_key};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Skill file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SkillFile {
    skills: Vec<Skill>,
}

/// In-memory [`SkillOracle`] keyed by normalized skill id.
#[derive(Debug, Clone, Default)]
pub struct SkillBook {
    skills: HashMap<String, Skill>,
}

impl SkillBook {
    pub fn new(skills: impl IntoIterator<Item = Skill>) -> Self {
        let mut book = Self::default();
        for skill in skills {
            book.insert(skill);
        }
        book
    }

    /// Adds a skill, replacing any skill with the same normalized id.
    pub fn insert(&mut self, skill: Skill) {
        let key = normalize_key(&skill.id);
        if self.skills.insert(key, skill).is_some() {
            tracing::warn!("duplicate skill id replaced");
        }
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl SkillOracle for SkillBook {
    fn skill(&self, skill_id: &str) -> Option<&Skill> {
        self.skills.get(&normalize_key(skill_id))
    }
}

/// Loader for the skill book from RON files.
pub struct SkillLoader;

impl SkillLoader {
    pub fn load(path: &Path) -> LoadResult<SkillBook> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<SkillBook> {
        let file: SkillFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill book RON: {}", e))?;
        Ok(SkillBook::new(file.skills))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{Element, SkillKind, SkillTargeting, Stat};

    #[test]
    fn stat_aliases_resolve_while_loading() {
        let book = SkillLoader::parse(
            r#"(
                skills: [
                    (
                        id: "arc_bolt",
                        kind: Damage,
                        base_power: 8,
                        scaling: "INT",
                        scaling_ratio: 0.5,
                        element: shock,
                        statuses: [(status_id: "stun", chance: 25)],
                    ),
                    (id: "patch", kind: Heal, base_power: 12, scaling: "wis", targeting: Ally),
                ],
            )"#,
        )
        .unwrap();

        let bolt = book.skill("Arc Bolt").unwrap();
        assert_eq!(bolt.scaling, Stat::Intelligence);
        assert_eq!(bolt.element, Element::Shock);
        assert_eq!(bolt.statuses[0].stacks, 1);
        assert_eq!(bolt.statuses[0].chance, 25);
        let patch = book.skill("patch").unwrap();
        assert_eq!(patch.kind, SkillKind::Heal);
        assert_eq!(patch.targeting, SkillTargeting::Ally);
        assert_eq!(patch.scaling_ratio, 1.0);
    }

    #[test]
    fn unknown_stat_names_fail_to_load() {
        let err = SkillLoader::parse(r#"(skills: [(id: "x", scaling: "charisma")])"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse skill book RON"));
    }
}
