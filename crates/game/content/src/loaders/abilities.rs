//! Support kit and skill override loader.

use std::path::Path;

use combat_core::AbilityTables;

use crate::loaders::{LoadResult, read_file};

/// Loader for ability tables from RON files.
///
/// The file is an [`AbilityTables`] value; keys are normalized after parsing
/// so authors may write `"Kestrel"` or `"smoke screen"`.
pub struct AbilityLoader;

impl AbilityLoader {
    pub fn load(path: &Path) -> LoadResult<AbilityTables> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<AbilityTables> {
        let tables: AbilityTables = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ability tables RON: {}", e))?;
        Ok(tables.normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{AbilityOracle, ScriptEffect, ScriptTarget, Stat};

    #[test]
    fn keys_are_normalized_after_parsing() {
        let tables = AbilityLoader::parse(
            r#"(
                support_kits: {
                    "Nyx": (
                        name: "Hex",
                        target: Enemy,
                        effects: [StatusTarget(status_id: "weaken", duration: 2, stacks: 1)],
                    ),
                },
                skill_overrides: {
                    "Iron Skin": (
                        target: SelfOnly,
                        effects: [BuffSelf(stat: "def", value: 5, duration: 3)],
                    ),
                },
            )"#,
        )
        .unwrap();

        let hex = tables.support_kit("nyx").unwrap();
        assert_eq!(hex.target, ScriptTarget::Enemy);
        let iron = tables.skill_override("iron_skin").unwrap();
        assert_eq!(
            iron.effects,
            vec![ScriptEffect::BuffSelf {
                stat: Stat::Defense,
                value: 5,
                duration: 3
            }]
        );
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let tables = AbilityLoader::parse("(support_kits: {})").unwrap();
        assert!(tables.support_kits.is_empty());
        assert!(tables.skill_overrides.is_empty());
    }
}
