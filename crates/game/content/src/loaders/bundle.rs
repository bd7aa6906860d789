//! Bundled content tables and the views the combat core consumes.

use combat_core::{
    AbilityTables, CombatActionProcessor, CombatConfig, CombatEngine, CombatEnv, RngOracle,
    StatusRegistry,
};

use crate::loaders::{
    AbilityLoader, ConfigLoader, ItemCatalog, ItemLoader, LoadResult, SkillBook, SkillLoader,
    StatusLoader,
};

const STATUSES_RON: &str = include_str!("../../data/statuses.ron");
const SKILLS_RON: &str = include_str!("../../data/skills.ron");
const ITEMS_RON: &str = include_str!("../../data/items.ron");
const ABILITIES_RON: &str = include_str!("../../data/abilities.ron");
const COMBAT_TOML: &str = include_str!("../../data/combat.toml");

/// Every table an encounter needs, owned in one place.
///
/// Randomness is not part of the bundle; callers pass their own
/// [`RngOracle`] when building an environment.
#[derive(Debug, Clone)]
pub struct ContentBundle {
    pub statuses: StatusRegistry,
    pub skills: SkillBook,
    pub items: ItemCatalog,
    pub abilities: AbilityTables,
    pub config: CombatConfig,
}

impl ContentBundle {
    /// Parses the tables compiled into this crate.
    pub fn embedded() -> LoadResult<Self> {
        Ok(Self {
            statuses: StatusLoader::parse(STATUSES_RON)?,
            skills: SkillLoader::parse(SKILLS_RON)?,
            items: ItemLoader::parse(ITEMS_RON)?,
            abilities: AbilityLoader::parse(ABILITIES_RON)?,
            config: ConfigLoader::parse(COMBAT_TOML)?,
        })
    }

    pub fn engine(&self) -> CombatEngine<'_> {
        CombatEngine::new(&self.statuses, &self.config)
    }

    pub fn env<'a>(&'a self, rng: &'a dyn RngOracle) -> CombatEnv<'a> {
        CombatEnv::with_all(&self.skills, &self.items, &self.abilities, rng)
    }

    pub fn processor<'a>(&'a self, rng: &'a dyn RngOracle) -> CombatActionProcessor<'a> {
        CombatActionProcessor::new(self.engine(), self.env(rng))
    }
}
