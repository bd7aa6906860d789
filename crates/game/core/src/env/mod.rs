//! Traits describing read-only combat data.
//!
//! Oracles expose skill metadata, item consumption, ability scripts and the
//! random source. [`CombatEnv`] bundles them so the action processor can reach
//! everything it needs without coupling to concrete implementations.
mod abilities;
mod error;
mod items;
mod rng;
mod skills;

use std::fmt;

pub use abilities::{AbilityOracle, AbilityScript, AbilityTables, ScriptEffect, ScriptTarget};
pub use error::OracleError;
pub use items::{Item, ItemEffect, ItemOracle, ItemTarget, ItemUseResult};
pub use rng::{PcgRng, RngOracle, RollKind, compute_seed};
pub use skills::{Skill, SkillKind, SkillOracle, SkillStatus, SkillTargeting};

/// Aggregates the read-only oracles used while resolving actions.
#[derive(Clone, Copy, Default)]
pub struct CombatEnv<'a> {
    skills: Option<&'a dyn SkillOracle>,
    items: Option<&'a dyn ItemOracle>,
    abilities: Option<&'a dyn AbilityOracle>,
    rng: Option<&'a dyn RngOracle>,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        skills: Option<&'a dyn SkillOracle>,
        items: Option<&'a dyn ItemOracle>,
        abilities: Option<&'a dyn AbilityOracle>,
        rng: Option<&'a dyn RngOracle>,
    ) -> Self {
        Self {
            skills,
            items,
            abilities,
            rng,
        }
    }

    pub fn with_all(
        skills: &'a dyn SkillOracle,
        items: &'a dyn ItemOracle,
        abilities: &'a dyn AbilityOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self::new(Some(skills), Some(items), Some(abilities), Some(rng))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_skills(mut self, skills: &'a dyn SkillOracle) -> Self {
        self.skills = Some(skills);
        self
    }

    #[must_use]
    pub fn with_items(mut self, items: &'a dyn ItemOracle) -> Self {
        self.items = Some(items);
        self
    }

    #[must_use]
    pub fn with_abilities(mut self, abilities: &'a dyn AbilityOracle) -> Self {
        self.abilities = Some(abilities);
        self
    }

    #[must_use]
    pub fn with_rng(mut self, rng: &'a dyn RngOracle) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Returns the SkillOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SkillsNotAvailable` if no skill oracle was provided.
    pub fn skills(&self) -> Result<&'a dyn SkillOracle, OracleError> {
        self.skills.ok_or(OracleError::SkillsNotAvailable)
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item oracle was provided.
    pub fn items(&self) -> Result<&'a dyn ItemOracle, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Ability scripts are optional; without them support kits fall back to
    /// Defend and no skill is special-cased.
    pub fn abilities(&self) -> Option<&'a dyn AbilityOracle> {
        self.abilities
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no RNG oracle was provided.
    pub fn rng(&self) -> Result<&'a dyn RngOracle, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl fmt::Debug for CombatEnv<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombatEnv")
            .field("skills", &self.skills.is_some())
            .field("items", &self.items.is_some())
            .field("abilities", &self.abilities.is_some())
            .field("rng", &self.rng.is_some())
            .finish()
    }
}
