//! Data-driven combat content and loaders.
//!
//! This crate houses the definition tables the combat core consumes and
//! provides loaders for RON/TOML data files:
//! - Status definitions (`statuses.ron`)
//! - Skill book (`skills.ron`)
//! - Item catalog (`items.ron`)
//! - Support kits and skill special cases (`abilities.ron`)
//! - Combat constants (`combat.toml`)
//! - Encounter rosters (`encounters/*.ron`)
//!
//! Content is consumed through combat-core's oracle traits and never appears
//! in combat state. A default copy of every table is embedded in the crate.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    AbilityLoader, ConfigLoader, ContentBundle, ContentFactory, ItemCatalog, ItemLoader,
    LoadResult, RosterLoader, SkillBook, SkillLoader, StatusLoader,
};
