//! Content factory for loading combat tables from a data directory.

use std::path::{Path, PathBuf};

use combat_core::{AbilityTables, CombatConfig, CombatSetup, StatusRegistry};

use crate::loaders::{
    AbilityLoader, ConfigLoader, ContentBundle, ItemCatalog, ItemLoader, LoadResult, RosterLoader,
    SkillBook, SkillLoader, StatusLoader,
};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── combat.toml
/// ├── statuses.ron
/// ├── skills.ron
/// ├── items.ron
/// ├── abilities.ron
/// └── encounters/
///     ├── scrapyard.ron
///     └── relay_tower.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load combat constants from `combat.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        ConfigLoader::load(&self.data_dir.join("combat.toml"))
    }

    /// Load status definitions from `statuses.ron`.
    pub fn load_statuses(&self) -> LoadResult<StatusRegistry> {
        StatusLoader::load(&self.data_dir.join("statuses.ron"))
    }

    pub fn load_skills(&self) -> LoadResult<SkillBook> {
        SkillLoader::load(&self.data_dir.join("skills.ron"))
    }

    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load support kits and skill overrides from `abilities.ron`.
    pub fn load_abilities(&self) -> LoadResult<AbilityTables> {
        AbilityLoader::load(&self.data_dir.join("abilities.ron"))
    }

    /// Load every table into a [`ContentBundle`].
    pub fn load_bundle(&self) -> LoadResult<ContentBundle> {
        Ok(ContentBundle {
            statuses: self.load_statuses()?,
            skills: self.load_skills()?,
            items: self.load_items()?,
            abilities: self.load_abilities()?,
            config: self.load_config()?,
        })
    }

    /// Load an encounter from `encounters/{name}.ron`.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the encounter file (without `.ron` extension)
    pub fn load_encounter(&self, name: &str) -> LoadResult<CombatSetup> {
        let path = self
            .data_dir
            .join("encounters")
            .join(format!("{}.ron", name));
        RosterLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn bundled_directory_loads() {
        let factory = ContentFactory::bundled();
        let bundle = factory.load_bundle().unwrap();
        assert!(!bundle.statuses.is_empty());
        assert!(!bundle.skills.is_empty());

        let setup = factory.load_encounter("scrapyard").unwrap();
        assert!(!setup.enemies.is_empty());
    }

    #[test]
    fn missing_encounter_names_the_file() {
        let err = ContentFactory::bundled()
            .load_encounter("nowhere")
            .unwrap_err();
        assert!(err.to_string().contains("nowhere.ron"));
    }
}
