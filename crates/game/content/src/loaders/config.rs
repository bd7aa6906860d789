//! Combat configuration loader.

use std::path::Path;

use combat_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`CombatConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse combat config TOML: {}", e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("crit_multiplier = 2.0\nbreak_duration = 3\n").unwrap();
        assert_eq!(config.crit_multiplier, 2.0);
        assert_eq!(config.break_duration, 3);
        assert_eq!(config.min_hit_chance, CombatConfig::default().min_hit_chance);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let err = ConfigLoader::parse("crit_multiplier = \"lots\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse combat config TOML"));
    }
}
