//! Status definition loader.

use std::path::Path;

use combat_core::{StatusDefinition, StatusRegistry};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Status catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCatalog {
    pub statuses: Vec<StatusDefinition>,
}

/// Loader for the status registry from RON files.
pub struct StatusLoader;

impl StatusLoader {
    pub fn load(path: &Path) -> LoadResult<StatusRegistry> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<StatusRegistry> {
        let catalog: StatusCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse status catalog RON: {}", e))?;
        Ok(StatusRegistry::from_definitions(catalog.statuses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{StatusTarget, TickAmount, TickMode};

    #[test]
    fn parses_ticks_aliases_and_targets() {
        let registry = StatusLoader::parse(
            r#"(
                statuses: [
                    (
                        id: "Corrode",
                        aliases: ["acid"],
                        combat_tags: ["corrode"],
                        default_duration: 2,
                        tick: Some((mode: Damage, amount: Fixed(4), element: toxic)),
                        defense_bonus: -2,
                    ),
                    (id: "haste", default_duration: 2, outgoing_multiplier: 1.1, target: Ally),
                ],
            )"#,
        )
        .unwrap();

        let corrode = registry.definition("ACID").unwrap();
        assert_eq!(corrode.id, "corrode");
        let tick = corrode.tick.unwrap();
        assert_eq!(tick.mode, TickMode::Damage);
        assert_eq!(tick.amount, TickAmount::Fixed(4));
        assert_eq!(registry.by_combat_tag("corrode").map(|d| d.id.as_str()), Some("corrode"));
        assert_eq!(registry.definition("haste").unwrap().target, StatusTarget::Ally);
        assert_eq!(registry.definition("haste").unwrap().incoming_multiplier, 1.0);
    }

    #[test]
    fn reports_parse_errors() {
        let err = StatusLoader::parse("(statuses: [(id: 5)])").unwrap_err();
        assert!(err.to_string().contains("Failed to parse status catalog RON"));
    }
}
