//! Encounter roster loader.

use std::collections::HashSet;
use std::path::Path;

use combat_core::{CombatSetup, Side};

use crate::loaders::{LoadResult, read_file};

/// Loader for encounter setups from RON files.
///
/// # RON Format
///
/// ```ron
/// (
///     party: [(id: "kestrel", side: Player, stats: (speed: 14))],
///     enemies: [(id: "drone#1", side: Enemy, tags: ["machine"])],
///     seed: Some(7),
/// )
/// ```
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> LoadResult<CombatSetup> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<CombatSetup> {
        let setup: CombatSetup = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse encounter RON: {}", e))?;
        Self::validate(&setup)?;
        Ok(setup)
    }

    fn validate(setup: &CombatSetup) -> LoadResult<()> {
        if setup.party.is_empty() {
            anyhow::bail!("Encounter has no party members");
        }
        if setup.enemies.is_empty() {
            anyhow::bail!("Encounter has no enemies");
        }

        let mut seen = HashSet::new();
        for combatant in setup.party.iter().chain(&setup.enemies) {
            if !seen.insert(combatant.id.as_str()) {
                anyhow::bail!("Duplicate combatant id '{}'", combatant.id);
            }
        }

        if let Some(misplaced) = setup.enemies.iter().find(|c| c.side != Side::Enemy) {
            tracing::warn!(
                id = %misplaced.id,
                side = ?misplaced.side,
                "enemy roster entry is not on the enemy side; it will fight as an enemy"
            );
        }
        Ok(())
    }
}
