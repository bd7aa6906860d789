//! Shared fixtures for combat-core integration tests.
#![allow(dead_code)]

use combat_core::{
    AbilityTables, Combatant, CombatActionProcessor, CombatConfig, CombatEngine, CombatEnv, Item,
    ItemOracle, ItemUseResult, RngOracle, Side, Skill, SkillOracle, StatBlock, StatusRegistry,
    normalize_key,
};

/// Oracle that answers every draw with the same value.
///
/// `roll_percent` yields `value % 100` and `range(min, max)` yields
/// `min + value % (max - min + 1)`, so a test can pick hits, crits and
/// weapon rolls exactly.
#[derive(Clone, Copy, Debug)]
pub struct FixedRng(pub u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

/// Hits at default accuracy, never crits without a bonus, rolls weapon minimum.
pub const LOW_ROLLS: FixedRng = FixedRng(0);
/// Misses everything that can miss.
pub const MISS_ROLLS: FixedRng = FixedRng(99);

#[derive(Debug, Default)]
pub struct TestSkills(pub Vec<Skill>);

impl SkillOracle for TestSkills {
    fn skill(&self, skill_id: &str) -> Option<&Skill> {
        let key = normalize_key(skill_id);
        self.0.iter().find(|skill| normalize_key(&skill.id) == key)
    }
}

#[derive(Debug, Default)]
pub struct TestItems(pub Vec<Item>);

impl ItemOracle for TestItems {
    fn item(&self, item_id: &str) -> Option<&Item> {
        let key = normalize_key(item_id);
        self.0.iter().find(|item| normalize_key(&item.id) == key)
    }

    fn use_item(&self, item_id: &str) -> Option<ItemUseResult> {
        self.item(item_id).map(|item| ItemUseResult {
            item_id: item.id.clone(),
            effect: item.effect.clone(),
        })
    }
}

/// Rule tables plus optional content, owned for the duration of a test.
pub struct Fixture {
    pub statuses: StatusRegistry,
    pub config: CombatConfig,
    pub skills: TestSkills,
    pub items: TestItems,
    pub abilities: AbilityTables,
}

impl Fixture {
    /// Builtin statuses and abilities, no damage variance.
    pub fn new() -> Self {
        init_tracing();
        Self {
            statuses: StatusRegistry::builtin(),
            config: CombatConfig {
                damage_variance: 0,
                ..CombatConfig::default()
            },
            skills: TestSkills::default(),
            items: TestItems::default(),
            abilities: AbilityTables::builtin(),
        }
    }

    pub fn engine(&self) -> CombatEngine<'_> {
        CombatEngine::new(&self.statuses, &self.config)
    }

    pub fn processor<'a>(&'a self, rng: &'a dyn RngOracle) -> CombatActionProcessor<'a> {
        let env = CombatEnv::with_all(&self.skills, &self.items, &self.abilities, rng);
        CombatActionProcessor::new(self.engine(), env)
    }
}

/// Routes engine logs to the test harness; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Default stats with crits disabled.
pub fn stats() -> StatBlock {
    StatBlock {
        crit_chance: 0,
        ..StatBlock::default()
    }
}

pub fn hero(id: &str) -> Combatant {
    Combatant::new(id, Side::Player, stats())
}

pub fn ally(id: &str) -> Combatant {
    Combatant::new(id, Side::Ally, stats())
}

pub fn enemy(id: &str) -> Combatant {
    Combatant::new(id, Side::Enemy, stats())
}
