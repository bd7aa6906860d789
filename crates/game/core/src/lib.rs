//! Deterministic turn-based combat rules.
//!
//! `combat-core` resolves a stream of submitted actions against an in-memory
//! encounter. [`CombatEngine`] holds the primitive state transitions (damage,
//! heal, buffs, statuses, upkeep, outcome, turn order) and
//! [`CombatActionProcessor`] composes them into whole turns. Rule tables
//! ([`StatusRegistry`], [`CombatConfig`]) and external data (skills, items,
//! ability scripts, randomness) are injected, so identical inputs always
//! replay identically.
pub mod action;
pub mod affinity;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;
pub mod status;
pub mod weapon;

pub use action::{ActionKind, CombatAction, CombatActionProcessor, ProcessError};
pub use affinity::{AffinityTier, Element, ResistanceProfile, tier_for_value};
pub use combat::AttackOutcome;
pub use config::CombatConfig;
pub use engine::{CombatEngine, HitFlags, NoReward, RewardProvider};
pub use env::{
    AbilityOracle, AbilityScript, AbilityTables, CombatEnv, Item, ItemEffect, ItemOracle,
    ItemTarget, ItemUseResult, OracleError, PcgRng, RngOracle, RollKind, ScriptEffect,
    ScriptTarget, Skill, SkillKind, SkillOracle, SkillStatus, SkillTargeting,
};
pub use error::{CombatError, ErrorSeverity};
pub use state::{
    ActiveBuff, CombatLogEntry, CombatOutcome, CombatSetup, CombatState, Combatant, CombatantId,
    CombatantState, MISS_ELEMENT, Reward, Side, StatusEffect, TurnSlot,
};
pub use stats::{Stat, StatBlock, UnknownStat, normalize_key};
pub use status::{StatusDefinition, StatusRegistry, StatusTarget, StatusTick, TickAmount, TickMode};
pub use weapon::{AttackKind, ChargeStep, WeaponChargeState, WeaponProfile, next_charge_step};
