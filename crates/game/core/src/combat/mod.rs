//! Combat formulas.
//!
//! Pure functions shared by every attack path. They take plain numbers and a
//! [`CombatConfig`](crate::CombatConfig); rolling and state mutation live in
//! the engine and the action processor.

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{apply_crit, apply_incoming, physical_base_damage, scale_positive};
pub use hit::{calculate_crit_chance, calculate_hit_chance, check_crit, check_hit};
pub use result::AttackOutcome;
