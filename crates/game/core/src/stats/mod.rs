//! Stat system for combatants.
//!
//! Two layers:
//! - **Canonical names** ([`Stat`]): every stat reference coming from skills,
//!   items, statuses or support kits resolves through [`Stat::canonical`], so
//!   `"atk"`, `"STR"` and `"strength"` all address the same value.
//! - **Stat blocks** ([`StatBlock`]): the immutable per-encounter numbers a
//!   combatant is authored with. Runtime buffs are layered on top by
//!   [`crate::state::CombatantState::effective`].

mod block;
mod canonical;

pub use block::StatBlock;
pub use canonical::{Stat, UnknownStat, normalize_key};
