//! Status effect definitions and the registry that resolves them.
//!
//! A status on a combatant is only an id, a duration and a stack count (see
//! [`crate::state::StatusEffect`]). Everything a status *does* lives in its
//! [`StatusDefinition`]: skip-turn behavior, per-turn ticks, damage
//! multipliers and defense bonuses. Unknown ids resolve to `None` and mean
//! "no special behavior".

mod definition;
mod registry;

pub use definition::{StatusDefinition, StatusTarget, StatusTick, TickAmount, TickMode};
pub use registry::StatusRegistry;
