//! Encounter state: the snapshot every engine operation consumes and returns.
//!
//! [`CombatState`] is a plain value. Engine operations take it by value and
//! hand back the next snapshot, so a caller can never observe a half-applied
//! action.
mod combatant;
mod common;
mod log;
mod setup;

use std::collections::BTreeMap;

pub use combatant::{ActiveBuff, Combatant, CombatantState, StatusEffect};
pub use common::{CombatantId, Side};
pub use log::{CombatLogEntry, CombatOutcome, MISS_ELEMENT, Reward};
pub use setup::{CombatSetup, TurnSlot};

use crate::env::{RollKind, compute_seed};

/// Whole-encounter snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    /// Initiative order, fixed at encounter start.
    pub turn_order: Vec<TurnSlot>,
    pub active_turn_index: usize,
    /// Starts at 1 and increments whenever the turn index wraps.
    pub round: u32,
    /// Static definitions, keyed by id.
    pub roster: BTreeMap<CombatantId, Combatant>,
    pub combatants: BTreeMap<CombatantId, CombatantState>,
    /// Append-only.
    pub log: Vec<CombatLogEntry>,
    pub outcome: Option<CombatOutcome>,
    pub seed: u64,
    /// Number of rolls drawn so far.
    pub rng_cursor: u64,
}

impl CombatState {
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Id of the combatant whose turn it is.
    pub fn active_combatant(&self) -> Option<&CombatantId> {
        self.turn_order
            .get(self.active_turn_index)
            .map(|slot| &slot.combatant_id)
    }

    pub fn combatant(&self, id: &CombatantId) -> Option<&CombatantState> {
        self.combatants.get(id)
    }

    pub fn definition(&self, id: &CombatantId) -> Option<&Combatant> {
        self.roster.get(id)
    }

    pub fn side_of(&self, id: &CombatantId) -> Option<Side> {
        self.roster.get(id).map(|definition| definition.side)
    }

    pub fn is_alive(&self, id: &CombatantId) -> bool {
        self.combatants.get(id).is_some_and(CombatantState::is_alive)
    }

    /// Living combatants on `side`'s team, in turn order.
    pub fn living(&self, side: Side) -> Vec<CombatantId> {
        self.turn_order
            .iter()
            .map(|slot| &slot.combatant_id)
            .filter(|id| self.side_of(id).is_some_and(|other| !other.opposes(side)))
            .filter(|id| self.is_alive(id))
            .cloned()
            .collect()
    }

    /// Living members of the team opposing `side`, in turn order.
    pub fn living_opponents(&self, side: Side) -> Vec<CombatantId> {
        let opposing = if side.is_party() { Side::Enemy } else { Side::Player };
        self.living(opposing)
    }

    pub fn has_living(&self, side: Side) -> bool {
        !self.living(side).is_empty()
    }

    /// Derives the seed for the next roll and advances the cursor.
    pub fn next_roll_seed(&mut self, kind: RollKind) -> u64 {
        let seed = compute_seed(self.seed, self.rng_cursor, kind as u32);
        self.rng_cursor += 1;
        seed
    }

    pub(crate) fn push_log(&mut self, entry: CombatLogEntry) {
        self.log.push(entry);
    }
}
