use std::cmp::Reverse;

use tracing::{debug, info, warn};

use crate::state::{
    CombatSetup, CombatState, Combatant, CombatantId, CombatantState, Side, TurnSlot,
};

use super::CombatEngine;

/// Turn ordering methods for CombatEngine.
impl CombatEngine<'_> {
    /// Builds the opening state of an encounter.
    ///
    /// Turn order is initiative descending, ties kept in roster order (party
    /// first). Every combatant starts at its stat block maxima. A duplicate id
    /// keeps its first definition.
    pub fn begin_encounter(&self, setup: CombatSetup) -> CombatState {
        let seed = setup.seed.unwrap_or_else(rand::random);
        let mut state = CombatState {
            round: 1,
            seed,
            ..CombatState::default()
        };

        let party = setup.party.into_iter().map(|mut member| {
            if member.side == Side::Enemy {
                member.side = Side::Ally;
            }
            member
        });
        let enemies = setup.enemies.into_iter().map(|mut enemy| {
            enemy.side = Side::Enemy;
            enemy
        });

        let mut order: Vec<TurnSlot> = Vec::new();
        for definition in party.chain(enemies) {
            if state.roster.contains_key(&definition.id) {
                warn!(combatant = %definition.id, "duplicate combatant id in setup; keeping first");
                continue;
            }
            order.push(TurnSlot {
                combatant_id: definition.id.clone(),
                initiative: definition.stats.initiative(),
            });
            insert_combatant(&mut state, definition);
        }
        order.sort_by_key(|slot| Reverse(slot.initiative));
        state.turn_order = order;

        info!(
            seed,
            combatants = state.turn_order.len(),
            "encounter begins"
        );
        self.skip_fallen(state)
    }

    /// Moves to the next slot, wrapping into a new round.
    pub fn advance(&self, mut state: CombatState) -> CombatState {
        if state.turn_order.is_empty() {
            return state;
        }
        state.active_turn_index += 1;
        if state.active_turn_index >= state.turn_order.len() {
            state.active_turn_index = 0;
            state.round += 1;
        }
        debug!(
            round = state.round,
            index = state.active_turn_index,
            active = ?state.active_combatant(),
            "turn advanced"
        );
        state
    }

    /// Advances past defeated combatants so the active slot is a living one.
    ///
    /// Leaves the index alone when nobody is alive.
    pub fn skip_fallen(&self, mut state: CombatState) -> CombatState {
        for _ in 0..state.turn_order.len() {
            match state.active_combatant() {
                Some(id) if !state.is_alive(id) => state = self.advance(state),
                _ => break,
            }
        }
        state
    }
}

fn insert_combatant(state: &mut CombatState, definition: Combatant) {
    let id: CombatantId = definition.id.clone();
    state
        .combatants
        .insert(id.clone(), CombatantState::from_definition(&definition));
    state.roster.insert(id, definition);
}
