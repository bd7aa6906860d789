use tracing::debug;

use crate::state::{CombatLogEntry, CombatState, CombatantId, StatusEffect};
use crate::status::TickMode;

use super::{CombatEngine, HitFlags};

impl CombatEngine<'_> {
    /// End-of-turn upkeep.
    ///
    /// First every status tick fires, for all combatants in turn order, from a
    /// snapshot of their statuses taken before any tick. Only then are status,
    /// buff and break durations decremented; entries reaching 0 are removed
    /// with one `StatusExpired` each.
    pub fn tick_end_of_turn(&self, state: CombatState) -> CombatState {
        let snapshots: Vec<(CombatantId, Vec<StatusEffect>)> = state
            .turn_order
            .iter()
            .filter_map(|slot| {
                let combatant = state.combatant(&slot.combatant_id)?;
                Some((slot.combatant_id.clone(), combatant.status_effects.clone()))
            })
            .collect();

        let mut state = state;
        for (id, effects) in &snapshots {
            for effect in effects {
                state = self.apply_tick(state, id, effect);
            }
        }
        self.decrement_durations(state)
    }

    fn apply_tick(
        &self,
        state: CombatState,
        id: &CombatantId,
        effect: &StatusEffect,
    ) -> CombatState {
        let Some(tick) = self.statuses.definition(&effect.id).and_then(|d| d.tick) else {
            return state;
        };
        let Some(combatant) = state.combatant(id) else {
            return state;
        };
        if !combatant.is_alive() {
            return state;
        }

        let source = format!("status_{}", effect.id);
        let amount = tick.amount.resolve(combatant.max_hp);
        match tick.mode {
            TickMode::Damage => {
                debug!(target = %id, status = %effect.id, amount, "status tick damage");
                self.apply_damage(state, &source, id, amount, tick.element, HitFlags::NORMAL)
            }
            TickMode::Heal => self.apply_heal(state, &source, id, amount),
        }
    }

    fn decrement_durations(&self, mut state: CombatState) -> CombatState {
        let mut expired = Vec::new();
        for slot in &state.turn_order {
            let Some(combatant) = state.combatants.get_mut(&slot.combatant_id) else {
                continue;
            };

            combatant.status_effects.retain_mut(|effect| {
                effect.remaining_turns = effect.remaining_turns.saturating_sub(1);
                let keep = effect.remaining_turns > 0;
                if !keep {
                    expired.push((slot.combatant_id.clone(), effect.id.clone()));
                }
                keep
            });
            combatant.buffs.retain_mut(|buff| {
                buff.remaining_turns = buff.remaining_turns.saturating_sub(1);
                let keep = buff.remaining_turns > 0;
                if !keep {
                    expired.push((slot.combatant_id.clone(), buff.log_id()));
                }
                keep
            });
            combatant.break_turns = combatant.break_turns.saturating_sub(1);
        }

        for (target_id, status_id) in expired {
            debug!(target = %target_id, status = %status_id, "status expired");
            state.push_log(CombatLogEntry::StatusExpired {
                target_id,
                status_id,
            });
        }
        state
    }
}
