//! Basic attacks, dispatched on the actor's weapon.

use tracing::{debug, warn};

use crate::env::RngOracle;
use crate::state::{CombatLogEntry, CombatState, CombatantId};
use crate::weapon::{AttackKind, ChargeStep, WeaponChargeState, WeaponProfile, next_charge_step};

use super::CombatActionProcessor;
use super::strike::{OnHitStatus, StrikeSpec};
use super::targeting::{TargetRule, all_targets, resolve_target};

impl CombatActionProcessor<'_> {
    pub(crate) fn basic_attack(
        &self,
        state: CombatState,
        rng: &dyn RngOracle,
        actor_id: &CombatantId,
        preferred: Option<&CombatantId>,
    ) -> CombatState {
        let weapon = state
            .definition(actor_id)
            .and_then(|definition| definition.weapon.clone());
        let Some(weapon) = weapon else {
            let state = self.engine.clear_weapon_charge(state, actor_id);
            return self.unarmed_attack(state, rng, actor_id, preferred);
        };

        match weapon.attack {
            AttackKind::SingleTarget => {
                let state = self.engine.clear_weapon_charge(state, actor_id);
                let Some(target_id) =
                    resolve_target(&state, actor_id, preferred, TargetRule::Opposing, true)
                else {
                    return no_target(state, actor_id);
                };
                self.strike(state, rng, actor_id, &target_id, &weapon_strike(&weapon))
            }
            AttackKind::AllEnemies => {
                let mut state = self.engine.clear_weapon_charge(state, actor_id);
                let spec = weapon_strike(&weapon);
                for target_id in all_targets(&state, actor_id, TargetRule::Opposing) {
                    state = self.strike(state, rng, actor_id, &target_id, &spec);
                }
                state
            }
            AttackKind::ChargedSplash {
                charge_turns,
                splash_multiplier,
            } => self.charged_attack(
                state,
                rng,
                actor_id,
                preferred,
                &weapon,
                charge_turns,
                splash_multiplier,
            ),
        }
    }

    /// Strength-scaled physical hit with the configured unarmed damage roll.
    pub(crate) fn unarmed_attack(
        &self,
        state: CombatState,
        rng: &dyn RngOracle,
        actor_id: &CombatantId,
        preferred: Option<&CombatantId>,
    ) -> CombatState {
        let Some(target_id) =
            resolve_target(&state, actor_id, preferred, TargetRule::Opposing, true)
        else {
            return no_target(state, actor_id);
        };
        let (min, max) = self.engine.config().unarmed_range();
        self.strike(state, rng, actor_id, &target_id, &StrikeSpec::physical(min, max))
    }

    #[allow(clippy::too_many_arguments)]
    fn charged_attack(
        &self,
        mut state: CombatState,
        rng: &dyn RngOracle,
        actor_id: &CombatantId,
        preferred: Option<&CombatantId>,
        weapon: &WeaponProfile,
        charge_turns: u32,
        splash_multiplier: f64,
    ) -> CombatState {
        let current = state
            .combatant(actor_id)
            .and_then(|actor| actor.weapon_charge.clone());

        let step = next_charge_step(charge_turns, &weapon.item_id, current.as_ref());
        let remaining_turns = match step {
            ChargeStep::Start { remaining_turns } | ChargeStep::Continue { remaining_turns } => {
                remaining_turns
            }
            ChargeStep::Release => {
                let state = self.engine.clear_weapon_charge(state, actor_id);
                return self.release_charge(
                    state,
                    rng,
                    actor_id,
                    preferred,
                    weapon,
                    splash_multiplier,
                );
            }
        };

        debug!(actor = %actor_id, weapon = %weapon.item_id, remaining_turns, "weapon charging");
        let name = state
            .definition(actor_id)
            .map_or_else(|| actor_id.to_string(), |definition| definition.name.clone());
        state.push_log(CombatLogEntry::ActionQueued {
            actor_id: actor_id.clone(),
            message: format!("{name} is charging {}", weapon.item_id),
        });
        self.engine.set_weapon_charge(
            state,
            actor_id,
            WeaponChargeState {
                weapon_item_id: weapon.item_id.clone(),
                remaining_turns,
            },
        )
    }

    fn release_charge(
        &self,
        state: CombatState,
        rng: &dyn RngOracle,
        actor_id: &CombatantId,
        preferred: Option<&CombatantId>,
        weapon: &WeaponProfile,
        splash_multiplier: f64,
    ) -> CombatState {
        let Some(primary) = resolve_target(&state, actor_id, preferred, TargetRule::Opposing, true)
        else {
            return no_target(state, actor_id);
        };
        debug!(actor = %actor_id, weapon = %weapon.item_id, target = %primary, "charge released");

        let spec = weapon_strike(weapon).unerring();
        let mut state = self.strike(state, rng, actor_id, &primary, &spec);

        let splash = StrikeSpec {
            power: spec.power * splash_multiplier.max(0.0),
            ..spec
        };
        for target_id in all_targets(&state, actor_id, TargetRule::Opposing) {
            if target_id != primary {
                state = self.strike(state, rng, actor_id, &target_id, &splash);
            }
        }
        state
    }
}

fn weapon_strike(weapon: &WeaponProfile) -> StrikeSpec {
    let (min, max) = weapon.damage_range();
    StrikeSpec {
        element: weapon.element,
        power: weapon.power_multiplier,
        on_hit: weapon.status_on_hit.as_ref().map(|status_id| OnHitStatus {
            status_id: status_id.clone(),
            chance: weapon.status_chance.min(100),
            duration: weapon.status_duration,
        }),
        ..StrikeSpec::physical(min, max)
    }
}

fn no_target(state: CombatState, actor_id: &CombatantId) -> CombatState {
    warn!(actor = %actor_id, "no valid target; attack does nothing");
    state
}
