use tracing::{debug, warn};

use crate::env::{AbilityScript, ScriptEffect, ScriptTarget};
use crate::state::{ActiveBuff, CombatState, CombatantId};
use crate::stats::Stat;

use super::CombatActionProcessor;
use super::targeting::{TargetRule, resolve_target};

impl CombatActionProcessor<'_> {
    /// Runs the actor's support kit, or Defend when it has none.
    pub(crate) fn support_ability(
        &self,
        state: CombatState,
        actor_id: &CombatantId,
        preferred: Option<&CombatantId>,
    ) -> CombatState {
        let kit_key = actor_id.kit_key();
        let script = self
            .env
            .abilities()
            .and_then(|abilities| abilities.support_kit(&kit_key));
        match script {
            Some(script) => self.run_script(state, actor_id, preferred, script),
            None => {
                debug!(actor = %actor_id, kit = %kit_key, "no support kit; defending");
                self.defend(state, actor_id)
            }
        }
    }

    /// Flat defense buff plus the defend status on the actor.
    pub(crate) fn defend(&self, state: CombatState, actor_id: &CombatantId) -> CombatState {
        let config = self.engine.config();
        let buff = ActiveBuff::new(
            Stat::Defense,
            config.defend_defense_bonus,
            config.defend_duration,
        );
        let state = self.engine.apply_buffs(state, actor_id, &[buff]);
        self.engine.apply_status(
            state,
            Some(actor_id),
            actor_id,
            &config.defend_status,
            config.defend_duration,
            1,
        )
    }

    /// Applies each scripted effect in order.
    ///
    /// Without a valid target the whole script is skipped.
    pub(crate) fn run_script(
        &self,
        mut state: CombatState,
        actor_id: &CombatantId,
        preferred: Option<&CombatantId>,
        script: &AbilityScript,
    ) -> CombatState {
        let rule = match script.target {
            ScriptTarget::Enemy => TargetRule::Opposing,
            ScriptTarget::Ally => TargetRule::Friendly,
            ScriptTarget::SelfOnly => TargetRule::SelfOnly,
        };
        let preferred = match script.target {
            ScriptTarget::SelfOnly => Some(actor_id),
            _ => preferred,
        };
        let Some(target_id) = resolve_target(&state, actor_id, preferred, rule, true) else {
            warn!(
                actor = %actor_id,
                ability = %script.name,
                "no valid target; ability does nothing"
            );
            return state;
        };
        debug!(actor = %actor_id, ability = %script.name, target = %target_id, "running ability");

        let engine = &self.engine;
        for effect in &script.effects {
            state = match effect {
                ScriptEffect::BuffSelf {
                    stat,
                    value,
                    duration,
                } => {
                    let buff = ActiveBuff::new(*stat, *value, *duration);
                    engine.apply_buffs(state, actor_id, &[buff])
                }
                ScriptEffect::BuffTarget {
                    stat,
                    value,
                    duration,
                } => {
                    let buff = ActiveBuff::new(*stat, *value, *duration);
                    engine.apply_buffs(state, &target_id, &[buff])
                }
                ScriptEffect::HealTarget {
                    base,
                    scaling,
                    ratio,
                } => {
                    let scaled = scaling
                        .map(|stat| f64::from(engine.stat(&state, actor_id, stat)) * ratio)
                        .unwrap_or(0.0);
                    let amount = base.saturating_add(scaled.round() as i32);
                    engine.apply_heal(state, actor_id.as_str(), &target_id, amount)
                }
                ScriptEffect::StatusTarget {
                    status_id,
                    duration,
                    stacks,
                } => engine.apply_status(
                    state,
                    Some(actor_id),
                    &target_id,
                    status_id,
                    *duration,
                    *stacks,
                ),
                ScriptEffect::StatusSelf {
                    status_id,
                    duration,
                    stacks,
                } => engine.apply_status(
                    state,
                    Some(actor_id),
                    actor_id,
                    status_id,
                    *duration,
                    *stacks,
                ),
            };
        }
        state
    }
}
