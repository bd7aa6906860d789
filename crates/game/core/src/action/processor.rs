use tracing::{debug, warn};

use crate::engine::{CombatEngine, RewardProvider};
use crate::env::CombatEnv;
use crate::state::{CombatLogEntry, CombatState, CombatantId};

use super::{CombatAction, ProcessError};

/// Reason logged when a downed combatant is asked to act.
pub const DOWNED_REASON: &str = "down";

/// Drives one submitted action to completion.
#[derive(Clone, Copy, Debug)]
pub struct CombatActionProcessor<'a> {
    pub(super) engine: CombatEngine<'a>,
    pub(super) env: CombatEnv<'a>,
}

impl<'a> CombatActionProcessor<'a> {
    pub fn new(engine: CombatEngine<'a>, env: CombatEnv<'a>) -> Self {
        Self { engine, env }
    }

    pub fn engine(&self) -> &CombatEngine<'a> {
        &self.engine
    }

    /// Resolves `action` against `state` and returns the next snapshot.
    ///
    /// Terminal states and unknown actors come back unchanged. A downed or
    /// status-blocked actor loses the turn with a `TurnSkipped` entry. Every
    /// other action ends with end-of-turn upkeep, outcome resolution and a
    /// turn advance; Flee skips all three.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::MissingOracle`] when the action needs a provider
    /// the environment lacks.
    pub fn process(
        &self,
        state: CombatState,
        action: &CombatAction,
        rewards: &dyn RewardProvider,
    ) -> Result<CombatState, ProcessError> {
        if state.is_terminal() {
            return Ok(state);
        }

        let actor_id = action.actor_id();
        let Some(actor) = state.combatant(actor_id) else {
            warn!(actor = %actor_id, kind = %action.kind(), "action from unknown combatant");
            return Ok(state);
        };

        let skip_reason = if actor.is_alive() {
            self.blocking_reason(&state, actor_id)
        } else {
            Some(DOWNED_REASON.to_owned())
        };
        if let Some(reason) = skip_reason {
            debug!(actor = %actor_id, %reason, "turn skipped");
            let mut state = state;
            state.push_log(CombatLogEntry::TurnSkipped {
                actor_id: actor_id.clone(),
                reason,
            });
            return Ok(self.finalize(state, rewards));
        }

        debug!(actor = %actor_id, kind = %action.kind(), "resolving action");
        let state = match action {
            CombatAction::BasicAttack { .. } => state,
            _ => self.engine.clear_weapon_charge(state, actor_id),
        };

        let kind = action.kind();
        let state = match action {
            CombatAction::BasicAttack { target_id, .. } => {
                let rng = self.env.rng().map_err(ProcessError::oracle(kind))?;
                self.basic_attack(state, rng, actor_id, target_id.as_ref())
            }
            CombatAction::SupportAbility { target_id, .. } => {
                self.support_ability(state, actor_id, target_id.as_ref())
            }
            CombatAction::SkillUse {
                skill_id,
                target_ids,
                ..
            } => self.skill_use(state, actor_id, skill_id, target_ids)?,
            CombatAction::ItemUse {
                item_id, target_id, ..
            } => self.item_use(state, kind, actor_id, item_id, target_id.as_ref())?,
            CombatAction::SnackUse {
                item_id, target_id, ..
            } => self.item_use(state, kind, actor_id, item_id, target_id.as_ref())?,
            CombatAction::Defend { .. } => self.defend(state, actor_id),
            CombatAction::Flee { .. } => return Ok(self.engine.retreat(state)),
        };

        Ok(self.finalize(state, rewards))
    }

    /// Skip reason of the first blocking status the actor carries.
    fn blocking_reason(&self, state: &CombatState, actor_id: &CombatantId) -> Option<String> {
        let statuses = self.engine.statuses();
        state.combatant(actor_id)?.status_effects.iter().find_map(|effect| {
            statuses
                .definition(&effect.id)
                .and_then(|definition| definition.blocking_reason())
                .map(str::to_owned)
        })
    }

    /// Tick, resolve the outcome, then advance unless the encounter ended.
    fn finalize(&self, state: CombatState, rewards: &dyn RewardProvider) -> CombatState {
        if state.is_terminal() {
            return state;
        }
        let state = self.engine.tick_end_of_turn(state);
        let state = self.engine.resolve_outcome(state, rewards);
        if state.is_terminal() {
            return state;
        }
        let state = self.engine.advance(state);
        self.engine.skip_fallen(state)
    }
}
