use tracing::info;

use crate::state::{CombatLogEntry, CombatOutcome, CombatState, Reward, Side};

use super::CombatEngine;

/// Supplies the victory payout. Invoked only once victory is confirmed.
pub trait RewardProvider {
    fn reward(&self) -> Option<Reward>;
}

impl<F> RewardProvider for F
where
    F: Fn() -> Option<Reward>,
{
    fn reward(&self) -> Option<Reward> {
        self()
    }
}

/// Provider that never pays out; victory yields an empty [`Reward`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NoReward;

impl RewardProvider for NoReward {
    fn reward(&self) -> Option<Reward> {
        None
    }
}

impl CombatEngine<'_> {
    /// Sets the outcome once a team has no living members.
    ///
    /// Victory is checked before defeat. A state that already has an outcome
    /// is returned untouched.
    pub fn resolve_outcome(
        &self,
        mut state: CombatState,
        rewards: &dyn RewardProvider,
    ) -> CombatState {
        if state.is_terminal() {
            return state;
        }

        let outcome = if !state.has_living(Side::Enemy) {
            CombatOutcome::Victory(rewards.reward().unwrap_or_default())
        } else if !state.has_living(Side::Player) {
            CombatOutcome::Defeat
        } else {
            return state;
        };

        info!(outcome = ?outcome, round = state.round, "encounter resolved");
        state.outcome = Some(outcome.clone());
        state.push_log(CombatLogEntry::Outcome { outcome });
        state
    }

    /// Ends the encounter as a retreat.
    pub fn retreat(&self, mut state: CombatState) -> CombatState {
        if state.is_terminal() {
            return state;
        }
        info!(round = state.round, "party retreated");
        state.outcome = Some(CombatOutcome::Retreat);
        state.push_log(CombatLogEntry::Outcome {
            outcome: CombatOutcome::Retreat,
        });
        state
    }
}
