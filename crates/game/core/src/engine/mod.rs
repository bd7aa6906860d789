//! Engine primitives over [`CombatState`].
//!
//! [`CombatEngine`] owns nothing but references to the read-only rule tables.
//! Every state-changing primitive consumes a [`CombatState`] and returns the
//! next one. An id that is not in the state makes the primitive a no-op that
//! hands its input back unchanged.

mod effects;
mod outcome;
mod tick;
mod turns;

pub use effects::HitFlags;
pub use outcome::{NoReward, RewardProvider};

use crate::affinity::{AffinityTier, Element};
use crate::combat::scale_positive;
use crate::config::CombatConfig;
use crate::state::{CombatState, Combatant, CombatantId};
use crate::stats::Stat;
use crate::status::StatusRegistry;

/// Combat rules bound to one status registry and configuration.
#[derive(Clone, Copy, Debug)]
pub struct CombatEngine<'a> {
    statuses: &'a StatusRegistry,
    config: &'a CombatConfig,
}

impl<'a> CombatEngine<'a> {
    pub fn new(statuses: &'a StatusRegistry, config: &'a CombatConfig) -> Self {
        Self { statuses, config }
    }

    pub fn statuses(&self) -> &'a StatusRegistry {
        self.statuses
    }

    pub fn config(&self) -> &'a CombatConfig {
        self.config
    }

    /// Affinity of `target` against `element`. Unknown targets are neutral.
    pub fn affinity(&self, target: Option<&Combatant>, element: Element) -> AffinityTier {
        target.map_or(AffinityTier::Neutral, |definition| {
            definition.resistance_profile().tier(element)
        })
    }

    /// Scales `base_damage` by the target's affinity to `element`.
    ///
    /// Rounds to nearest; a positive result is at least 1, otherwise 0.
    pub fn calculate_damage(
        &self,
        target: Option<&Combatant>,
        base_damage: i32,
        element: Element,
    ) -> i32 {
        let tier = self.affinity(target, element);
        scale_positive(f64::from(base_damage) * tier.multiplier())
    }

    /// Product of the outgoing multipliers of `id`'s active statuses.
    pub fn outgoing_multiplier(&self, state: &CombatState, id: &CombatantId) -> f64 {
        state.combatant(id).map_or(1.0, |combatant| {
            combatant
                .status_effects
                .iter()
                .filter_map(|effect| self.statuses.definition(&effect.id))
                .map(|definition| definition.outgoing_multiplier)
                .product()
        })
    }

    /// Product of incoming multipliers, including the break window.
    pub fn incoming_multiplier(&self, state: &CombatState, id: &CombatantId) -> f64 {
        let Some(combatant) = state.combatant(id) else {
            return 1.0;
        };
        let statuses: f64 = combatant
            .status_effects
            .iter()
            .filter_map(|effect| self.statuses.definition(&effect.id))
            .map(|definition| definition.incoming_multiplier)
            .product();
        if combatant.break_turns > 0 {
            statuses * self.config.break_damage_multiplier
        } else {
            statuses
        }
    }

    /// Flat reduction from defense buffs and status defense bonuses.
    pub fn defense(&self, state: &CombatState, id: &CombatantId) -> i32 {
        let Some(combatant) = state.combatant(id) else {
            return 0;
        };
        let from_statuses: i32 = combatant
            .status_effects
            .iter()
            .filter_map(|effect| self.statuses.definition(&effect.id))
            .map(|definition| definition.defense_bonus)
            .sum();
        combatant.buff_total(Stat::Defense) + from_statuses
    }

    /// Buffed value of `stat` for `id`; 0 for unknown ids.
    pub fn stat(&self, state: &CombatState, id: &CombatantId, stat: Stat) -> i32 {
        match (state.definition(id), state.combatant(id)) {
            (Some(definition), Some(combatant)) => combatant.effective(&definition.stats, stat),
            _ => 0,
        }
    }
}
