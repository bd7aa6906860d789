//! The shared hit pipeline.
//!
//! Every attack path reduces to [`CombatActionProcessor::strike`]: hit roll,
//! crit roll, base damage, outgoing multiplier, affinity, crit scaling,
//! incoming multiplier and defense, then secondary effects.

use tracing::debug;

use crate::affinity::Element;
use crate::combat::{
    self, AttackOutcome, apply_crit, apply_incoming, physical_base_damage, scale_positive,
};
use crate::engine::HitFlags;
use crate::env::{RngOracle, RollKind};
use crate::state::{CombatLogEntry, CombatState, CombatantId};
use crate::stats::Stat;

use super::CombatActionProcessor;

/// Source of a strike's pre-multiplier damage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum StrikeBase {
    /// `STR + roll(min..=max) + variance - VIT`, at least 1.
    Physical { min: i32, max: i32 },
    /// Precomputed amount; no roll and no vitality reduction.
    Fixed(i32),
}

/// Status rolled onto the target after a hit.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct OnHitStatus {
    pub status_id: String,
    pub chance: u32,
    pub duration: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct StrikeSpec {
    pub base: StrikeBase,
    pub element: Element,
    pub power: f64,
    pub force_hit: bool,
    pub allow_crit: bool,
    pub on_hit: Option<OnHitStatus>,
}

impl StrikeSpec {
    pub fn physical(min: i32, max: i32) -> Self {
        Self {
            base: StrikeBase::Physical { min, max },
            element: Element::Physical,
            power: 1.0,
            force_hit: false,
            allow_crit: true,
            on_hit: None,
        }
    }

    pub fn fixed(amount: i32, element: Element) -> Self {
        Self {
            base: StrikeBase::Fixed(amount),
            element,
            power: 1.0,
            force_hit: true,
            allow_crit: false,
            on_hit: None,
        }
    }

    /// Guaranteed hit without crit, as used by charged releases and splash.
    #[must_use]
    pub fn unerring(mut self) -> Self {
        self.force_hit = true;
        self.allow_crit = false;
        self
    }
}

impl CombatActionProcessor<'_> {
    /// Resolves one attack from `actor_id` against `target_id`.
    pub(crate) fn strike(
        &self,
        mut state: CombatState,
        rng: &dyn RngOracle,
        actor_id: &CombatantId,
        target_id: &CombatantId,
        spec: &StrikeSpec,
    ) -> CombatState {
        let engine = &self.engine;
        let config = engine.config();

        let hit = spec.force_hit || {
            let accuracy = engine.stat(&state, actor_id, Stat::Accuracy);
            let evasion = engine.stat(&state, target_id, Stat::Evasion);
            let chance = combat::calculate_hit_chance(accuracy, evasion, config);
            let roll = rng.roll_percent(state.next_roll_seed(RollKind::Hit));
            combat::check_hit(chance, roll)
        };
        if !hit {
            debug!(actor = %actor_id, target = %target_id, "attack missed");
            state.push_log(CombatLogEntry::miss(actor_id.as_str(), target_id));
            return state;
        }

        let lock_status = engine.statuses().canonical_id(&config.target_lock_status);
        let locked_by_actor = state
            .combatant(target_id)
            .and_then(|target| target.status(&lock_status))
            .map(|lock| lock.source_id.as_ref().is_none_or(|source| source == actor_id));

        let critical = spec.allow_crit && {
            let bonus = if locked_by_actor == Some(true) {
                config.target_lock_crit_bonus
            } else {
                0
            };
            let base = engine.stat(&state, actor_id, Stat::CritChance);
            let chance = combat::calculate_crit_chance(base, bonus);
            let roll = rng.roll_percent(state.next_roll_seed(RollKind::Crit));
            combat::check_crit(chance, roll)
        };
        let outcome = AttackOutcome::from_rolls(hit, critical);

        let base = match spec.base {
            StrikeBase::Physical { min, max } => {
                let weapon_roll = rng.range(state.next_roll_seed(RollKind::WeaponDamage), min, max);
                let variance = config.damage_variance.max(0);
                let variance =
                    rng.range(state.next_roll_seed(RollKind::Variance), -variance, variance);
                physical_base_damage(
                    engine.stat(&state, actor_id, Stat::Strength),
                    weapon_roll,
                    variance,
                    engine.stat(&state, target_id, Stat::Vitality),
                )
            }
            StrikeBase::Fixed(amount) => amount.max(0),
        };

        let outgoing = engine.outgoing_multiplier(&state, actor_id);
        let raw = scale_positive(f64::from(base) * spec.power.max(0.0) * outgoing);
        let target = state.definition(target_id);
        let weakness = engine.affinity(target, spec.element).is_weakness();
        let mut damage = engine.calculate_damage(target, raw, spec.element);
        if outcome.is_critical() {
            damage = apply_crit(damage, config.crit_multiplier);
        }
        let damage = apply_incoming(
            damage,
            engine.incoming_multiplier(&state, target_id),
            engine.defense(&state, target_id),
        );

        debug!(
            actor = %actor_id,
            target = %target_id,
            ?outcome,
            base,
            raw,
            damage,
            "attack resolved"
        );
        let flags = HitFlags {
            critical: outcome.is_critical(),
            weakness,
        };
        let mut state = engine.apply_damage(
            state,
            actor_id.as_str(),
            target_id,
            damage,
            spec.element,
            flags,
        );

        if locked_by_actor.is_some() {
            state = engine.consume_status_stack(state, target_id, &lock_status);
        }

        if let Some(on_hit) = &spec.on_hit {
            state = self.roll_on_hit(state, rng, actor_id, target_id, on_hit);
        }
        state
    }

    fn roll_on_hit(
        &self,
        mut state: CombatState,
        rng: &dyn RngOracle,
        actor_id: &CombatantId,
        target_id: &CombatantId,
        on_hit: &OnHitStatus,
    ) -> CombatState {
        if on_hit.chance == 0 || !state.is_alive(target_id) {
            return state;
        }
        let roll = rng.roll_percent(state.next_roll_seed(RollKind::StatusProc));
        if roll >= on_hit.chance {
            return state;
        }
        self.engine.apply_status(
            state,
            Some(actor_id),
            target_id,
            &on_hit.status_id,
            on_hit.duration,
            1,
        )
    }
}
