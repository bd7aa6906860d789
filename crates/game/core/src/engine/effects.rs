use tracing::{debug, warn};

use crate::affinity::Element;
use crate::state::{ActiveBuff, CombatLogEntry, CombatState, CombatantId, StatusEffect};
use crate::weapon::WeaponChargeState;

use super::CombatEngine;

/// How a damage instance landed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HitFlags {
    pub critical: bool,
    /// Hit on a weakness; multiplies stability damage.
    pub weakness: bool,
}

impl HitFlags {
    pub const NORMAL: Self = Self {
        critical: false,
        weakness: false,
    };
}

/// State-mutating primitives for CombatEngine.
impl CombatEngine<'_> {
    /// Subtracts `amount` from hp and stability and logs the hit.
    ///
    /// Hp and stability floor at 0. Stability breaking resets it to max and
    /// opens the break window.
    pub fn apply_damage(
        &self,
        mut state: CombatState,
        source_id: &str,
        target_id: &CombatantId,
        amount: i32,
        element: Element,
        flags: HitFlags,
    ) -> CombatState {
        let config = self.config;
        let Some(target) = state.combatants.get_mut(target_id) else {
            warn!(target = %target_id, source = source_id, "damage against unknown combatant");
            return state;
        };

        let amount = amount.max(0);
        target.hp = target.hp.saturating_sub(amount).max(0);

        let factor = if flags.weakness {
            config.weakness_stability_factor.max(1)
        } else {
            1
        };
        let stability_damage = amount.saturating_mul(factor);
        target.stability = target.stability.saturating_sub(stability_damage).max(0);
        if stability_damage > 0 && target.max_stability > 0 && target.stability == 0 {
            target.stability = target.max_stability;
            target.break_turns = target.break_turns.max(config.break_duration);
            debug!(target = %target_id, break_turns = target.break_turns, "stability broken");
        }

        debug!(
            source = source_id,
            target = %target_id,
            amount,
            %element,
            critical = flags.critical,
            weakness = flags.weakness,
            hp = target.hp,
            "damage applied"
        );
        state.push_log(CombatLogEntry::damage(
            source_id,
            target_id,
            amount,
            element,
            flags.critical,
            flags.weakness,
        ));
        state
    }

    /// Restores hp up to max. Logs only when something was healed.
    ///
    /// Downed combatants cannot be healed.
    pub fn apply_heal(
        &self,
        mut state: CombatState,
        source_id: &str,
        target_id: &CombatantId,
        amount: i32,
    ) -> CombatState {
        if amount <= 0 {
            return state;
        }
        let Some(target) = state.combatants.get_mut(target_id) else {
            warn!(target = %target_id, source = source_id, "heal on unknown combatant");
            return state;
        };
        if !target.is_alive() {
            return state;
        }

        let before = target.hp;
        target.hp = target.hp.saturating_add(amount).min(target.max_hp);
        let healed = target.hp - before;
        if healed <= 0 {
            return state;
        }

        debug!(source = source_id, target = %target_id, healed, hp = target.hp, "heal applied");
        state.push_log(CombatLogEntry::Heal {
            source_id: source_id.to_owned(),
            target_id: target_id.clone(),
            amount: healed,
        });
        state
    }

    /// Merges buffs keyed by stat: new value, longer duration.
    pub fn apply_buffs(
        &self,
        mut state: CombatState,
        target_id: &CombatantId,
        buffs: &[ActiveBuff],
    ) -> CombatState {
        let Some(target) = state.combatants.get_mut(target_id) else {
            warn!(target = %target_id, "buff on unknown combatant");
            return state;
        };

        let mut entries = Vec::with_capacity(buffs.len());
        for incoming in buffs {
            let duration = incoming.remaining_turns.max(1);
            let merged = match target.buffs.iter_mut().find(|b| b.stat == incoming.stat) {
                Some(existing) => {
                    existing.value = incoming.value;
                    existing.remaining_turns = existing.remaining_turns.max(duration);
                    existing.clone()
                }
                None => {
                    let buff = ActiveBuff::new(incoming.stat, incoming.value, duration);
                    target.buffs.push(buff.clone());
                    buff
                }
            };
            debug!(
                target = %target_id,
                buff = %merged.log_id(),
                value = merged.value,
                "buff applied"
            );
            entries.push(CombatLogEntry::StatusApplied {
                target_id: target_id.clone(),
                status_id: merged.log_id(),
                remaining_turns: merged.remaining_turns,
                stacks: 1,
            });
        }
        state.log.extend(entries);
        state
    }

    /// Applies or merges a status.
    ///
    /// Duration is `duration` if positive, else the registry default, else
    /// the configured fallback. Merging keeps the longer duration and adds
    /// stacks without a cap.
    pub fn apply_status(
        &self,
        mut state: CombatState,
        source_id: Option<&CombatantId>,
        target_id: &CombatantId,
        status_id: &str,
        duration: u32,
        stacks: u32,
    ) -> CombatState {
        let definition = self.statuses.definition(status_id);
        if definition.is_none() {
            warn!(status = status_id, "status has no definition; applying without rules");
        }
        let id = self.statuses.canonical_id(status_id);
        let duration = if duration > 0 {
            duration
        } else {
            definition
                .map(|definition| definition.default_duration)
                .filter(|&turns| turns > 0)
                .unwrap_or(self.config.fallback_status_duration)
        };
        if duration == 0 || id.is_empty() {
            return state;
        }
        let stacks = stacks.max(1);

        let Some(target) = state.combatants.get_mut(target_id) else {
            warn!(target = %target_id, status = %id, "status on unknown combatant");
            return state;
        };

        let merged = match target.status_effects.iter_mut().find(|e| e.id == id) {
            Some(existing) => {
                existing.remaining_turns = existing.remaining_turns.max(duration);
                existing.stacks = existing.stacks.saturating_add(stacks);
                if source_id.is_some() {
                    existing.source_id = source_id.cloned();
                }
                existing.clone()
            }
            None => {
                let effect = StatusEffect {
                    id,
                    remaining_turns: duration,
                    stacks,
                    source_id: source_id.cloned(),
                };
                target.status_effects.push(effect.clone());
                effect
            }
        };

        debug!(
            target = %target_id,
            status = %merged.id,
            remaining_turns = merged.remaining_turns,
            stacks = merged.stacks,
            "status applied"
        );
        state.push_log(CombatLogEntry::StatusApplied {
            target_id: target_id.clone(),
            status_id: merged.id,
            remaining_turns: merged.remaining_turns,
            stacks: merged.stacks,
        });
        state
    }

    /// Removes one stack of `status_id`, dropping the status at 0 stacks.
    pub fn consume_status_stack(
        &self,
        mut state: CombatState,
        target_id: &CombatantId,
        status_id: &str,
    ) -> CombatState {
        let id = self.statuses.canonical_id(status_id);
        let Some(target) = state.combatants.get_mut(target_id) else {
            return state;
        };
        let Some(position) = target.status_effects.iter().position(|e| e.id == id) else {
            return state;
        };

        let effect = &mut target.status_effects[position];
        effect.stacks = effect.stacks.saturating_sub(1);
        debug!(target = %target_id, status = %id, stacks = effect.stacks, "status stack consumed");
        if effect.stacks == 0 {
            target.status_effects.remove(position);
            state.push_log(CombatLogEntry::StatusExpired {
                target_id: target_id.clone(),
                status_id: id,
            });
        }
        state
    }

    pub fn set_weapon_charge(
        &self,
        mut state: CombatState,
        actor_id: &CombatantId,
        charge: WeaponChargeState,
    ) -> CombatState {
        if let Some(actor) = state.combatants.get_mut(actor_id) {
            actor.weapon_charge = Some(charge);
        }
        state
    }

    pub fn clear_weapon_charge(
        &self,
        mut state: CombatState,
        actor_id: &CombatantId,
    ) -> CombatState {
        if let Some(actor) = state.combatants.get_mut(actor_id) {
            if actor.weapon_charge.take().is_some() {
                debug!(actor = %actor_id, "weapon charge cleared");
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CombatConfig;
    use crate::state::{CombatSetup, Combatant, Side};
    use crate::stats::{Stat, StatBlock};
    use crate::status::StatusRegistry;

    fn encounter(engine: &CombatEngine<'_>) -> CombatState {
        let stats = StatBlock {
            max_hp: 30,
            max_stability: 10,
            ..StatBlock::default()
        };
        engine.begin_encounter(
            CombatSetup::new(
                vec![Combatant::new("vex", Side::Player, stats.clone())],
                vec![Combatant::new("drone", Side::Enemy, stats)],
            )
            .with_seed(1),
        )
    }

    fn drone() -> CombatantId {
        CombatantId::from("drone")
    }

    #[test]
    fn lethal_damage_floors_hp_at_zero() {
        let registry = StatusRegistry::builtin();
        let config = CombatConfig::default();
        let engine = CombatEngine::new(&registry, &config);
        let state = encounter(&engine);

        let state =
            engine.apply_damage(state, "vex", &drone(), 50, Element::Physical, HitFlags::NORMAL);
        let target = &state.combatants[&drone()];
        assert_eq!(target.hp, 0);
        assert!(!target.is_alive());
        assert_eq!(state.log.len(), 1);
    }

    #[test]
    fn weakness_hits_break_stability() {
        let registry = StatusRegistry::builtin();
        let config = CombatConfig::default();
        let engine = CombatEngine::new(&registry, &config);
        let state = encounter(&engine);

        let flags = HitFlags {
            critical: false,
            weakness: true,
        };
        let state = engine.apply_damage(state, "vex", &drone(), 5, Element::Shock, flags);
        let target = &state.combatants[&drone()];
        assert_eq!(target.hp, 25);
        assert_eq!(target.stability, target.max_stability);
        assert_eq!(target.break_turns, config.break_duration);
    }

    #[test]
    fn negative_damage_is_clamped() {
        let registry = StatusRegistry::builtin();
        let config = CombatConfig::default();
        let engine = CombatEngine::new(&registry, &config);
        let state = encounter(&engine);

        let state =
            engine.apply_damage(state, "vex", &drone(), -7, Element::Fire, HitFlags::NORMAL);
        assert_eq!(state.combatants[&drone()].hp, 30);
        assert!(matches!(state.log[0], CombatLogEntry::Damage { amount: 0, .. }));
    }

    #[test]
    fn unknown_target_is_a_no_op() {
        let registry = StatusRegistry::builtin();
        let config = CombatConfig::default();
        let engine = CombatEngine::new(&registry, &config);
        let state = encounter(&engine);
        let before = state.clone();

        let state =
            engine.apply_damage(state, "vex", &"ghost".into(), 9, Element::Ice, HitFlags::NORMAL);
        let state = engine.apply_heal(state, "vex", &"ghost".into(), 9);
        let state = engine.apply_status(state, None, &"ghost".into(), "burn", 2, 1);
        assert_eq!(state, before);
    }

    #[test]
    fn heal_caps_at_max_and_skips_full_targets() {
        let registry = StatusRegistry::builtin();
        let config = CombatConfig::default();
        let engine = CombatEngine::new(&registry, &config);
        let state = encounter(&engine);

        let state = engine.apply_heal(state, "vex", &drone(), 10);
        assert!(state.log.is_empty());

        let state =
            engine.apply_damage(state, "vex", &drone(), 4, Element::Physical, HitFlags::NORMAL);
        let state = engine.apply_heal(state, "vex", &drone(), 10);
        assert_eq!(state.combatants[&drone()].hp, 30);
        assert!(matches!(state.log[1], CombatLogEntry::Heal { amount: 4, .. }));
    }

    #[test]
    fn buffs_merge_by_stat() {
        let registry = StatusRegistry::builtin();
        let config = CombatConfig::default();
        let engine = CombatEngine::new(&registry, &config);
        let state = encounter(&engine);

        let state = engine.apply_buffs(state, &drone(), &[ActiveBuff::new(Stat::Evasion, 10, 3)]);
        let state = engine.apply_buffs(state, &drone(), &[ActiveBuff::new(Stat::Evasion, 4, 1)]);
        let buffs = &state.combatants[&drone()].buffs;
        assert_eq!(buffs, &[ActiveBuff::new(Stat::Evasion, 4, 3)]);
        assert_eq!(state.log.len(), 2);
    }

    #[test]
    fn statuses_merge_and_stack() {
        let registry = StatusRegistry::builtin();
        let config = CombatConfig::default();
        let engine = CombatEngine::new(&registry, &config);
        let state = encounter(&engine);

        let state = engine.apply_status(state, None, &drone(), "Burning", 2, 1);
        let state = engine.apply_status(state, Some(&"vex".into()), &drone(), "burn", 1, 2);
        let effects = &state.combatants[&drone()].status_effects;
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].id, "burn");
        assert_eq!(effects[0].remaining_turns, 2);
        assert_eq!(effects[0].stacks, 3);
        assert_eq!(effects[0].source_id, Some(CombatantId::from("vex")));
    }

    #[test]
    fn status_duration_falls_back() {
        let registry = StatusRegistry::builtin();
        let config = CombatConfig::default();
        let engine = CombatEngine::new(&registry, &config);
        let state = encounter(&engine);

        let state = engine.apply_status(state, None, &drone(), "poison", 0, 1);
        let state = engine.apply_status(state, None, &drone(), "glitched", 0, 1);
        let target = &state.combatants[&drone()];
        assert_eq!(target.status("poison").map(|e| e.remaining_turns), Some(3));
        assert_eq!(
            target.status("glitched").map(|e| e.remaining_turns),
            Some(config.fallback_status_duration)
        );
    }

    #[test]
    fn consuming_the_last_stack_removes_the_status() {
        let registry = StatusRegistry::builtin();
        let config = CombatConfig::default();
        let engine = CombatEngine::new(&registry, &config);
        let state = encounter(&engine);

        let state = engine.apply_status(state, None, &drone(), "target_lock", 0, 1);
        let state = engine.consume_status_stack(state, &drone(), "marked");
        assert!(!state.combatants[&drone()].has_status("target_lock"));
        assert!(matches!(
            state.log.last(),
            Some(CombatLogEntry::StatusExpired { status_id, .. }) if status_id == "target_lock"
        ));
    }
}
