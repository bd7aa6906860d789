//! Target validation and fallback.

use tracing::debug;

use crate::state::{CombatState, CombatantId};

/// Which side a target must be on relative to the actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TargetRule {
    Opposing,
    /// Same team, including the actor.
    Friendly,
    SelfOnly,
}

/// A target exists, is alive and sits on the side `rule` requires.
pub(crate) fn is_valid_target(
    state: &CombatState,
    actor_id: &CombatantId,
    target_id: &CombatantId,
    rule: TargetRule,
) -> bool {
    state.is_alive(target_id) && matches_side(state, actor_id, target_id, rule)
}

/// Side check of [`is_valid_target`] without the liveness requirement.
pub(crate) fn matches_side(
    state: &CombatState,
    actor_id: &CombatantId,
    target_id: &CombatantId,
    rule: TargetRule,
) -> bool {
    let (Some(actor_side), Some(target_side)) = (state.side_of(actor_id), state.side_of(target_id))
    else {
        return false;
    };
    match rule {
        TargetRule::Opposing => actor_side.opposes(target_side),
        TargetRule::Friendly => !actor_side.opposes(target_side),
        TargetRule::SelfOnly => actor_id == target_id,
    }
}

/// Validates `preferred`, falling back to the first valid combatant in turn
/// order when allowed.
pub(crate) fn resolve_target(
    state: &CombatState,
    actor_id: &CombatantId,
    preferred: Option<&CombatantId>,
    rule: TargetRule,
    allow_fallback: bool,
) -> Option<CombatantId> {
    if let Some(preferred) = preferred.filter(|id| is_valid_target(state, actor_id, id, rule)) {
        return Some(preferred.clone());
    }
    if !allow_fallback {
        return None;
    }
    let fallback = state
        .turn_order
        .iter()
        .map(|slot| &slot.combatant_id)
        .find(|id| is_valid_target(state, actor_id, id, rule))
        .cloned();
    debug!(
        actor = %actor_id,
        preferred = ?preferred,
        fallback = ?fallback,
        "target fallback"
    );
    fallback
}

/// Every valid target of `rule`, in turn order.
pub(crate) fn all_targets(
    state: &CombatState,
    actor_id: &CombatantId,
    rule: TargetRule,
) -> Vec<CombatantId> {
    state
        .turn_order
        .iter()
        .map(|slot| &slot.combatant_id)
        .filter(|id| is_valid_target(state, actor_id, id, rule))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Combatant, CombatantState, Side, TurnSlot};
    use crate::stats::StatBlock;

    fn state() -> CombatState {
        let mut state = CombatState::default();
        for (id, side, hp) in [
            ("vex", Side::Player, 10),
            ("drone#1", Side::Enemy, 0),
            ("bram", Side::Ally, 10),
            ("drone#2", Side::Enemy, 10),
        ] {
            let definition = Combatant::new(id, side, StatBlock::default());
            let mut runtime = CombatantState::from_definition(&definition);
            runtime.hp = hp;
            state.turn_order.push(TurnSlot {
                combatant_id: definition.id.clone(),
                initiative: 0,
            });
            state.combatants.insert(definition.id.clone(), runtime);
            state.roster.insert(definition.id.clone(), definition);
        }
        state
    }

    #[test]
    fn dead_or_friendly_targets_fall_back_in_turn_order() {
        let state = state();
        let vex = CombatantId::from("vex");
        let dead = CombatantId::from("drone#1");
        assert_eq!(
            resolve_target(&state, &vex, Some(&dead), TargetRule::Opposing, true),
            Some(CombatantId::from("drone#2"))
        );
        assert_eq!(
            resolve_target(&state, &vex, Some(&"bram".into()), TargetRule::Opposing, false),
            None
        );
    }

    #[test]
    fn friendly_rule_includes_self_and_allies() {
        let state = state();
        let vex = CombatantId::from("vex");
        assert_eq!(
            all_targets(&state, &vex, TargetRule::Friendly),
            vec![CombatantId::from("vex"), CombatantId::from("bram")]
        );
        assert!(is_valid_target(&state, &vex, &vex, TargetRule::SelfOnly));
        assert!(!is_valid_target(&state, &vex, &"bram".into(), TargetRule::SelfOnly));
    }

    #[test]
    fn unknown_ids_are_never_valid() {
        let state = state();
        let ghost = CombatantId::from("ghost");
        assert!(!is_valid_target(&state, &ghost, &"drone#2".into(), TargetRule::Opposing));
        assert_eq!(
            resolve_target(&state, &ghost, None, TargetRule::Opposing, true),
            None
        );
    }
}
