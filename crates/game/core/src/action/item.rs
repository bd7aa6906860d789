use tracing::{debug, warn};

use crate::combat::apply_incoming;
use crate::engine::HitFlags;
use crate::env::{ItemEffect, ItemTarget};
use crate::state::{CombatLogEntry, CombatState, CombatantId};

use super::targeting::{TargetRule, resolve_target};
use super::{ActionKind, CombatActionProcessor, ProcessError};

impl CombatActionProcessor<'_> {
    /// Consumes an item through the item oracle and applies its effect.
    ///
    /// Without an explicit target, a snack goes to the item's declared target
    /// (inferred from its effect when undeclared); any other item goes to an
    /// enemy for damage and to the actor otherwise.
    pub(crate) fn item_use(
        &self,
        state: CombatState,
        kind: ActionKind,
        actor_id: &CombatantId,
        item_id: &str,
        target_id: Option<&CombatantId>,
    ) -> Result<CombatState, ProcessError> {
        let items = self.env.items().map_err(ProcessError::oracle(kind))?;
        let Some(result) = items.use_item(item_id) else {
            warn!(actor = %actor_id, item = item_id, "item could not be used");
            return Ok(state);
        };

        let declared = match kind {
            ActionKind::SnackUse => items.item(item_id).map(|item| item.default_target()),
            _ => None,
        };
        let (rule, default) = match declared {
            Some(ItemTarget::Enemy) => (TargetRule::Opposing, None),
            Some(ItemTarget::SelfOnly) => (TargetRule::SelfOnly, Some(actor_id)),
            Some(ItemTarget::Ally) => (TargetRule::Friendly, Some(actor_id)),
            Some(ItemTarget::Any) | None => match result.effect {
                ItemEffect::Damage { .. } => (TargetRule::Opposing, None),
                _ => (TargetRule::Friendly, Some(actor_id)),
            },
        };
        let preferred = match rule {
            TargetRule::SelfOnly => Some(actor_id),
            _ => target_id.or(default),
        };

        // Friendly items fall back to the actor before anyone else.
        let target = match rule {
            TargetRule::Opposing => resolve_target(&state, actor_id, preferred, rule, true),
            _ => resolve_target(&state, actor_id, preferred, rule, false)
                .or_else(|| resolve_target(&state, actor_id, Some(actor_id), rule, true)),
        };
        debug!(actor = %actor_id, item = %result.item_id, target = ?target, "item used");
        Ok(self.apply_item_effect(state, actor_id, &result.effect, target))
    }

    fn apply_item_effect(
        &self,
        mut state: CombatState,
        actor_id: &CombatantId,
        effect: &ItemEffect,
        target: Option<CombatantId>,
    ) -> CombatState {
        let engine = &self.engine;
        let needs_target = matches!(
            effect,
            ItemEffect::Restore { .. } | ItemEffect::Damage { .. } | ItemEffect::Buff { .. }
        );
        let target_id = match target {
            Some(target_id) => target_id,
            None if needs_target => {
                warn!(actor = %actor_id, "no valid target; item does nothing");
                return state;
            }
            None => actor_id.clone(),
        };

        match effect {
            ItemEffect::Restore { hp } => {
                engine.apply_heal(state, actor_id.as_str(), &target_id, *hp)
            }
            ItemEffect::Damage { amount, element } => {
                let definition = state.definition(&target_id);
                let weakness = engine.affinity(definition, *element).is_weakness();
                let damage = engine.calculate_damage(definition, (*amount).max(0), *element);
                let damage = apply_incoming(
                    damage,
                    engine.incoming_multiplier(&state, &target_id),
                    engine.defense(&state, &target_id),
                );
                let flags = HitFlags {
                    critical: false,
                    weakness,
                };
                engine.apply_damage(state, actor_id.as_str(), &target_id, damage, *element, flags)
            }
            ItemEffect::Buff { buffs } => engine.apply_buffs(state, &target_id, buffs),
            ItemEffect::LearnSchematic { schematic_id } => {
                state.push_log(CombatLogEntry::ActionQueued {
                    actor_id: actor_id.clone(),
                    message: format!("{actor_id} learned schematic {schematic_id}"),
                });
                state
            }
            ItemEffect::None => state,
        }
    }
}
