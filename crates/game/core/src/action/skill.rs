//! Skill resolution.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::env::{RngOracle, RollKind, Skill, SkillKind, SkillTargeting};
use crate::state::{CombatState, CombatantId};
use crate::status::StatusTarget;

use super::strike::StrikeSpec;
use super::targeting::{TargetRule, all_targets, is_valid_target, matches_side, resolve_target};
use super::{ActionKind, CombatActionProcessor, ProcessError};

/// A status the skill will try to apply, already deduplicated.
struct PendingStatus {
    status_id: String,
    target: StatusTarget,
    duration: u32,
    stacks: u32,
    chance: u32,
}

impl CombatActionProcessor<'_> {
    pub(crate) fn skill_use(
        &self,
        state: CombatState,
        actor_id: &CombatantId,
        skill_id: &str,
        target_ids: &[CombatantId],
    ) -> Result<CombatState, ProcessError> {
        let kind = ActionKind::SkillUse;

        let special_case = self
            .env
            .abilities()
            .and_then(|abilities| abilities.skill_override(skill_id));
        if let Some(script) = special_case {
            debug!(actor = %actor_id, skill = skill_id, "skill resolved by ability script");
            return Ok(self.run_script(state, actor_id, target_ids.first(), script));
        }

        let skills = self.env.skills().map_err(ProcessError::oracle(kind))?;
        let rng = self.env.rng().map_err(ProcessError::oracle(kind))?;
        let Some(skill) = skills.skill(skill_id) else {
            warn!(actor = %actor_id, skill = skill_id, "unknown skill; using a basic strike");
            return Ok(self.unarmed_attack(state, rng, actor_id, target_ids.first()));
        };

        let mode = effective_mode(skill);
        let targets = self.skill_targets(&state, actor_id, mode, target_ids);
        if targets.is_empty() {
            warn!(actor = %actor_id, skill = skill_id, "no valid target; skill does nothing");
            return Ok(state);
        }

        let scaled =
            f64::from(self.engine.stat(&state, actor_id, skill.scaling)) * skill.scaling_ratio;
        let amount = skill.base_power.saturating_add(scaled.round() as i32).max(0);
        debug!(
            actor = %actor_id,
            skill = %skill.id,
            amount,
            targets = targets.len(),
            "skill resolved"
        );

        let mut state = state;
        match skill.kind {
            _ if skill.is_heal() => {
                for target_id in &targets {
                    state = self.engine.apply_heal(state, actor_id.as_str(), target_id, amount);
                }
            }
            SkillKind::Damage => {
                let spec = StrikeSpec::fixed(amount, skill.element);
                for target_id in &targets {
                    if state.is_alive(target_id) {
                        state = self.strike(state, rng, actor_id, target_id, &spec);
                    }
                }
            }
            SkillKind::Heal | SkillKind::Support => {}
        }

        Ok(self.apply_skill_statuses(state, rng, actor_id, skill, &targets))
    }

    fn skill_targets(
        &self,
        state: &CombatState,
        actor_id: &CombatantId,
        mode: SkillTargeting,
        explicit: &[CombatantId],
    ) -> Vec<CombatantId> {
        let rule = match mode {
            SkillTargeting::Enemy | SkillTargeting::AllEnemies => TargetRule::Opposing,
            SkillTargeting::Ally | SkillTargeting::AllAllies => TargetRule::Friendly,
            SkillTargeting::SelfOnly => TargetRule::SelfOnly,
        };

        let mut chosen: Vec<CombatantId> = Vec::new();
        for id in explicit {
            if is_valid_target(state, actor_id, id, rule) && !chosen.contains(id) {
                chosen.push(id.clone());
            }
        }
        if !chosen.is_empty() {
            return chosen;
        }

        match mode {
            SkillTargeting::AllEnemies | SkillTargeting::AllAllies => {
                all_targets(state, actor_id, rule)
            }
            SkillTargeting::SelfOnly => {
                resolve_target(state, actor_id, Some(actor_id), rule, false).into_iter().collect()
            }
            SkillTargeting::Enemy | SkillTargeting::Ally => {
                resolve_target(state, actor_id, explicit.first(), rule, true).into_iter().collect()
            }
        }
    }

    /// Statuses listed on the skill, then statuses implied by its tags.
    ///
    /// One application per canonical status id; the first source wins.
    fn pending_statuses(&self, skill: &Skill) -> Vec<PendingStatus> {
        let registry = self.engine.statuses();
        let mut seen = BTreeSet::new();
        let mut pending = Vec::new();

        for listed in &skill.statuses {
            let definition = registry.definition(&listed.status_id);
            if definition.is_none() {
                warn!(
                    skill = %skill.id,
                    status = %listed.status_id,
                    "skill lists an unknown status"
                );
            }
            let status_id = registry.canonical_id(&listed.status_id);
            if seen.insert(status_id.clone()) {
                pending.push(PendingStatus {
                    status_id,
                    target: definition.map_or(StatusTarget::Enemy, |d| d.target),
                    duration: listed.duration,
                    stacks: listed.stacks,
                    chance: listed.chance,
                });
            }
        }
        for tag in &skill.tags {
            let Some(definition) = registry.by_combat_tag(tag) else {
                continue;
            };
            if seen.insert(definition.id.clone()) {
                pending.push(PendingStatus {
                    status_id: definition.id.clone(),
                    target: definition.target,
                    duration: 0,
                    stacks: 1,
                    chance: 100,
                });
            }
        }
        pending
    }

    fn apply_skill_statuses(
        &self,
        mut state: CombatState,
        rng: &dyn RngOracle,
        actor_id: &CombatantId,
        skill: &Skill,
        skill_targets: &[CombatantId],
    ) -> CombatState {
        for status in self.pending_statuses(skill) {
            let rule = match status.target {
                StatusTarget::Enemy => TargetRule::Opposing,
                StatusTarget::Ally => TargetRule::Friendly,
                StatusTarget::SelfOnly => TargetRule::SelfOnly,
            };
            let mut recipients: Vec<CombatantId> = skill_targets
                .iter()
                .filter(|id| matches_side(&state, actor_id, id, rule))
                .cloned()
                .collect();
            if recipients.is_empty() {
                let preferred = (rule == TargetRule::Friendly || rule == TargetRule::SelfOnly)
                    .then_some(actor_id);
                recipients.extend(resolve_target(&state, actor_id, preferred, rule, true));
            }

            for target_id in recipients {
                if !state.is_alive(&target_id) {
                    continue;
                }
                if status.chance < 100 {
                    let roll = rng.roll_percent(state.next_roll_seed(RollKind::StatusProc));
                    if roll >= status.chance {
                        debug!(
                            target = %target_id,
                            status = %status.status_id,
                            roll,
                            "status resisted"
                        );
                        continue;
                    }
                }
                state = self.engine.apply_status(
                    state,
                    Some(actor_id),
                    &target_id,
                    &status.status_id,
                    status.duration,
                    status.stacks,
                );
            }
        }
        state
    }
}

/// Targeting mode after reconciling it with the heal/damage classification.
fn effective_mode(skill: &Skill) -> SkillTargeting {
    let heal = skill.is_heal();
    let offensive = skill.kind == SkillKind::Damage && !heal;
    match skill.targeting {
        SkillTargeting::Enemy if heal => SkillTargeting::Ally,
        SkillTargeting::AllEnemies if heal => SkillTargeting::AllAllies,
        SkillTargeting::Ally | SkillTargeting::SelfOnly if offensive => SkillTargeting::Enemy,
        SkillTargeting::AllAllies if offensive => SkillTargeting::AllEnemies,
        mode => mode,
    }
}
