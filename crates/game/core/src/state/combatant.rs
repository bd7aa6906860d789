//! Static combatant definitions and their mutable runtime state.

use std::collections::BTreeMap;

use crate::affinity::{Element, ResistanceProfile};
use crate::stats::{Stat, StatBlock};
use crate::weapon::{WeaponChargeState, WeaponProfile};

use super::{CombatantId, Side};

/// Static definition of a fighter. Immutable for the encounter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub side: Side,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: StatBlock,
    /// Descriptive creature tags; used to derive resistances.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    /// Explicitly authored resistances. Override anything derived from tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub resistances: BTreeMap<Element, i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapon: Option<WeaponProfile>,
}

impl Combatant {
    pub fn new(id: impl Into<CombatantId>, side: Side, stats: StatBlock) -> Self {
        let id = id.into();
        Self {
            name: id.to_string(),
            id,
            side,
            stats,
            tags: Vec::new(),
            resistances: BTreeMap::new(),
            weapon: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_weapon(mut self, weapon: WeaponProfile) -> Self {
        self.weapon = Some(weapon);
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_owned()).collect();
        self
    }

    #[must_use]
    pub fn with_resistance(mut self, element: Element, value: i32) -> Self {
        self.resistances.insert(element, value);
        self
    }

    /// Tag-derived profile with explicit resistances layered on top.
    pub fn resistance_profile(&self) -> ResistanceProfile {
        ResistanceProfile::from_tags(&self.tags).with_overrides(&self.resistances)
    }
}

/// A timed stat modifier. One entry per stat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveBuff {
    pub stat: Stat,
    pub value: i32,
    pub remaining_turns: u32,
}

impl ActiveBuff {
    pub fn new(stat: Stat, value: i32, remaining_turns: u32) -> Self {
        Self {
            stat,
            value,
            remaining_turns,
        }
    }

    /// Identifier used for this buff in the combat log.
    pub fn log_id(&self) -> String {
        let prefix = if self.value < 0 { "debuff" } else { "buff" };
        format!("{prefix}_{}", self.stat)
    }
}

/// A timed status with a stack count. One entry per status id.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub id: String,
    pub remaining_turns: u32,
    pub stacks: u32,
    /// Combatant that most recently applied this status.
    #[cfg_attr(feature = "serde", serde(default))]
    pub source_id: Option<CombatantId>,
}

/// Mutable runtime state of one combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantState {
    pub id: CombatantId,
    pub hp: i32,
    pub max_hp: i32,
    pub stability: i32,
    pub max_stability: i32,
    /// Remaining turns of the post-break vulnerability window.
    pub break_turns: u32,
    pub buffs: Vec<ActiveBuff>,
    pub status_effects: Vec<StatusEffect>,
    pub weapon_charge: Option<WeaponChargeState>,
}

impl CombatantState {
    /// Fresh state seeded to the stat block maxima.
    pub fn from_definition(definition: &Combatant) -> Self {
        let max_hp = definition.stats.max_hp.max(0);
        let max_stability = definition.stats.max_stability.max(0);
        Self {
            id: definition.id.clone(),
            hp: max_hp,
            max_hp,
            stability: max_stability,
            max_stability,
            break_turns: 0,
            buffs: Vec::new(),
            status_effects: Vec::new(),
            weapon_charge: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn status(&self, id: &str) -> Option<&StatusEffect> {
        self.status_effects.iter().find(|effect| effect.id == id)
    }

    pub fn has_status(&self, id: &str) -> bool {
        self.status(id).is_some()
    }

    pub fn buff(&self, stat: Stat) -> Option<&ActiveBuff> {
        self.buffs.iter().find(|buff| buff.stat == stat)
    }

    /// Sum of active buff values on `stat`.
    pub fn buff_total(&self, stat: Stat) -> i32 {
        self.buffs
            .iter()
            .filter(|buff| buff.stat == stat)
            .map(|buff| buff.value)
            .sum()
    }

    /// Base stat plus active buffs.
    pub fn effective(&self, stats: &StatBlock, stat: Stat) -> i32 {
        stats.base(stat) + self.buff_total(stat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_state_starts_at_maxima() {
        let stats = StatBlock {
            max_hp: 40,
            max_stability: 12,
            ..StatBlock::default()
        };
        let definition = Combatant::new("drone#1", Side::Enemy, stats);
        let state = CombatantState::from_definition(&definition);
        assert_eq!((state.hp, state.max_hp), (40, 40));
        assert_eq!((state.stability, state.max_stability), (12, 12));
        assert!(state.is_alive());
    }

    #[test]
    fn effective_stat_adds_buffs() {
        let definition = Combatant::new("vex", Side::Player, StatBlock::default());
        let mut state = CombatantState::from_definition(&definition);
        state.buffs.push(ActiveBuff::new(Stat::Accuracy, -15, 2));
        state.buffs.push(ActiveBuff::new(Stat::Defense, 5, 1));
        assert_eq!(state.effective(&definition.stats, Stat::Accuracy), 75);
        assert_eq!(state.effective(&definition.stats, Stat::Defense), 5);
    }

    #[test]
    fn buff_log_ids_reflect_sign() {
        assert_eq!(ActiveBuff::new(Stat::Evasion, 10, 2).log_id(), "buff_evasion");
        assert_eq!(ActiveBuff::new(Stat::Accuracy, -10, 2).log_id(), "debuff_accuracy");
    }

    #[test]
    fn tag_profile_respects_overrides() {
        let definition = Combatant::new("sentry", Side::Enemy, StatBlock::default())
            .with_tags(&["robotic"])
            .with_resistance(Element::Shock, 0);
        assert_eq!(definition.resistance_profile().value(Element::Shock), 0);
        assert_eq!(definition.resistance_profile().value(Element::Toxic), 100);
    }
}
