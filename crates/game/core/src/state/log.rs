//! Append-only audit log and terminal outcomes.
//!
//! The variant set and field names of [`CombatLogEntry`] are the contract
//! with UI and replay consumers.

use crate::affinity::Element;

use super::CombatantId;

/// Element label logged for a missed attack.
pub const MISS_ELEMENT: &str = "miss";

/// Payout supplied by the caller on victory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Reward {
    pub xp: u32,
    pub credits: u32,
    pub loot: Vec<String>,
}

/// Terminal result of an encounter. Set exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatOutcome {
    Victory(Reward),
    Defeat,
    Retreat,
}

/// Immutable audit record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatLogEntry {
    Damage {
        source_id: String,
        target_id: CombatantId,
        amount: i32,
        /// Element name, or [`MISS_ELEMENT`] for a missed attack.
        element: String,
        critical: bool,
        weakness: bool,
    },
    Heal {
        source_id: String,
        target_id: CombatantId,
        amount: i32,
    },
    StatusApplied {
        target_id: CombatantId,
        status_id: String,
        remaining_turns: u32,
        stacks: u32,
    },
    StatusExpired {
        target_id: CombatantId,
        status_id: String,
    },
    ActionQueued {
        actor_id: CombatantId,
        message: String,
    },
    Outcome {
        outcome: CombatOutcome,
    },
    TurnSkipped {
        actor_id: CombatantId,
        reason: String,
    },
}

impl CombatLogEntry {
    pub fn damage(
        source_id: impl Into<String>,
        target_id: &CombatantId,
        amount: i32,
        element: Element,
        critical: bool,
        weakness: bool,
    ) -> Self {
        Self::Damage {
            source_id: source_id.into(),
            target_id: target_id.clone(),
            amount,
            element: element.to_string(),
            critical,
            weakness,
        }
    }

    pub fn miss(source_id: impl Into<String>, target_id: &CombatantId) -> Self {
        Self::Damage {
            source_id: source_id.into(),
            target_id: target_id.clone(),
            amount: 0,
            element: MISS_ELEMENT.to_owned(),
            critical: false,
            weakness: false,
        }
    }

    pub fn is_damage(&self) -> bool {
        matches!(self, Self::Damage { .. })
    }

    pub fn is_miss(&self) -> bool {
        matches!(self, Self::Damage { element, .. } if element == MISS_ELEMENT)
    }
}
