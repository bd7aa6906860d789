//! Action dispatch.
//!
//! A [`CombatAction`] is one submitted intent. [`CombatActionProcessor`]
//! resolves it into engine primitive calls and finalizes the turn.
//!
//! # Module Structure
//!
//! - `processor`: entry point, skip checks and turn finalization
//! - `targeting`: target validation and fallback
//! - `strike`: the shared hit/crit/damage pipeline
//! - `attack`: basic attacks per weapon kind, including charging
//! - `support`: ability scripts, support kits and Defend
//! - `skill`: skill resolution and skill-applied statuses
//! - `item`: item and snack consumption

mod attack;
mod error;
mod item;
mod processor;
mod skill;
mod strike;
mod support;
mod targeting;

pub use error::ProcessError;
pub use processor::CombatActionProcessor;

use strum::Display;

use crate::state::CombatantId;

/// One submitted player or AI intent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatAction {
    BasicAttack {
        actor_id: CombatantId,
        target_id: Option<CombatantId>,
    },
    SupportAbility {
        actor_id: CombatantId,
        target_id: Option<CombatantId>,
    },
    SkillUse {
        actor_id: CombatantId,
        skill_id: String,
        target_ids: Vec<CombatantId>,
    },
    ItemUse {
        actor_id: CombatantId,
        item_id: String,
        target_id: Option<CombatantId>,
    },
    SnackUse {
        actor_id: CombatantId,
        item_id: String,
        target_id: Option<CombatantId>,
    },
    Defend {
        actor_id: CombatantId,
    },
    Flee {
        actor_id: CombatantId,
    },
}

/// Fieldless discriminant of [`CombatAction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    BasicAttack,
    SupportAbility,
    SkillUse,
    ItemUse,
    SnackUse,
    Defend,
    Flee,
}

impl CombatAction {
    pub fn basic_attack(
        actor_id: impl Into<CombatantId>,
        target_id: impl Into<CombatantId>,
    ) -> Self {
        Self::BasicAttack {
            actor_id: actor_id.into(),
            target_id: Some(target_id.into()),
        }
    }

    pub fn skill(
        actor_id: impl Into<CombatantId>,
        skill_id: impl Into<String>,
        target_ids: Vec<CombatantId>,
    ) -> Self {
        Self::SkillUse {
            actor_id: actor_id.into(),
            skill_id: skill_id.into(),
            target_ids,
        }
    }

    pub fn actor_id(&self) -> &CombatantId {
        match self {
            Self::BasicAttack { actor_id, .. }
            | Self::SupportAbility { actor_id, .. }
            | Self::SkillUse { actor_id, .. }
            | Self::ItemUse { actor_id, .. }
            | Self::SnackUse { actor_id, .. }
            | Self::Defend { actor_id }
            | Self::Flee { actor_id } => actor_id,
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::BasicAttack { .. } => ActionKind::BasicAttack,
            Self::SupportAbility { .. } => ActionKind::SupportAbility,
            Self::SkillUse { .. } => ActionKind::SkillUse,
            Self::ItemUse { .. } => ActionKind::ItemUse,
            Self::SnackUse { .. } => ActionKind::SnackUse,
            Self::Defend { .. } => ActionKind::Defend,
            Self::Flee { .. } => ActionKind::Flee,
        }
    }
}
