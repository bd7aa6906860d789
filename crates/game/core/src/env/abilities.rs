//! Data-driven support kits and skill special cases.
//!
//! A support kit is the scripted ability a character performs for
//! [`SupportAbility`](crate::CombatAction::SupportAbility); a skill override
//! replaces normal skill resolution for one skill id. Both are plain
//! [`AbilityScript`] values, so adding a character is a table entry.

use std::collections::BTreeMap;

use crate::stats::{Stat, normalize_key};

/// Read-only lookup of ability scripts.
pub trait AbilityOracle: Send + Sync {
    /// Script for a normalized character key (see [`CombatantId::kit_key`]).
    ///
    /// [`CombatantId::kit_key`]: crate::CombatantId::kit_key
    fn support_kit(&self, kit_key: &str) -> Option<&AbilityScript>;

    fn skill_override(&self, skill_id: &str) -> Option<&AbilityScript>;
}

/// Which combatant `*Target` effects land on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScriptTarget {
    #[default]
    Enemy,
    Ally,
    SelfOnly,
}

/// One engine primitive invocation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScriptEffect {
    BuffSelf {
        stat: Stat,
        value: i32,
        duration: u32,
    },
    BuffTarget {
        stat: Stat,
        value: i32,
        duration: u32,
    },
    /// Heals `base + scaling * ratio` (rounded).
    HealTarget {
        base: i32,
        #[cfg_attr(feature = "serde", serde(default))]
        scaling: Option<Stat>,
        #[cfg_attr(feature = "serde", serde(default))]
        ratio: f64,
    },
    StatusTarget {
        status_id: String,
        #[cfg_attr(feature = "serde", serde(default))]
        duration: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        stacks: u32,
    },
    StatusSelf {
        status_id: String,
        #[cfg_attr(feature = "serde", serde(default))]
        duration: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        stacks: u32,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityScript {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: ScriptTarget,
    pub effects: Vec<ScriptEffect>,
}

impl AbilityScript {
    pub fn new(name: impl Into<String>, target: ScriptTarget) -> Self {
        Self {
            name: name.into(),
            target,
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, effect: ScriptEffect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// In-memory [`AbilityOracle`] keyed by normalized ids.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AbilityTables {
    pub support_kits: BTreeMap<String, AbilityScript>,
    pub skill_overrides: BTreeMap<String, AbilityScript>,
}

impl AbilityTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_kit(&mut self, kit_key: &str, script: AbilityScript) {
        self.support_kits.insert(normalize_key(kit_key), script);
    }

    pub fn insert_skill_override(&mut self, skill_id: &str, script: AbilityScript) {
        self.skill_overrides.insert(normalize_key(skill_id), script);
    }

    /// Re-keys every entry through [`normalize_key`]. Call after deserializing.
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut tables = Self::new();
        for (key, script) in self.support_kits {
            tables.insert_kit(&key, script);
        }
        for (key, script) in self.skill_overrides {
            tables.insert_skill_override(&key, script);
        }
        tables
    }

    /// Kits for the default cast and the stock skill special cases.
    pub fn builtin() -> Self {
        let mut tables = Self::new();
        tables.insert_kit(
            "vex",
            AbilityScript::new("Feint", ScriptTarget::Enemy)
                .with(ScriptEffect::BuffTarget {
                    stat: Stat::Accuracy,
                    value: -15,
                    duration: 2,
                })
                .with(ScriptEffect::BuffSelf {
                    stat: Stat::Evasion,
                    value: 15,
                    duration: 2,
                }),
        );
        tables.insert_kit(
            "bram",
            AbilityScript::new("Bulwark", ScriptTarget::Ally).with(ScriptEffect::BuffTarget {
                stat: Stat::Defense,
                value: 8,
                duration: 2,
            }),
        );
        tables.insert_kit(
            "sera",
            AbilityScript::new("Field Dressing", ScriptTarget::Ally)
                .with(ScriptEffect::HealTarget {
                    base: 10,
                    scaling: Some(Stat::Intelligence),
                    ratio: 1.0,
                })
                .with(ScriptEffect::BuffTarget {
                    stat: Stat::Defense,
                    value: 4,
                    duration: 2,
                }),
        );
        tables.insert_kit(
            "kestrel",
            AbilityScript::new("Mark Target", ScriptTarget::Enemy).with(
                ScriptEffect::StatusTarget {
                    status_id: "target_lock".to_owned(),
                    duration: 0,
                    stacks: 1,
                },
            ),
        );
        tables.insert_skill_override(
            "smoke_screen",
            AbilityScript::new("Smoke Screen", ScriptTarget::SelfOnly).with(
                ScriptEffect::BuffSelf {
                    stat: Stat::Evasion,
                    value: 25,
                    duration: 2,
                },
            ),
        );
        tables.insert_skill_override(
            "overclock",
            AbilityScript::new("Overclock", ScriptTarget::SelfOnly)
                .with(ScriptEffect::BuffSelf {
                    stat: Stat::Strength,
                    value: 6,
                    duration: 3,
                })
                .with(ScriptEffect::StatusSelf {
                    status_id: "exposed".to_owned(),
                    duration: 2,
                    stacks: 1,
                }),
        );
        tables
    }
}

impl AbilityOracle for AbilityTables {
    fn support_kit(&self, kit_key: &str) -> Option<&AbilityScript> {
        self.support_kits.get(&normalize_key(kit_key))
    }

    fn skill_override(&self, skill_id: &str) -> Option<&AbilityScript> {
        self.skill_overrides.get(&normalize_key(skill_id))
    }
}
