use crate::affinity::Element;
use crate::stats::{Stat, normalize_key};

/// Read-only skill lookup.
pub trait SkillOracle: Send + Sync {
    fn skill(&self, skill_id: &str) -> Option<&Skill>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillKind {
    #[default]
    Damage,
    Heal,
    /// Applies statuses only.
    Support,
}

/// Default target set when a [`SkillUse`](crate::CombatAction::SkillUse)
/// supplies no explicit targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillTargeting {
    #[default]
    Enemy,
    AllEnemies,
    Ally,
    AllAllies,
    SelfOnly,
}

/// A status a skill applies on use.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillStatus {
    pub status_id: String,
    /// `0` defers to the status registry.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: u32,
    #[cfg_attr(feature = "serde", serde(default = "one"))]
    pub stacks: u32,
    /// Percent chance in `[0, 100]`.
    #[cfg_attr(feature = "serde", serde(default = "always"))]
    pub chance: u32,
}

#[cfg(feature = "serde")]
fn one() -> u32 {
    1
}

#[cfg(feature = "serde")]
fn always() -> u32 {
    100
}

impl SkillStatus {
    pub fn new(status_id: impl Into<String>) -> Self {
        Self {
            status_id: status_id.into(),
            duration: 0,
            stacks: 1,
            chance: 100,
        }
    }
}

/// Skill metadata.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: SkillKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_power: i32,
    /// Stat the amount scales from. Accepts any stat alias in data files.
    pub scaling: Stat,
    #[cfg_attr(feature = "serde", serde(default = "unit_ratio"))]
    pub scaling_ratio: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub element: Element,
    #[cfg_attr(feature = "serde", serde(default))]
    pub targeting: SkillTargeting,
    /// Combat tags. Heal tags mark a heal; others may imply statuses.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub statuses: Vec<SkillStatus>,
    /// Turns between uses. Tracked by the caller.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown: u32,
}

#[cfg(feature = "serde")]
fn unit_ratio() -> f64 {
    1.0
}

const HEAL_TAGS: &[&str] = &["heal", "restore", "mend", "repair"];

impl Skill {
    pub fn new(id: impl Into<String>, kind: SkillKind, base_power: i32, scaling: Stat) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            kind,
            base_power,
            scaling,
            scaling_ratio: 1.0,
            element: Element::Physical,
            targeting: SkillTargeting::Enemy,
            tags: Vec::new(),
            statuses: Vec::new(),
            cooldown: 0,
        }
    }

    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    #[must_use]
    pub fn with_targeting(mut self, targeting: SkillTargeting) -> Self {
        self.targeting = targeting;
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_owned()).collect();
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: SkillStatus) -> Self {
        self.statuses.push(status);
        self
    }

    #[must_use]
    pub fn with_scaling_ratio(mut self, ratio: f64) -> Self {
        self.scaling_ratio = ratio;
        self
    }

    /// Heal when the kind says so or any tag names a heal.
    pub fn is_heal(&self) -> bool {
        self.kind == SkillKind::Heal
            || self
                .tags
                .iter()
                .any(|tag| HEAL_TAGS.contains(&normalize_key(tag).as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heal_is_detected_by_kind_or_tag() {
        let mend = Skill::new("patch_up", SkillKind::Support, 5, Stat::Intelligence)
            .with_tags(&["Mend"]);
        assert!(mend.is_heal());
        let bolt = Skill::new("arc_bolt", SkillKind::Damage, 8, Stat::Intelligence)
            .with_tags(&["shock"]);
        assert!(!bolt.is_heal());
        assert!(Skill::new("pulse", SkillKind::Heal, 4, Stat::Intelligence).is_heal());
    }
}
