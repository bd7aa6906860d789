//! Elemental affinity rules.
//!
//! Resistance scores run from -100 (weak) to +100 (immune) per element.
//! [`tier_for_value`] buckets a score into an [`AffinityTier`] that carries the
//! damage multiplier. When a creature has no authored resistances,
//! [`ResistanceProfile::from_tags`] derives them from descriptive tags;
//! explicit overrides always win.

use std::collections::BTreeMap;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::stats::normalize_key;

/// Damage element.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString,
    EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Element {
    #[default]
    Physical,
    Fire,
    Ice,
    Shock,
    Toxic,
    Arcane,
}

/// Discrete resistance bucket driving the damage multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AffinityTier {
    Weakness,
    Vantage,
    Neutral,
    Resist,
    Immune,
}

impl AffinityTier {
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Weakness => 2.0,
            Self::Vantage => 1.5,
            Self::Neutral => 1.0,
            Self::Resist => 0.5,
            Self::Immune => 0.0,
        }
    }

    pub const fn is_weakness(self) -> bool {
        matches!(self, Self::Weakness)
    }
}

/// Maps a resistance score to its tier.
///
/// Canonical breakpoints are -100, -50, 0, 50 and 100. Anything in between
/// falls into bands: `<= -75` weakness, `<= -25` vantage, `>= 75` immune,
/// `>= 25` resist, otherwise neutral.
pub fn tier_for_value(value: i32) -> AffinityTier {
    match value {
        -100 => AffinityTier::Weakness,
        -50 => AffinityTier::Vantage,
        0 => AffinityTier::Neutral,
        50 => AffinityTier::Resist,
        100 => AffinityTier::Immune,
        v if v <= -75 => AffinityTier::Weakness,
        v if v <= -25 => AffinityTier::Vantage,
        v if v >= 75 => AffinityTier::Immune,
        v if v >= 25 => AffinityTier::Resist,
        _ => AffinityTier::Neutral,
    }
}

/// Resistance contributions of one descriptive tag.
struct TagRule {
    keywords: &'static [&'static str],
    resistances: &'static [(Element, i32)],
}

const TAG_RULES: &[TagRule] = &[
    TagRule {
        keywords: &["robotic", "mechanical", "drone", "machine"],
        resistances: &[(Element::Shock, -100), (Element::Toxic, 100)],
    },
    TagRule {
        keywords: &["armored", "armoured", "plated"],
        resistances: &[(Element::Physical, 50), (Element::Shock, -50)],
    },
    TagRule {
        keywords: &["fiery", "flame", "infernal"],
        resistances: &[(Element::Fire, 100), (Element::Ice, -100)],
    },
    TagRule {
        keywords: &["frost", "ice", "glacial"],
        resistances: &[(Element::Ice, 100), (Element::Fire, -100)],
    },
    TagRule {
        keywords: &["slime", "ooze"],
        resistances: &[(Element::Physical, 50), (Element::Fire, -50)],
    },
    TagRule {
        keywords: &["organic", "beast", "insect"],
        resistances: &[(Element::Toxic, -50)],
    },
    TagRule {
        keywords: &["spectral", "ghost"],
        resistances: &[(Element::Physical, 100), (Element::Arcane, -100)],
    },
    TagRule {
        keywords: &["psionic", "arcane"],
        resistances: &[(Element::Arcane, 50)],
    },
];

/// Per-element resistance scores. Missing elements read as 0 (neutral).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ResistanceProfile {
    values: BTreeMap<Element, i32>,
}

impl ResistanceProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives a profile from creature tags.
    ///
    /// Contributions from several tags on the same element are summed and
    /// clamped to `[-100, 100]`. Unknown tags contribute nothing.
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Self {
        let mut profile = Self::new();
        for tag in tags {
            let key = normalize_key(tag.as_ref());
            for rule in TAG_RULES.iter().filter(|r| r.keywords.contains(&key.as_str())) {
                for &(element, value) in rule.resistances {
                    let entry = profile.values.entry(element).or_insert(0);
                    *entry = (*entry + value).clamp(-100, 100);
                }
            }
        }
        profile
    }

    /// Replaces scores with explicitly authored values.
    #[must_use]
    pub fn with_overrides<'a>(
        mut self,
        overrides: impl IntoIterator<Item = (&'a Element, &'a i32)>,
    ) -> Self {
        for (element, value) in overrides {
            self.values.insert(*element, *value);
        }
        self
    }

    #[must_use]
    pub fn with(mut self, element: Element, value: i32) -> Self {
        self.values.insert(element, value);
        self
    }

    pub fn value(&self, element: Element) -> i32 {
        self.values.get(&element).copied().unwrap_or(0)
    }

    pub fn tier(&self, element: Element) -> AffinityTier {
        tier_for_value(self.value(element))
    }
}
