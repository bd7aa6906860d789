use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Canonicalizes a loosely written identifier.
///
/// Trims, lowercases and maps `' '`/`'-'` to `'_'`. Every comparison of stat
/// names, status ids and support-kit keys goes through this function.
pub fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Canonical stat addressed by buffs, skill scaling and formulas.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Stat {
    /// Physical attack power.
    #[strum(
        to_string = "strength",
        serialize = "str",
        serialize = "atk",
        serialize = "attack",
        serialize = "power",
        serialize = "phys"
    )]
    Strength,

    /// Physical defense power subtracted from incoming physical hits.
    #[strum(
        to_string = "vitality",
        serialize = "vit",
        serialize = "con",
        serialize = "constitution",
        serialize = "endurance"
    )]
    Vitality,

    /// Scaling stat for tech and healing skills.
    #[strum(
        to_string = "intelligence",
        serialize = "int",
        serialize = "mag",
        serialize = "magic",
        serialize = "wis",
        serialize = "wisdom",
        serialize = "tech"
    )]
    Intelligence,

    /// Initiative base.
    #[strum(
        to_string = "speed",
        serialize = "spd",
        serialize = "agi",
        serialize = "agility"
    )]
    Speed,

    #[strum(
        to_string = "accuracy",
        serialize = "acc",
        serialize = "hit",
        serialize = "aim"
    )]
    Accuracy,

    #[strum(
        to_string = "evasion",
        serialize = "eva",
        serialize = "evade",
        serialize = "dodge"
    )]
    Evasion,

    /// Flat reduction applied after affinity scaling. Only buffs contribute.
    #[strum(
        to_string = "defense",
        serialize = "def",
        serialize = "defence",
        serialize = "guard",
        serialize = "armor",
        serialize = "armour"
    )]
    Defense,

    /// Percent chance to critically hit.
    #[strum(
        to_string = "crit_chance",
        serialize = "crit",
        serialize = "critical",
        serialize = "luck"
    )]
    CritChance,
}

impl Stat {
    /// Resolves any registered alias to the canonical stat.
    pub fn canonical(name: &str) -> Option<Self> {
        normalize_key(name).parse().ok()
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Error returned when a stat name matches no canonical stat or alias.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown stat '{0}'")]
pub struct UnknownStat(pub String);

impl TryFrom<String> for Stat {
    type Error = UnknownStat;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Stat::canonical(&value).ok_or(UnknownStat(value))
    }
}

impl From<Stat> for String {
    fn from(stat: Stat) -> Self {
        stat.as_str().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn aliases_resolve_to_the_same_stat() {
        for name in ["atk", "str", "Strength", " ATTACK ", "power"] {
            assert_eq!(Stat::canonical(name), Some(Stat::Strength), "{name}");
        }
        assert_eq!(Stat::canonical("crit-chance"), Some(Stat::CritChance));
        assert_eq!(Stat::canonical("Crit Chance"), Some(Stat::CritChance));
        assert_eq!(Stat::canonical("dodge"), Some(Stat::Evasion));
        assert_eq!(Stat::canonical("def"), Some(Stat::Defense));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(Stat::canonical("charisma"), None);
        assert_eq!(
            Stat::try_from("charisma".to_owned()),
            Err(UnknownStat("charisma".to_owned()))
        );
    }

    #[test]
    fn display_name_round_trips_through_canonical() {
        for stat in Stat::iter() {
            assert_eq!(Stat::canonical(&stat.to_string()), Some(stat));
        }
    }

    #[test]
    fn normalize_key_folds_case_and_separators() {
        assert_eq!(normalize_key("  Target-Lock "), "target_lock");
        assert_eq!(normalize_key("Kestrel#2"), "kestrel#2");
    }
}
