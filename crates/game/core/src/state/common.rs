use std::fmt;

use crate::stats::normalize_key;

/// Unique identifier of a combatant within an encounter.
///
/// Ids may carry an instance suffix after `#` (e.g. `"kestrel#2"`); the part
/// before it names the character and keys its support kit.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CombatantId(pub String);

impl CombatantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Normalized character key: the part before `#`, lowercased.
    pub fn kit_key(&self) -> String {
        let prefix = self.0.split('#').next().unwrap_or_default();
        normalize_key(prefix)
    }
}

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CombatantId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for CombatantId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for CombatantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Which roster a combatant fights for. Player and Ally form one team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Ally,
    Enemy,
}

impl Side {
    pub const fn is_party(self) -> bool {
        matches!(self, Side::Player | Side::Ally)
    }

    pub const fn is_enemy(self) -> bool {
        matches!(self, Side::Enemy)
    }

    /// True when the two sides fight each other.
    pub const fn opposes(self, other: Side) -> bool {
        self.is_party() != other.is_party()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kit_key_strips_instance_suffix() {
        assert_eq!(CombatantId::from("Kestrel#2").kit_key(), "kestrel");
        assert_eq!(CombatantId::from("bram").kit_key(), "bram");
        assert_eq!(CombatantId::from("#3").kit_key(), "");
    }

    #[test]
    fn player_and_ally_share_a_team() {
        assert!(!Side::Player.opposes(Side::Ally));
        assert!(Side::Ally.opposes(Side::Enemy));
        assert!(Side::Enemy.opposes(Side::Player));
        assert!(!Side::Enemy.opposes(Side::Enemy));
    }
}
