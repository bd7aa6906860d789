/// Outcome of one attack roll against one target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    Miss,
    Hit,
    Critical,
}

impl AttackOutcome {
    pub const fn from_rolls(hit: bool, critical: bool) -> Self {
        match (hit, critical) {
            (false, _) => Self::Miss,
            (true, false) => Self::Hit,
            (true, true) => Self::Critical,
        }
    }

    pub const fn is_hit(self) -> bool {
        !matches!(self, Self::Miss)
    }

    pub const fn is_critical(self) -> bool {
        matches!(self, Self::Critical)
    }
}
