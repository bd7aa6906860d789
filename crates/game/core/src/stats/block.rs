use super::Stat;

/// Authored stat block of a combatant. Immutable for the encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatBlock {
    pub max_hp: i32,
    pub max_stability: i32,
    pub strength: i32,
    pub vitality: i32,
    pub intelligence: i32,
    pub speed: i32,
    pub accuracy: i32,
    pub evasion: i32,
    pub crit_chance: i32,
    /// Added to speed when the turn order is computed.
    pub initiative_modifier: i32,
}

impl StatBlock {
    /// Base value of a canonical stat before buffs.
    ///
    /// [`Stat::Defense`] has no authored base; it only exists through buffs
    /// and status bonuses.
    pub fn base(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Vitality => self.vitality,
            Stat::Intelligence => self.intelligence,
            Stat::Speed => self.speed,
            Stat::Accuracy => self.accuracy,
            Stat::Evasion => self.evasion,
            Stat::Defense => 0,
            Stat::CritChance => self.crit_chance,
        }
    }

    /// Initiative used for turn ordering: `speed + initiative_modifier`, saturating.
    pub fn initiative(&self) -> i32 {
        self.speed.saturating_add(self.initiative_modifier)
    }
}

impl Default for StatBlock {
    fn default() -> Self {
        Self {
            max_hp: 100,
            max_stability: 50,
            strength: 10,
            vitality: 10,
            intelligence: 10,
            speed: 10,
            accuracy: 90,
            evasion: 5,
            crit_chance: 5,
            initiative_modifier: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initiative_saturates_on_extreme_stats() {
        let fast = StatBlock {
            speed: i32::MAX,
            initiative_modifier: 10,
            ..StatBlock::default()
        };
        assert_eq!(fast.initiative(), i32::MAX);

        let slow = StatBlock {
            speed: i32::MIN,
            initiative_modifier: -1,
            ..StatBlock::default()
        };
        assert_eq!(slow.initiative(), i32::MIN);
        assert_eq!(StatBlock::default().initiative(), 10);
    }
}
