//! Tunable combat constants.

/// Rule constants consulted by the engine and the action processor.
///
/// Every field has a default, so a partial `combat.toml` only overrides what
/// it names.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// `break_turns` granted when stability is broken.
    pub break_duration: u32,
    /// Incoming damage multiplier while `break_turns > 0`.
    pub break_damage_multiplier: f64,
    pub crit_multiplier: f64,
    pub min_hit_chance: i32,
    pub max_hit_chance: i32,
    /// Damage variance is rolled in `-damage_variance..=damage_variance`.
    pub damage_variance: i32,
    pub unarmed_min_damage: i32,
    pub unarmed_max_damage: i32,
    /// Status duration used when neither the caller nor the registry give one.
    pub fallback_status_duration: u32,
    pub defend_defense_bonus: i32,
    pub defend_duration: u32,
    pub defend_status: String,
    pub target_lock_status: String,
    pub target_lock_crit_bonus: i32,
    /// Stability damage factor for hits landing on a weakness.
    pub weakness_stability_factor: i32,
}

impl CombatConfig {
    pub const DEFAULT_BREAK_DURATION: u32 = 2;
    pub const DEFAULT_CRIT_MULTIPLIER: f64 = 1.5;
    pub const DEFAULT_FALLBACK_STATUS_DURATION: u32 = 2;

    pub fn new() -> Self {
        Self::default()
    }

    /// Inclusive hit-chance bounds, ordered even if misconfigured.
    pub fn hit_chance_bounds(&self) -> (i32, i32) {
        let min = self.min_hit_chance.clamp(0, 100);
        (min, self.max_hit_chance.clamp(min, 100))
    }

    pub fn unarmed_range(&self) -> (i32, i32) {
        let min = self.unarmed_min_damage.max(0);
        (min, self.unarmed_max_damage.max(min))
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            break_duration: Self::DEFAULT_BREAK_DURATION,
            break_damage_multiplier: 1.25,
            crit_multiplier: Self::DEFAULT_CRIT_MULTIPLIER,
            min_hit_chance: 5,
            max_hit_chance: 99,
            damage_variance: 2,
            unarmed_min_damage: 1,
            unarmed_max_damage: 3,
            fallback_status_duration: Self::DEFAULT_FALLBACK_STATUS_DURATION,
            defend_defense_bonus: 5,
            defend_duration: 2,
            defend_status: "defend".to_owned(),
            target_lock_status: "target_lock".to_owned(),
            target_lock_crit_bonus: 30,
            weakness_stability_factor: 2,
        }
    }
}
