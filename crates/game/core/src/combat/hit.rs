//! Hit and crit chance calculations.

use crate::config::CombatConfig;

/// Hit chance in percent.
///
/// # Formula
///
/// ```text
/// hit_chance = clamp(accuracy - evasion, min_hit_chance, max_hit_chance)
/// ```
pub fn calculate_hit_chance(accuracy: i32, evasion: i32, config: &CombatConfig) -> i32 {
    let (min, max) = config.hit_chance_bounds();
    accuracy.saturating_sub(evasion).clamp(min, max)
}

/// A `[0, 100)` roll hits unless it exceeds the hit chance.
pub fn check_hit(hit_chance: i32, roll: u32) -> bool {
    i64::from(roll) <= i64::from(hit_chance)
}

/// Crit chance in percent, clamped to `[0, 100]`.
pub fn calculate_crit_chance(base: i32, bonus: i32) -> i32 {
    base.saturating_add(bonus).clamp(0, 100)
}

/// A `[0, 100)` roll crits when it is strictly below the crit chance.
pub fn check_crit(crit_chance: i32, roll: u32) -> bool {
    i64::from(roll) < i64::from(crit_chance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_chance_is_clamped() {
        let config = CombatConfig::default();
        assert_eq!(calculate_hit_chance(90, 5, &config), 85);
        assert_eq!(calculate_hit_chance(10, 90, &config), 5);
        assert_eq!(calculate_hit_chance(200, 0, &config), 99);
    }

    #[test]
    fn roll_equal_to_chance_still_hits() {
        assert!(check_hit(40, 40));
        assert!(!check_hit(40, 41));
        assert!(check_hit(99, 99));
    }

    #[test]
    fn crit_bounds() {
        assert_eq!(calculate_crit_chance(5, 30), 35);
        assert_eq!(calculate_crit_chance(-20, 5), 0);
        assert_eq!(calculate_crit_chance(90, 30), 100);
        assert!(!check_crit(0, 0));
        assert!(check_crit(100, 99));
        assert!(!check_crit(35, 35));
    }
}
