//! Damage arithmetic.

/// Physical baseline before multipliers.
///
/// # Formula
///
/// ```text
/// base = strength + weapon_roll + variance - vitality, at least 1
/// ```
pub fn physical_base_damage(strength: i32, weapon_roll: i32, variance: i32, vitality: i32) -> i32 {
    strength
        .saturating_add(weapon_roll)
        .saturating_add(variance)
        .saturating_sub(vitality)
        .max(1)
}

/// Rounds a scaled amount; positive results never round down to 0.
pub fn scale_positive(amount: f64) -> i32 {
    if amount.is_nan() || amount <= 0.0 {
        return 0;
    }
    (amount.round() as i32).max(1)
}

/// Scales post-affinity damage by the crit multiplier, at least 1.
pub fn apply_crit(damage: i32, crit_multiplier: f64) -> i32 {
    scale_positive(f64::from(damage) * crit_multiplier.max(0.0)).max(1)
}

/// Applies the target's incoming multiplier and flat defense, at least 0.
pub fn apply_incoming(damage: i32, incoming_multiplier: f64, defense: i32) -> i32 {
    if damage <= 0 {
        return 0;
    }
    let scaled = (f64::from(damage) * incoming_multiplier.max(0.0)).round() as i32;
    scaled.saturating_sub(defense.max(0)).max(0)
}
