//! Weapon attack profiles and the multi-turn charge state machine.

use crate::affinity::Element;

/// How a weapon's basic attack selects and hits targets.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackKind {
    /// One opposing combatant.
    SingleTarget,
    /// Every living opposing combatant, each hit rolled independently.
    AllEnemies,
    /// Winds up for `charge_turns` uses, then hits one target in full and
    /// splashes `primary * splash_multiplier` onto every other enemy.
    ChargedSplash {
        charge_turns: u32,
        splash_multiplier: f64,
    },
}

/// Equipped weapon data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponProfile {
    pub item_id: String,
    pub min_damage: i32,
    pub max_damage: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub element: Element,
    #[cfg_attr(feature = "serde", serde(default = "default_power"))]
    pub power_multiplier: f64,
    pub attack: AttackKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status_on_hit: Option<String>,
    /// Percent chance in `[0, 100]` to apply `status_on_hit`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status_chance: u32,
    /// Explicit status duration; `0` defers to the status registry.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status_duration: u32,
}

#[cfg(feature = "serde")]
fn default_power() -> f64 {
    1.0
}

impl WeaponProfile {
    pub fn new(item_id: impl Into<String>, min_damage: i32, max_damage: i32) -> Self {
        Self {
            item_id: item_id.into(),
            min_damage,
            max_damage,
            element: Element::Physical,
            power_multiplier: 1.0,
            attack: AttackKind::SingleTarget,
            status_on_hit: None,
            status_chance: 0,
            status_duration: 0,
        }
    }

    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    #[must_use]
    pub fn with_power(mut self, power_multiplier: f64) -> Self {
        self.power_multiplier = power_multiplier;
        self
    }

    #[must_use]
    pub fn with_attack(mut self, attack: AttackKind) -> Self {
        self.attack = attack;
        self
    }

    #[must_use]
    pub fn with_status_on_hit(mut self, status_id: impl Into<String>, chance: u32) -> Self {
        self.status_on_hit = Some(status_id.into());
        self.status_chance = chance;
        self
    }

    /// Damage roll bounds with `min <= max` guaranteed.
    pub fn damage_range(&self) -> (i32, i32) {
        let min = self.min_damage.max(0);
        (min, self.max_damage.max(min))
    }
}

/// In-progress charge of one actor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponChargeState {
    pub weapon_item_id: String,
    pub remaining_turns: u32,
}

/// What a charged weapon does on this use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChargeStep {
    /// Begin winding up; no damage.
    Start { remaining_turns: u32 },
    /// Still winding up; no damage.
    Continue { remaining_turns: u32 },
    /// Fire the attack and clear the charge.
    Release,
}

/// Advances the charge machine for one use of `weapon_item_id`.
///
/// A charge for a different weapon is ignored (the caller overwrites it).
/// Starting with `charge_turns = N` releases on the N-th further use.
pub fn next_charge_step(
    charge_turns: u32,
    weapon_item_id: &str,
    current: Option<&WeaponChargeState>,
) -> ChargeStep {
    match current.filter(|charge| charge.weapon_item_id == weapon_item_id) {
        None if charge_turns == 0 => ChargeStep::Release,
        None => ChargeStep::Start {
            remaining_turns: charge_turns,
        },
        Some(charge) => match charge.remaining_turns.saturating_sub(1) {
            0 => ChargeStep::Release,
            remaining_turns => ChargeStep::Continue { remaining_turns },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charge(weapon: &str, remaining_turns: u32) -> WeaponChargeState {
        WeaponChargeState {
            weapon_item_id: weapon.to_owned(),
            remaining_turns,
        }
    }

    #[test]
    fn zero_charge_turns_fire_immediately() {
        assert_eq!(next_charge_step(0, "cannon", None), ChargeStep::Release);
    }

    #[test]
    fn first_use_starts_charging() {
        assert_eq!(
            next_charge_step(2, "cannon", None),
            ChargeStep::Start { remaining_turns: 2 }
        );
    }

    #[test]
    fn matching_charge_counts_down_then_releases() {
        let current = charge("cannon", 2);
        assert_eq!(
            next_charge_step(2, "cannon", Some(&current)),
            ChargeStep::Continue { remaining_turns: 1 }
        );
        let current = charge("cannon", 1);
        assert_eq!(next_charge_step(2, "cannon", Some(&current)), ChargeStep::Release);
    }

    #[test]
    fn different_weapon_restarts_the_charge() {
        let current = charge("railgun", 1);
        assert_eq!(
            next_charge_step(3, "cannon", Some(&current)),
            ChargeStep::Start { remaining_turns: 3 }
        );
    }

    #[test]
    fn damage_range_is_ordered() {
        let weapon = WeaponProfile::new("club", 8, 3);
        assert_eq!(weapon.damage_range(), (8, 8));
        let weapon = WeaponProfile::new("stick", -2, 4);
        assert_eq!(weapon.damage_range(), (0, 4));
    }
}
