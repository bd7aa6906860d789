//! Property tests for the engine primitives.

mod common;

use std::collections::BTreeMap;

use combat_core::{
    ActiveBuff, CombatLogEntry, CombatSetup, CombatState, CombatantId, Element, HitFlags, Stat,
};
use common::{Fixture, enemy, hero};
use proptest::prelude::*;

const STATS: [Stat; 5] = [
    Stat::Strength,
    Stat::Accuracy,
    Stat::Evasion,
    Stat::Defense,
    Stat::CritChance,
];

fn drone() -> CombatantId {
    CombatantId::from("drone")
}

fn opening(fixture: &Fixture) -> CombatState {
    let setup = CombatSetup::new(vec![hero("vex")], vec![enemy("drone")]).with_seed(3);
    fixture.engine().begin_encounter(setup)
}

proptest! {
    #[test]
    fn hp_and_stability_stay_in_bounds(
        hits in prop::collection::vec((-20i32..250, any::<bool>()), 1..20),
        heals in prop::collection::vec(-10i32..150, 0..5),
    ) {
        let fixture = Fixture::new();
        let engine = fixture.engine();
        let mut state = opening(&fixture);

        for (amount, weakness) in hits {
            let flags = HitFlags { critical: false, weakness };
            state = engine.apply_damage(state, "vex", &drone(), amount, Element::Physical, flags);
            let drone = &state.combatants[&drone()];
            prop_assert!(drone.hp >= 0 && drone.hp <= drone.max_hp);
            prop_assert!(drone.stability >= 0 && drone.stability <= drone.max_stability);
        }
        for amount in heals {
            let before = state.combatants[&drone()].hp;
            let logged = state.log.len();
            state = engine.apply_heal(state, "vex", &drone(), amount);
            let after = state.combatants[&drone()].hp;
            prop_assert!(after <= state.combatants[&drone()].max_hp);
            if before == 0 {
                prop_assert_eq!(after, 0);
            }
            match state.log.get(logged) {
                Some(CombatLogEntry::Heal { amount: healed, .. }) => {
                    prop_assert_eq!(*healed, after - before);
                    prop_assert!(*healed > 0);
                }
                Some(other) => prop_assert!(false, "unexpected entry {:?}", other),
                None => prop_assert_eq!(after, before),
            }
        }
    }

    #[test]
    fn buffs_merge_one_entry_per_stat(
        applied in prop::collection::vec((0usize..STATS.len(), -10i32..10, 0u32..6), 1..25),
    ) {
        let fixture = Fixture::new();
        let engine = fixture.engine();
        let mut state = opening(&fixture);
        let mut expected: BTreeMap<Stat, (i32, u32)> = BTreeMap::new();

        for (index, value, duration) in applied {
            let stat = STATS[index];
            state = engine.apply_buffs(state, &drone(), &[ActiveBuff::new(stat, value, duration)]);
            let entry = expected.entry(stat).or_insert((value, 0));
            entry.0 = value;
            entry.1 = entry.1.max(duration.max(1));
        }

        let buffs = &state.combatants[&drone()].buffs;
        prop_assert_eq!(buffs.len(), expected.len());
        for buff in buffs {
            prop_assert_eq!(expected.get(&buff.stat), Some(&(buff.value, buff.remaining_turns)));
        }
    }

    #[test]
    fn status_stacks_accumulate_and_keep_longest_duration(
        applications in prop::collection::vec((1u32..6, 0u32..4), 1..10),
    ) {
        let fixture = Fixture::new();
        let engine = fixture.engine();
        let mut state = opening(&fixture);

        for &(duration, stacks) in &applications {
            state = engine.apply_status(state, None, &drone(), "Burning", duration, stacks);
        }

        let effects = &state.combatants[&drone()].status_effects;
        prop_assert_eq!(effects.len(), 1);
        prop_assert_eq!(effects[0].id.as_str(), "burn");
        let stacks: u32 = applications.iter().map(|&(_, s)| s.max(1)).sum();
        let longest = applications.iter().map(|&(d, _)| d).max().unwrap_or(0);
        prop_assert_eq!(effects[0].stacks, stacks);
        prop_assert_eq!(effects[0].remaining_turns, longest);
    }

    #[test]
    fn statuses_expire_after_their_duration(duration in 1u32..6) {
        let fixture = Fixture::new();
        let engine = fixture.engine();
        let mut state = opening(&fixture);
        state = engine.apply_status(state, None, &drone(), "weaken", duration, 1);

        for tick in 1..=duration {
            state = engine.tick_end_of_turn(state);
            let present = state.combatants[&drone()].has_status("weaken");
            prop_assert_eq!(present, tick < duration);
        }
        let expiries = state
            .log
            .iter()
            .filter(|entry| matches!(
                entry,
                CombatLogEntry::StatusExpired { status_id, .. } if status_id == "weaken"
            ))
            .count();
        prop_assert_eq!(expiries, 1);
    }
}
