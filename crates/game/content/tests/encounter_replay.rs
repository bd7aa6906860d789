//! Loads content from disk and plays whole encounters through the processor.

use std::fs;
use std::path::Path;

use combat_content::{ContentBundle, ContentFactory};
use combat_core::{CombatAction, CombatLogEntry, CombatState, NoReward, PcgRng, Side};
use tempfile::TempDir;

const MAX_ACTIONS: usize = 2_000;

fn copy_bundled_data(target: &Path) {
    let source = ContentFactory::bundled().data_dir().to_path_buf();
    fs::create_dir_all(target.join("encounters")).unwrap();
    for file in [
        "combat.toml",
        "statuses.ron",
        "skills.ron",
        "items.ron",
        "abilities.ron",
    ] {
        fs::copy(source.join(file), target.join(file)).unwrap();
    }
    for encounter in ["scrapyard.ron", "relay_tower.ron"] {
        fs::copy(
            source.join("encounters").join(encounter),
            target.join("encounters").join(encounter),
        )
        .unwrap();
    }
}

/// Every actor basic-attacks the first living opponent until the fight ends.
fn play_out(bundle: &ContentBundle, mut state: CombatState) -> CombatState {
    let rng = PcgRng;
    let processor = bundle.processor(&rng);

    for _ in 0..MAX_ACTIONS {
        if state.is_terminal() {
            break;
        }
        let actor = state.active_combatant().cloned().unwrap();
        let side = state.side_of(&actor).unwrap();
        let target = state.living_opponents(side).first().cloned().unwrap();
        state = processor
            .process(state, &CombatAction::basic_attack(actor, target), &NoReward)
            .unwrap();
    }
    state
}

#[test]
fn encounter_from_disk_runs_to_an_outcome() {
    let dir = TempDir::new().unwrap();
    copy_bundled_data(dir.path());

    let factory = ContentFactory::new(dir.path());
    let bundle = factory.load_bundle().unwrap();
    let setup = factory.load_encounter("scrapyard").unwrap().with_seed(99);
    let state = play_out(&bundle, bundle.engine().begin_encounter(setup));

    assert!(state.is_terminal());
    assert!(matches!(state.log.last(), Some(CombatLogEntry::Outcome { .. })));
    for combatant in state.combatants.values() {
        assert!(combatant.hp >= 0 && combatant.hp <= combatant.max_hp);
        assert!(combatant.stability >= 0);
    }
    assert!(!state.has_living(Side::Enemy) || !state.has_living(Side::Player));
}

#[test]
fn seeded_encounters_replay_identically() {
    let bundle = ContentBundle::embedded().unwrap();
    let factory = ContentFactory::bundled();

    let first = factory.load_encounter("relay_tower").unwrap();
    let second = first.clone();
    let first = play_out(&bundle, bundle.engine().begin_encounter(first));
    let second = play_out(&bundle, bundle.engine().begin_encounter(second));

    assert_eq!(first, second);
}

#[test]
fn config_overrides_on_disk_are_picked_up() {
    let dir = TempDir::new().unwrap();
    copy_bundled_data(dir.path());
    fs::write(
        dir.path().join("combat.toml"),
        "crit_multiplier = 3.0\nmin_hit_chance = 100\n",
    )
    .unwrap();

    let bundle = ContentFactory::new(dir.path()).load_bundle().unwrap();
    assert_eq!(bundle.config.crit_multiplier, 3.0);
    assert_eq!(bundle.config.hit_chance_bounds(), (100, 100));
    assert_eq!(bundle.config.break_duration, 2);
}

#[test]
fn broken_data_file_reports_its_path() {
    let dir = TempDir::new().unwrap();
    copy_bundled_data(dir.path());
    fs::write(dir.path().join("skills.ron"), "(skills: [(id: 3)])").unwrap();

    let err = ContentFactory::new(dir.path()).load_bundle().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Failed to parse skill book RON"));
    assert!(message.contains("skills.ron"));
}

#[test]
fn log_serializes_with_stable_field_names() {
    let bundle = ContentBundle::embedded().unwrap();
    let setup = ContentFactory::bundled()
        .load_encounter("scrapyard")
        .unwrap()
        .with_seed(5);
    let state = play_out(&bundle, bundle.engine().begin_encounter(setup));

    let damage = state
        .log
        .iter()
        .find(|entry| entry.is_damage())
        .unwrap();
    let json = serde_json::to_value(damage).unwrap();
    let fields = json.get("Damage").unwrap();
    for key in [
        "source_id",
        "target_id",
        "amount",
        "element",
        "critical",
        "weakness",
    ] {
        assert!(fields.get(key).is_some(), "missing {key}");
    }

    let encoded = serde_json::to_string(&state).unwrap();
    let decoded: CombatState = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, state);
}
