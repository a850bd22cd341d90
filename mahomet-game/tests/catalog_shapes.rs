//! Shape and balance checks over the embedded catalog.

use std::collections::HashSet;

use mahomet_game::{Comparison, EventKind, GameData, ResourceKey};

fn load() -> GameData {
    GameData::load_from_static().expect("embedded catalog is valid")
}

#[test]
fn game_config_is_the_champaign_mahomet_run() {
    let data = load();
    assert_eq!(data.game.title, "MAHOMET TRAIL");
    assert_eq!(data.game.start_location, "Champaign, IL");
    assert_eq!(data.game.end_location, "Mahomet, IL");
    assert!((data.game.total_distance - 12.0).abs() < f32::EPSILON);
}

#[test]
fn starting_resources_all_full() {
    let data = load();
    for key in ResourceKey::ALL {
        assert_eq!(data.starting_resources.get(key), 100, "{key}");
    }
}

#[test]
fn event_ids_are_unique() {
    let data = load();
    let ids: Vec<&str> = data.events.iter().map(|event| event.id.as_str()).collect();
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
}

#[test]
fn every_weighted_event_has_positive_weight_and_no_condition() {
    let data = load();
    for event in data.eligible_events() {
        assert!(event.weight > 0, "event '{}' has no weight", event.id);
        assert!(event.condition.is_none(), "event '{}'", event.id);
        assert!(!event.fatal, "event '{}'", event.id);
    }
}

#[test]
fn critical_events_cover_gas_van_and_patience() {
    let data = load();
    let resources: HashSet<ResourceKey> = data
        .critical_events()
        .filter_map(|event| event.condition)
        .map(|condition| condition.resource)
        .collect();
    assert!(resources.contains(&ResourceKey::Gas));
    assert!(resources.contains(&ResourceKey::VanHealth));
    assert!(resources.contains(&ResourceKey::Patience));
}

#[test]
fn critical_conditions_all_check_for_depletion() {
    let data = load();
    for event in data.critical_events() {
        let condition = event.condition.expect("validated");
        assert_eq!(condition.op, Comparison::Le, "event '{}'", event.id);
        assert_eq!(condition.threshold, 0, "event '{}'", event.id);
        assert!(event.fatal, "event '{}'", event.id);
        assert!(event.effects.is_empty(), "event '{}'", event.id);
    }
}

#[test]
fn effect_magnitudes_stay_within_limits() {
    let data = load();
    for event in &data.events {
        for (key, amount) in event.effects.entries() {
            assert!(
                amount.abs() <= 100,
                "event '{}' effect on {key} is {amount}",
                event.id
            );
        }
    }
}

#[test]
fn catalog_mixes_positive_and_negative_events() {
    let data = load();
    let positive = data
        .events
        .iter()
        .filter(|event| event.kind == EventKind::Positive)
        .count();
    let negative = data
        .events
        .iter()
        .filter(|event| event.kind.is_negative())
        .count();
    assert!(positive > 0);
    assert!(negative > 0);
}

#[test]
fn major_negatives_carry_real_weight_behind_them() {
    let data = load();
    let has_bite = data
        .events
        .iter()
        .filter(|event| event.kind == EventKind::MajorNegative)
        .any(|event| event.effects.entries().iter().any(|(_, amount)| *amount <= -20));
    assert!(has_bite, "major negative events should cost at least -20");
}

#[test]
fn ford_corn_field_is_the_only_dynamic_event() {
    let data = load();
    let dynamic: Vec<&str> = data
        .events
        .iter()
        .filter(|event| event.is_dynamic())
        .map(|event| event.id.as_str())
        .collect();
    assert_eq!(dynamic, vec!["ford_corn_field"]);
}

#[test]
fn victory_copy_is_populated() {
    let data = load();
    assert_eq!(data.victory.title, "YOU MADE IT TO MAHOMET!");
    assert!(!data.victory.messages.is_empty());
    assert!(data.victory.messages.iter().all(|message| !message.is_empty()));
}

#[test]
fn catalog_round_trips_through_serde() {
    let data = load();
    let json = serde_json::to_string(&data).expect("serialize");
    let restored = GameData::from_json(&json).expect("validates after round trip");
    assert_eq!(restored, data);
}
