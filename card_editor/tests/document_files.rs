//! File round-trips through the editor session.

use std::fs;

use card_editor::{
    DynamicSections, EditorError, EditorSession, FormModel, Panel, SectionKind, View,
};
use card_schema::{CharacterCard, Faction, PersonalTrait, Relationship, WorldInfo};
use tempfile::TempDir;

const CARD_JSON: &str = r#"{
  "Chinese_name": "林月",
  "Japanese_name": "リン・ユエ",
  "gender": "female",
  "age": 17,
  "background": ["Born in the capital", "", "Moved to the coast"],
  "identity": "Student",
  "appearance": {"height": "160cm", "eyes": "amber"},
  "attire": {"服装": {"tops": "hoodie", "shoes": "sneakers"}},
  "MBTI_personality": "INFP",
  "personal_traits": {
    "Shy": {
      "description": "Quiet around strangers",
      "dialogue_examples": ["U-um..."],
      "behavior_examples": ["Hides behind books"]
    },
    "Loyal": {"description": "Never leaves a friend"}
  },
  "relationship": {
    "Aki": {"description": ["Childhood friend"], "features": ["Loud"]}
  },
  "likes": ["Tea", "Rain"],
  "dislikes": ["Crowds"],
  "daily_routine": {"early_morning": "Jog", "late_night": "Reads"}
}"#;

fn write(dir: &TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn card_round_trip_preserves_values_and_group_names() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "card.json", CARD_JSON);
    let output = dir.path().join("out.json");

    let mut session = EditorSession::new(View::Character);
    session.load_character_card(&input).unwrap();
    session.save_character_card(&output).unwrap();

    let original: CharacterCard = card_editor::read_document(&input).unwrap();
    let saved: CharacterCard = card_editor::read_document(&output).unwrap();

    assert_eq!(saved.chinese_name, original.chinese_name);
    assert_eq!(saved.age, "17");
    assert_eq!(saved.background, vec!["Born in the capital", "Moved to the coast"]);
    assert_eq!(saved.attire.clothing.shoes, "sneakers");
    assert_eq!(saved.daily_routine, original.daily_routine);

    let names: Vec<_> = saved.personal_traits.keys().cloned().collect();
    assert_eq!(names, vec!["Shy", "Loyal"]);
    assert_eq!(
        saved.relationships.keys().collect::<Vec<_>>(),
        original.relationships.keys().collect::<Vec<_>>()
    );
}

#[test]
fn saved_text_is_two_space_indented_utf8() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("card.json");

    let mut session = EditorSession::new(View::Character);
    session.character_mut().chinese_name = "林月".to_string();
    let text = session.save_character_card(&output).unwrap();

    let on_disk = fs::read_to_string(&output).unwrap();
    assert_eq!(on_disk, text);
    assert!(on_disk.starts_with("{\n  \"Chinese_name\": \"林月\""));
    assert!(on_disk.contains("\"服装\": {\n      \"tops\""));
}

#[test]
fn empty_document_loads_as_empty_form() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "empty.json", "{}");

    let mut session = EditorSession::default();
    session.load_character_card(&input).unwrap();

    let form = session.character();
    assert_eq!(form.chinese_name, "");
    assert_eq!(form.background, "");
    assert!(form.traits.is_empty());
    assert!(form.relationships.is_empty());

    let card = form.to_document();
    assert!(card.likes.is_empty());
    assert!(card.personal_traits.is_empty());
}

#[test]
fn invalid_document_leaves_state_unchanged() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "good.json", CARD_JSON);
    let bad = write(&dir, "bad.json", "{\"Chinese_name\": \"broken\",");

    let mut session = EditorSession::new(View::Character);
    session.load_character_card(&good).unwrap();
    let before = session.character().clone();

    let err = session.load_character_card(&bad).unwrap_err();
    assert!(matches!(err, EditorError::Parse { .. }));
    assert!(err.to_string().contains("bad.json"));

    assert_eq!(session.character(), &before);
    assert_eq!(session.current_path(card_schema::DocumentKind::CharacterCard), Some(good.as_path()));
}

#[test]
fn top_level_array_is_rejected() {
    let dir = TempDir::new().unwrap();
    let bad = write(&dir, "list.json", "[\"not\", \"a\", \"card\"]");

    let mut session = EditorSession::default();
    assert!(matches!(
        session.load_world_info(&bad),
        Err(EditorError::Parse { .. })
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let mut session = EditorSession::default();

    let err = session
        .load_character_card(&dir.path().join("nope.json"))
        .unwrap_err();
    assert!(matches!(err, EditorError::Read { .. }));
}

#[test]
fn write_into_missing_directory_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let mut session = EditorSession::default();

    let err = session
        .save_world_info(&dir.path().join("missing").join("world.json"))
        .unwrap_err();
    assert!(matches!(err, EditorError::Write { .. }));
    assert!(session.current_path(card_schema::DocumentKind::WorldInfo).is_none());
}

#[test]
fn duplicate_faction_names_keep_later_group() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("world.json");

    let mut session = EditorSession::new(View::World);
    let panel = session.active_panel_mut();
    panel.set_field("name", "Aster").unwrap();
    for (i, members) in ["Old Guard", "New Guard"].into_iter().enumerate() {
        panel.add_group(SectionKind::Factions).unwrap();
        panel.set_field(&format!("factions.{i}.name"), "Empire").unwrap();
        panel.set_field(&format!("factions.{i}.members"), members).unwrap();
    }
    session.save_world_info(&output).unwrap();

    let saved: WorldInfo = card_editor::read_document(&output).unwrap();
    assert_eq!(saved.factions.len(), 1);
    assert_eq!(saved.factions["Empire"].members, vec!["New Guard"]);
}

#[test]
fn blank_named_groups_are_not_written() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("world.json");

    let mut session = EditorSession::new(View::World);
    let panel = session.active_panel_mut();
    panel.add_group(SectionKind::Landmarks).unwrap();
    panel.add_group(SectionKind::Factions).unwrap();
    panel.set_field("factions.0.members", "Someone").unwrap();
    session.save_world_info(&output).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["landmark"], serde_json::json!([]));
    assert_eq!(value["force"], serde_json::json!({}));
}

#[test]
fn world_round_trip_in_code() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("world.json");
    let world = WorldInfo::new("Aster")
        .with_keyword("sky")
        .with_landmark("Old Bridge")
        .with_faction("Guild", Faction::new().with_member("Merchant").with_description("Traders"));
    card_editor::write_document(&path, &world).unwrap();

    let mut session = EditorSession::default();
    session.load_world_info(&path).unwrap();
    assert_eq!(session.world().to_document(), world);
}

#[test]
fn reload_replaces_rather_than_merges() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");
    card_editor::write_document(
        &first,
        &CharacterCard::new("A")
            .with_trait("One", PersonalTrait::default())
            .with_trait("Two", PersonalTrait::default()),
    )
    .unwrap();
    card_editor::write_document(
        &second,
        &CharacterCard::new("B").with_relationship("C", Relationship::default()),
    )
    .unwrap();

    let mut session = EditorSession::default();
    session.load_character_card(&first).unwrap();
    session.load_character_card(&second).unwrap();

    assert!(session.character().traits.is_empty());
    assert_eq!(session.character().relationships.len(), 1);
    assert_eq!(session.character().chinese_name, "B");
}
