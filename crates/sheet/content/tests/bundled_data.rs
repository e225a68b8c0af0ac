use std::path::PathBuf;

use rigsheet_content::{CharacterLoader, ContentFactory};
use rigsheet_core::{ActionLock, ClassOracle, EntryId, InventoryDelta, ScoreEncoding};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

#[test]
fn catalogs_load() {
    let factory = ContentFactory::new(data_dir());
    let classes = factory.load_classes().expect("classes.ron");
    let items = factory.load_items().expect("items.ron");
    let config = factory.load_config().expect("config.toml");

    let ids: Vec<&str> = classes
        .all_classes()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, vec!["medtech", "netrunner", "nomad", "solo", "techie"]);
    assert!(items.len() >= 10);
    assert_eq!(config.default_score_encoding, ScoreEncoding::Detect);
}

#[test]
fn every_character_resolves() {
    let factory = ContentFactory::new(data_dir());
    let names = factory.list_characters().expect("characters dir");
    assert!(names.contains(&"vex".to_string()));

    for name in names {
        let sheet = factory
            .load_sheet(&name)
            .unwrap_or_else(|e| panic!("{name}: {e:#}"));
        let stats = sheet.stats();
        assert!(stats.armor_count <= 1, "{name}");
        assert!(stats.weapon_count <= 3, "{name}");
        assert!(stats.ic_used <= stats.ic, "{name}");
    }
}

#[test]
fn legacy_record_is_normalized() {
    let factory = ContentFactory::new(data_dir());
    let rook = factory.load_sheet("rook").expect("rook");
    assert_eq!(rook.base().score_encoding, Some(ScoreEncoding::Modifier));
    assert_eq!(rook.base().abilities.int, 4);
    assert_eq!(rook.base().abilities.str, -1);
    assert_eq!(rook.stats().speed, 30);
    assert_eq!(rook.stats().ic_remaining, 0);
}

#[test]
fn consumed_sheet_saves_and_reloads() {
    let source = ContentFactory::new(data_dir());
    let mut sheet = source.load_sheet("vex").expect("vex");

    let before = sheet.base().current_hp;
    let used = sheet
        .consume(EntryId(8), &ActionLock::unlocked())
        .expect("stim is consumable");
    assert_eq!(used.inventory_delta, InventoryDelta::Quantity(2));
    assert!(sheet.base().current_hp > before);

    let dir = tempfile::tempdir().expect("tempdir");
    let target = ContentFactory::new(dir.path());
    target.save_sheet("vex", &sheet).expect("save");

    let reloaded = CharacterLoader::load(&target.character_path("vex")).expect("reload");
    assert_eq!(reloaded.character, *sheet.base());
    let stims = reloaded
        .inventory
        .iter()
        .find(|r| r.id == EntryId(8))
        .map(|r| r.quantity);
    assert_eq!(stims, Some(2));
}
