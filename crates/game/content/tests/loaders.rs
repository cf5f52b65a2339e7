use std::fs;

use ptu_content::{ActorLoader, ConfigLoader, ContentFactory, LocaleLoader};
use ptu_core::{
    ActorKind, DerivationEngine, Localizer, SkillRank, SystemConfig, ValidationError,
};
use tempfile::TempDir;

#[test]
fn json_actor_loads_and_derives() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("ace.json");
    fs::write(
        &path,
        r#"{
            "name": "Ace",
            "type": "trainer",
            "system": {
                "stats": { "def": { "base": 40 } },
                "exp": { "milestone": 3, "dexExp": 4 },
                "skills": { "combat": { "value": 9, "modifier": "+2" } }
            }
        }"#,
    )
    .expect("write");

    let record = ActorLoader::load(&path).expect("load");
    assert_eq!(record.name, "Ace");
    assert_eq!(record.actor.kind(), ActorKind::Trainer);

    let config = SystemConfig::default();
    let locale = ptu_content::LocaleTable::new();
    let engine = DerivationEngine::new(&config, &locale);
    let mut actor = record.actor;
    engine.derive(&mut actor);

    let trainer = actor.as_trainer().expect("trainer");
    assert_eq!(trainer.level, 4);
    assert_eq!(trainer.common.evasion.physical.value, 30);
    assert_eq!(trainer.skills.combat.roll, "6d6+2");
}

#[test]
fn toml_actor_loads() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("eevee.toml");
    fs::write(
        &path,
        r#"
name = "Eevee"
type = "creature"

[system.stats.spd]
base = 6
cs = 2

[system.capabilities]
size = "Small"
"#,
    )
    .expect("write");

    let record = ActorLoader::load(&path).expect("load");
    assert_eq!(record.actor.kind(), ActorKind::Creature);
    assert_eq!(record.actor.stats().spd.base, 6);
    assert_eq!(record.actor.stats().spd.cs, 2.0);
}

#[test]
fn type_violation_reports_field_path() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"{ "type": "trainer", "system": { "ap": { "used": { "spent": "lots" } } } }"#,
    )
    .expect("write");

    let err = ActorLoader::load(&path).unwrap_err();
    let validation = err
        .downcast_ref::<ValidationError>()
        .expect("validation error in chain");
    assert_eq!(validation.path, "ap.used.spent");
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("ace.yaml");
    fs::write(&path, "type: trainer").expect("write");
    assert!(ActorLoader::load(&path).is_err());
}

#[test]
fn config_overrides_keep_other_defaults() {
    let config = ConfigLoader::parse(
        r#"
evasion_cap = 25

[[skill_ranks]]
pips = 7
rank = "virtuoso"
"#,
    )
    .expect("parse");

    assert_eq!(config.evasion_cap, 25);
    assert_eq!(config.skill_dice_cap, SystemConfig::DEFAULT_SKILL_DICE_CAP);
    assert_eq!(config.skill_rank(7), Some(SkillRank::Virtuoso));
    assert_eq!(config.skill_rank(6), None);
}

#[test]
fn factory_falls_back_to_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let factory = ContentFactory::new(dir.path());

    assert_eq!(factory.load_config().expect("config"), SystemConfig::default());
    assert!(factory.load_locale().expect("locale").is_empty());
}

#[test]
fn factory_reads_data_directory() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir_all(dir.path().join("lang")).expect("mkdir");
    fs::create_dir_all(dir.path().join("actors")).expect("mkdir");
    fs::write(dir.path().join("config.toml"), "evasion_cap = 20\n").expect("write");
    fs::write(
        dir.path().join("lang").join("en.json"),
        r#"{ "PTU": { "Master": "Master" } }"#,
    )
    .expect("write");
    fs::write(
        dir.path().join("actors").join("mon.json"),
        r#"{ "type": "creature", "system": { "stats": { "sdef": { "base": 25 } } } }"#,
    )
    .expect("write");

    let factory = ContentFactory::new(dir.path());
    let config = factory.load_config().expect("config");
    let locale = factory.load_locale().expect("locale");
    let record = factory.load_actor("mon.json").expect("actor");

    let engine = DerivationEngine::new(&config, &locale);
    let actor = engine.derived(&record.actor);
    assert_eq!(actor.common().evasion.special.value, 20);
    assert_eq!(locale.localize("PTU.Master"), "Master");
}

#[test]
fn locale_loader_reports_missing_file() {
    let dir = TempDir::new().expect("tempdir");
    assert!(LocaleLoader::load(&dir.path().join("xx.json")).is_err());
}

#[test]
fn bundled_sample_data_derives() {
    let data_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../data");
    let factory = ContentFactory::new(&data_dir);
    let config = factory.load_config().expect("config");
    let locale = factory.load_locale().expect("locale");
    let engine = DerivationEngine::new(&config, &locale);

    let ace = engine.derived(&factory.load_actor("ace.json").expect("ace").actor);
    let trainer = ace.as_trainer().expect("trainer");
    assert_eq!(trainer.exp.value, 26);
    assert_eq!(trainer.level, 3);
    // 3 × 2 + 14 × 3 + 10
    assert_eq!(trainer.health.max, 58);
    assert_eq!(trainer.ap.max, 6);
    assert_eq!(trainer.ap.value, 5);
    assert_eq!(trainer.skills.command.roll, "5d6+1");
    assert_eq!(trainer.skills.command.rank_label, "Expert");

    let eevee = engine.derived(&factory.load_actor("eevee.toml").expect("eevee").actor);
    // 6 × 3 + 10
    assert_eq!(eevee.health().max, 28);
    // 6 × 0.9 = 5.4
    assert_eq!(eevee.common().evasion.speed.value, 5);
}

#[test]
fn extreme_in_range_record_derives_without_panicking() {
    let raw = serde_json::json!({
        "type": "trainer",
        "system": {
            "stats": { "atk": { "base": i32::MAX, "feats": 1 } },
            "exp": { "milestone": 300_000_000 }
        }
    });
    let record = ActorLoader::from_value(&raw).expect("in range");

    let config = SystemConfig::default();
    let engine = DerivationEngine::new(&config, &ptu_core::KeyLocalizer);
    let actor = engine.derived(&record.actor);
    assert_eq!(actor.stats().atk.total, i32::MAX);
    assert_eq!(actor.as_trainer().expect("trainer").exp.value, i32::MAX);
}

#[test]
fn oversized_integer_reports_its_field() {
    let raw = serde_json::json!({ "type": "trainer", "system": { "money": 3_000_000_000_i64 } });
    let err = ActorLoader::from_value(&raw).unwrap_err();
    let validation = err.downcast_ref::<ValidationError>().expect("validation error");
    assert_eq!(validation.path, "money");
}
