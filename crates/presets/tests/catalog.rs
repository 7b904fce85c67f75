use std::fs;

use presets::{Catalog, Kind};
use schema::{ConfigError, Patch, TaskConfig, Variables};
use serde_json::json;

fn patch_file(name: &str) -> Patch {
    let path = format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"));
    let json = fs::read_to_string(path).unwrap();
    Patch::parse(&json).unwrap()
}

#[test]
fn catalog_builds_and_lists_presets() {
    let catalog = Catalog::new().unwrap();
    assert_eq!(
        catalog.names(Kind::Terrain),
        ["flat", "locomotion_curriculum", "locomotion_randomized", "trimesh"]
    );
    assert_eq!(catalog.names(Kind::Task), ["amp", "locomotion"]);
    assert_eq!(catalog.names(Kind::Train), ["ppo"]);
    assert_eq!(catalog.names(Kind::AmpTrain), ["amp"]);
    assert_eq!(catalog.names(Kind::Rewards), ["legged_gym"]);
}

#[test]
fn chains_are_reported_root_first() {
    let catalog = Catalog::new().unwrap();
    assert_eq!(
        catalog.chain(Kind::Terrain, "locomotion_randomized").unwrap(),
        ["trimesh", "locomotion_curriculum", "locomotion_randomized"]
    );
    assert_eq!(catalog.chain(Kind::Task, "locomotion").unwrap(), ["locomotion"]);
}

#[test]
fn kinds_parse_from_their_names() {
    for kind in Kind::ALL {
        assert_eq!(kind.name().parse::<Kind>().unwrap(), kind);
    }
    assert!("reward".parse::<Kind>().is_err());
}

#[test]
fn resolved_json_carries_targets() {
    let catalog = Catalog::new().unwrap();
    let task = catalog
        .resolve_json(Kind::Task, "amp", &[], &Variables::new())
        .unwrap();
    assert_eq!(task["_target_"], json!("legged_gym.envs.a1_amp.A1AMP"));
    assert_eq!(task["control"]["decimation"], json!(6));

    let train = catalog
        .resolve_json(Kind::AmpTrain, "amp", &[], &Variables::new().with("iterations", "10"))
        .unwrap();
    assert_eq!(train["_target_"], json!("rsl_rl.runners.AMPOnPolicyRunner"));
    assert_eq!(train["runner"]["iterations"], json!(10));
}

#[test]
fn patch_file_layers_over_preset() {
    let catalog = Catalog::new().unwrap();
    let value = catalog
        .resolve_json(Kind::Task, "locomotion", &[patch_file("rough_stairs.json")], &Variables::new())
        .unwrap();
    let task: TaskConfig = serde_json::from_value(value).unwrap();

    assert_eq!(task.terrain.num_rows, 6);
    assert_eq!(task.terrain.terrain_type, "stairs");
    assert_eq!(task.domain_rand.friction_range, (0.2, 1.0));
    assert!(!task.domain_rand.push_robots);
    // still from the preset
    assert!(task.domain_rand.randomize_base_mass);
    assert_eq!(task.domain_rand.added_mass_range, (-1.5, 2.5));
    assert_eq!(task.env.num_envs, 1024);
}

#[test]
fn patch_file_with_unknown_field_fails() {
    let catalog = Catalog::new().unwrap();
    let err = catalog
        .resolve_json(Kind::Task, "locomotion", &[patch_file("unknown_field.json")], &Variables::new())
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnknownField {
            path: "domain_rand.randomize_gravity".into()
        }
    );
}

#[test]
fn unknown_preset_name_fails() {
    let catalog = Catalog::new().unwrap();
    assert!(matches!(
        catalog.resolve_json(Kind::Terrain, "gravel", &[], &Variables::new()),
        Err(ConfigError::UnknownPreset { name, .. }) if name == "gravel"
    ));
}
