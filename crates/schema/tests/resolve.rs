use schema::{
    resolve, specialize, CommandsConfig, ConfigError, DomainRandConfig, MeshType, ObservationConfig, Patch,
    Sensor, TaskConfig, TerrainConfig, TrainConfig,
};
use serde_json::json;

#[test]
fn empty_patch_yields_defaults() {
    let terrain: TerrainConfig = resolve(&Patch::new()).unwrap();
    assert_eq!(terrain, TerrainConfig::default());
}

#[test]
fn explicit_fields_replace_only_themselves() {
    let patch = Patch::new()
        .set("friction_range", json!([0.4, 2.5]))
        .set("randomize_base_mass", true);
    let rand: DomainRandConfig = resolve(&patch).unwrap();

    let base = DomainRandConfig::default();
    assert_eq!(rand.friction_range, (0.4, 2.5));
    assert!(rand.randomize_base_mass);
    assert_eq!(
        rand,
        DomainRandConfig {
            friction_range: (0.4, 2.5),
            randomize_base_mass: true,
            ..base
        }
    );
}

#[test]
fn later_entries_win() {
    let patch = Patch::new().set("num_rows", 3).set("num_rows", 7);
    let terrain: TerrainConfig = resolve(&patch).unwrap();
    assert_eq!(terrain.num_rows, 7);
}

#[test]
fn unknown_field_is_rejected() {
    let err = resolve::<TerrainConfig>(&Patch::new().set("num_tiles", 3)).unwrap_err();
    assert_eq!(err, ConfigError::UnknownField { path: "num_tiles".into() });
}

#[test]
fn unknown_nested_field_is_rejected() {
    let patch = Patch::new().merge("ranges", Patch::new().set("lin_vel_w", json!([0.0, 1.0])));
    let err = resolve::<CommandsConfig>(&patch).unwrap_err();
    assert_eq!(err, ConfigError::UnknownField { path: "ranges.lin_vel_w".into() });
}

#[test]
fn incompatible_kind_is_rejected() {
    let err = resolve::<TerrainConfig>(&Patch::new().set("num_rows", "ten")).unwrap_err();
    assert_eq!(
        err,
        ConfigError::TypeMismatch {
            path: "num_rows".into(),
            expected: "number",
            found: "string",
        }
    );
}

#[test]
fn fractional_value_for_integer_field_is_rejected() {
    let err = resolve::<TerrainConfig>(&Patch::new().set("num_rows", 2.5)).unwrap_err();
    assert!(matches!(err, ConfigError::Deserialize { schema: "TerrainConfig", .. }), "{err:?}");
}

#[test]
fn integer_is_coerced_into_float_field() {
    let terrain: TerrainConfig = resolve(&Patch::new().set("border_size", 30)).unwrap();
    assert!((terrain.border_size - 30.0).abs() < f64::EPSILON);
}

#[test]
fn range_with_wrong_arity_is_rejected() {
    let err = resolve::<DomainRandConfig>(&Patch::new().set("friction_range", json!([0.1, 0.2, 0.3]))).unwrap_err();
    assert!(matches!(err, ConfigError::Deserialize { .. }), "{err:?}");
}

#[test]
fn unknown_sensor_is_rejected() {
    let patch = Patch::new().set("sensors", json!(["projected_gravity", "lidar"]));
    let err = resolve::<ObservationConfig>(&patch).unwrap_err();
    assert!(matches!(err, ConfigError::Deserialize { schema: "ObservationConfig", .. }), "{err:?}");
}

#[test]
fn sensor_order_is_preserved() {
    let patch = Patch::new()
        .set("sensors", json!(["motor_vel", "projected_gravity"]))
        .set("critic_privileged_sensors", json!(["friction"]));
    let obs: ObservationConfig = resolve(&patch).unwrap();
    assert_eq!(obs.sensors, vec![Sensor::MotorVel, Sensor::ProjectedGravity]);
    assert_eq!(
        obs.critic_sensors().collect::<Vec<_>>(),
        vec![Sensor::MotorVel, Sensor::ProjectedGravity, Sensor::Friction]
    );
}

#[test]
fn nested_merge_keeps_siblings() {
    let patch = Patch::new().merge(
        "domain_rand",
        Patch::new().set("randomize_gains", true),
    );
    let task: TaskConfig = resolve(&patch).unwrap();
    assert!(task.domain_rand.randomize_gains);
    assert_eq!(task.domain_rand.friction_range, DomainRandConfig::default().friction_range);
    assert_eq!(task.terrain, TerrainConfig::default());
}

#[test]
fn nested_record_replacement_is_resolved_independently() {
    let flat_rows: TerrainConfig = resolve(&Patch::new().set("num_rows", 2)).unwrap();
    let patch = Patch::new()
        .merge("terrain", Patch::new().set("num_cols", 9))
        .record("terrain", &flat_rows)
        .unwrap();
    let task: TaskConfig = resolve(&patch).unwrap();

    assert_eq!(task.terrain.num_rows, 2);
    // the replacement discards what earlier layers merged in
    assert_eq!(task.terrain.num_cols, 1);
}

#[test]
fn partial_object_assignment_is_rejected() {
    let patch = Patch::new().set("terrain", json!({ "num_rows": 2 }));
    let err = resolve::<TaskConfig>(&patch).unwrap_err();
    assert!(matches!(err, ConfigError::Deserialize { schema: "TaskConfig", .. }), "{err:?}");
}

#[test]
fn mapping_merge_touches_existing_keys_only() {
    let patch = Patch::new().merge("control", Patch::new().merge("stiffness", Patch::new().set("joint", 40.0)));
    let task: TaskConfig = resolve(&patch).unwrap();
    assert_eq!(task.control.stiffness.get("joint"), Some(&40.0));

    let patch = Patch::new().merge("control", Patch::new().merge("stiffness", Patch::new().set("hip", 40.0)));
    let err = resolve::<TaskConfig>(&patch).unwrap_err();
    assert_eq!(err, ConfigError::UnknownField { path: "control.stiffness.hip".into() });

    let patch = Patch::new().merge("control", Patch::new().set("stiffness", json!({ "hip": 40.0 })));
    let task: TaskConfig = resolve(&patch).unwrap();
    assert_eq!(task.control.stiffness.len(), 1);
    assert_eq!(task.control.stiffness.get("hip"), Some(&40.0));
}

#[test]
fn specialize_starts_from_given_record() {
    let trimesh = TerrainConfig {
        mesh_type: MeshType::Trimesh,
        num_rows: 10,
        ..TerrainConfig::default()
    };
    let specialized = specialize(&trimesh, &Patch::new().set("terrain_type", "stairs")).unwrap();
    assert_eq!(specialized.mesh_type, MeshType::Trimesh);
    assert_eq!(specialized.num_rows, 10);
    assert_eq!(specialized.terrain_type, "stairs");
    // the input is untouched
    assert_eq!(trimesh.terrain_type, "flat");
}

#[test]
fn defaults_are_fresh_per_construction() {
    let mut first: TerrainConfig = resolve(&Patch::new()).unwrap();
    let second: TerrainConfig = resolve(&Patch::new()).unwrap();
    first.terrain_kwargs.insert("seed".into(), json!(1));
    first.measured_points_x.clear();

    assert!(second.terrain_kwargs.is_empty());
    assert_eq!(second.measured_points_x.len(), 11);
}

#[test]
fn targets_serialize_under_target_key() {
    let train = serde_json::to_value(TrainConfig::default()).unwrap();
    assert_eq!(train["_target_"], json!("rsl_rl.runners.OnPolicyRunner"));
    assert_eq!(train["algorithm"]["_target_"], json!("rsl_rl.algorithms.PPO"));

    let err = resolve::<TrainConfig>(&Patch::new().set("_target_", "rsl_rl.runners.Unknown")).unwrap_err();
    assert!(matches!(err, ConfigError::Deserialize { .. }), "{err:?}");
}

#[test]
fn patch_from_json_document() {
    let patch = Patch::parse(r#"{ "terrain": { "num_rows": 4 }, "env": { "num_envs": 256 } }"#).unwrap();
    let task: TaskConfig = resolve(&patch).unwrap();
    assert_eq!(task.terrain.num_rows, 4);
    assert_eq!(task.env.num_envs, 256);

    assert!(matches!(Patch::parse("[1, 2]"), Err(ConfigError::InvalidPatch(_))));
    assert!(matches!(Patch::parse("{ nope"), Err(ConfigError::InvalidPatch(_))));
}
