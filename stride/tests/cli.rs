use std::process::{Command, Output};

use serde_json::{json, Value};

fn stride(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stride"))
        .args(args)
        .output()
        .expect("failed to launch stride")
}

fn resolved(args: &[&str]) -> Value {
    let output = stride(args);
    assert!(
        output.status.success(),
        "stride {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

fn fixture(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn show_prints_resolved_terrain() {
    let terrain = resolved(&["show", "terrain", "locomotion_randomized"]);
    assert_eq!(terrain["terrain_type"], json!("locomotion_randomized"));
    assert_eq!(terrain["mesh_type"], json!("trimesh"));
    assert_eq!(terrain["num_rows"], json!(10));
    assert_eq!(terrain["terrain_kwargs"]["tile_type_proportions"], json!([0.1, 0.1, 0.35, 0.25, 0.2]));
}

#[test]
fn set_assignments_override_the_preset() {
    let task = resolved(&[
        "show",
        "task",
        "locomotion",
        "--compact",
        "--set",
        "terrain.num_rows=4",
        "--set",
        "env.num_envs=512",
    ]);
    assert_eq!(task["terrain"]["num_rows"], json!(4));
    assert_eq!(task["env"]["num_envs"], json!(512));
    assert_eq!(task["domain_rand"]["friction_range"], json!([0.4, 2.5]));
}

#[test]
fn set_wins_over_patch_file() {
    let patch = fixture("low_friction.json");
    let task = resolved(&[
        "show",
        "task",
        "locomotion",
        "--patch",
        &patch,
        "--set",
        "terrain.num_cols=3",
    ]);
    assert_eq!(task["domain_rand"]["friction_range"], json!([0.1, 0.6]));
    assert_eq!(task["terrain"]["num_cols"], json!(3));
}

#[test]
fn variables_feed_interpolation() {
    let train = resolved(&["show", "amp-train", "amp", "--var", "iterations=12"]);
    assert_eq!(train["runner"]["iterations"], json!(12));
    assert_eq!(train["algorithm"]["_target_"], json!("rsl_rl.algorithms.AMPPPO"));

    let train = resolved(&["show", "amp-train", "amp"]);
    assert_eq!(train["runner"]["iterations"], json!(50_000));
}

#[test]
fn unknown_field_fails_with_path() {
    let output = stride(&["show", "task", "locomotion", "--set", "domain_rand.randomize_gravity=true"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown field `domain_rand.randomize_gravity`"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn unknown_kind_is_rejected_by_the_parser() {
    let output = stride(&["show", "robot", "a1"]);
    assert!(!output.status.success());
}

#[test]
fn watch_requires_a_patch_file() {
    let output = stride(&["show", "task", "locomotion", "--watch"]);
    assert!(!output.status.success());
}

#[test]
fn list_shows_chains() {
    let output = stride(&["list"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("trimesh -> locomotion_curriculum -> locomotion_randomized"), "{stdout}");
    assert!(stdout.contains("amp-train"), "{stdout}");
}

#[test]
fn patch_file_can_replace_a_mapping() {
    let patch = fixture("stairs_mix.json");
    let terrain = resolved(&["show", "terrain", "trimesh", "--patch", &patch]);
    assert_eq!(terrain["terrain_kwargs"], json!({ "tile_type_proportions": [0.0, 0.0, 0.5, 0.5, 0.0] }));
    assert_eq!(terrain["num_rows"], json!(4));
    assert_eq!(terrain["num_cols"], json!(20));
}
