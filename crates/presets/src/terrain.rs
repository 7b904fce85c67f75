//! Terrain presets.
//!
//! `locomotion_randomized` extends `locomotion_curriculum`, which extends
//! `trimesh`; `flat` stands alone.

use schema::terrain::{decimetre_grid, TILE_TYPE_PROPORTIONS};
use schema::{ConfigError, Patch, Preset, Registry, TerrainConfig};
use serde_json::{json, Map, Value};

pub const FLAT: &str = "flat";
pub const TRIMESH: &str = "trimesh";
pub const LOCOMOTION_CURRICULUM: &str = "locomotion_curriculum";
pub const LOCOMOTION_RANDOMIZED: &str = "locomotion_randomized";

/// # Errors
///
/// Fails only if two presets share a name.
pub fn registry() -> Result<Registry<TerrainConfig>, ConfigError> {
    Registry::new()
        .with(Preset::root(FLAT, flat_overrides))?
        .with(Preset::root(TRIMESH, trimesh_overrides))?
        .with(Preset::extends(LOCOMOTION_CURRICULUM, TRIMESH, locomotion_curriculum_overrides))?
        .with(Preset::extends(
            LOCOMOTION_RANDOMIZED,
            LOCOMOTION_CURRICULUM,
            locomotion_randomized_overrides,
        ))
}

/// Infinite ground plane without curriculum.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the preset does not resolve.
pub fn flat() -> Result<TerrainConfig, ConfigError> {
    registry()?.resolve(FLAT)
}

/// Tiled triangle-mesh terrain with a difficulty curriculum.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the preset does not resolve.
pub fn trimesh() -> Result<TerrainConfig, ConfigError> {
    registry()?.resolve(TRIMESH)
}

/// # Errors
///
/// Returns a [`ConfigError`] if the preset does not resolve.
pub fn locomotion_curriculum() -> Result<TerrainConfig, ConfigError> {
    registry()?.resolve(LOCOMOTION_CURRICULUM)
}

/// # Errors
///
/// Returns a [`ConfigError`] if the preset does not resolve.
pub fn locomotion_randomized() -> Result<TerrainConfig, ConfigError> {
    registry()?.resolve(LOCOMOTION_RANDOMIZED)
}

fn flat_overrides() -> Result<Patch, ConfigError> {
    Ok(Patch::new().set("mesh_type", "plane").set("curriculum", false))
}

fn trimesh_overrides() -> Result<Patch, ConfigError> {
    Ok(Patch::new()
        .set("mesh_type", "trimesh")
        .set("curriculum", true)
        .set("terrain_type", "flat")
        .set("horizontal_scale", 0.1)
        .set("vertical_scale", 0.005)
        .set("border_size", 25.0)
        // 1.6 m x 1 m grid of height samples around the base
        .set("measured_points_x", decimetre_grid(8))
        .set("measured_points_y", decimetre_grid(5))
        .set("max_init_terrain_level", 5)
        .set("tile_length", 8.0)
        .set("tile_width", 8.0)
        .set("num_rows", 10)
        .set("num_cols", 20)
        .set("slope_threshold", 0.75))
}

fn locomotion_curriculum_overrides() -> Result<Patch, ConfigError> {
    // smooth slope, rough slope, stairs up, stairs down, discrete obstacles
    let mut kwargs = Map::new();
    kwargs.insert(TILE_TYPE_PROPORTIONS.to_string(), json!([0.1, 0.1, 0.35, 0.25, 0.2]));

    Ok(Patch::new()
        .set("terrain_type", "locomotion_curriculum")
        .set("terrain_kwargs", Value::Object(kwargs)))
}

fn locomotion_randomized_overrides() -> Result<Patch, ConfigError> {
    Ok(Patch::new().set("terrain_type", "locomotion_randomized"))
}
