use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resolve::Schema;

/// Key in [`TerrainConfig::terrain_kwargs`] holding the per-tile-type mix.
pub const TILE_TYPE_PROPORTIONS: &str = "tile_type_proportions";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshType {
    None,
    Plane,
    Heightfield,
    Trimesh,
}

/// Ground generation parameters. Lengths are in metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    pub mesh_type: MeshType,
    pub curriculum: bool,
    /// Name of the terrain generator the simulator should use.
    pub terrain_type: String,
    /// Free-form arguments forwarded to the terrain generator.
    pub terrain_kwargs: BTreeMap<String, Value>,
    pub static_friction: f64,
    pub dynamic_friction: f64,
    pub restitution: f64,
    pub horizontal_scale: f64,
    pub vertical_scale: f64,
    pub border_size: f64,
    pub measure_heights: bool,
    pub measured_points_x: Vec<f64>,
    pub measured_points_y: Vec<f64>,
    pub max_init_terrain_level: u32,
    pub tile_length: f64,
    pub tile_width: f64,
    pub num_rows: u32,
    pub num_cols: u32,
    /// Slopes steeper than this are turned into vertical surfaces.
    pub slope_threshold: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            mesh_type: MeshType::Plane,
            curriculum: false,
            terrain_type: "flat".to_string(),
            terrain_kwargs: BTreeMap::new(),
            static_friction: 1.0,
            dynamic_friction: 1.0,
            restitution: 0.0,
            horizontal_scale: 0.25,
            vertical_scale: 0.005,
            border_size: 5.0,
            measure_heights: true,
            measured_points_x: decimetre_grid(5),
            measured_points_y: decimetre_grid(5),
            max_init_terrain_level: 0,
            tile_length: 8.0,
            tile_width: 8.0,
            num_rows: 1,
            num_cols: 1,
            slope_threshold: 0.75,
        }
    }
}

impl Schema for TerrainConfig {
    const NAME: &'static str = "TerrainConfig";
}

impl TerrainConfig {
    /// The tile-type mix, if the generator arguments carry one.
    #[must_use]
    pub fn tile_type_proportions(&self) -> Option<Vec<f64>> {
        self.terrain_kwargs
            .get(TILE_TYPE_PROPORTIONS)?
            .as_array()?
            .iter()
            .map(Value::as_f64)
            .collect()
    }

    /// Number of height samples taken around the robot base.
    #[must_use]
    pub fn num_height_points(&self) -> usize {
        self.measured_points_x.len() * self.measured_points_y.len()
    }
}

/// Sample points from `-half_span / 10` to `half_span / 10` in 0.1 m steps.
#[must_use]
pub fn decimetre_grid(half_span: i32) -> Vec<f64> {
    (-half_span..=half_span).map(|i| f64::from(i) / 10.0).collect()
}
