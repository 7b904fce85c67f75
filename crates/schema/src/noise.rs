use serde::{Deserialize, Serialize};

use crate::resolve::Schema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    pub add_noise: bool,
    /// Multiplies every entry of `noise_scales`.
    pub noise_level: f64,
    pub noise_scales: NoiseScalesConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseScalesConfig {
    pub dof_pos: f64,
    pub dof_vel: f64,
    pub lin_vel: f64,
    pub ang_vel: f64,
    pub gravity: f64,
    pub height_measurements: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            add_noise: true,
            noise_level: 1.0,
            noise_scales: NoiseScalesConfig::default(),
        }
    }
}

impl Default for NoiseScalesConfig {
    fn default() -> Self {
        Self {
            dof_pos: 0.01,
            dof_vel: 1.5,
            lin_vel: 0.1,
            ang_vel: 0.2,
            gravity: 0.05,
            height_measurements: 0.1,
        }
    }
}

impl Schema for NoiseConfig {
    const NAME: &'static str = "NoiseConfig";
}

impl Schema for NoiseScalesConfig {
    const NAME: &'static str = "NoiseScalesConfig";
}
