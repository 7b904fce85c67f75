use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::resolve::Schema;

/// Commanded-velocity sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandsConfig {
    pub curriculum: bool,
    pub max_curriculum: f64,
    /// lin_vel_x, lin_vel_y, ang_vel_yaw and heading.
    pub num_commands: u32,
    /// Seconds between command resamples.
    pub resampling_time: f64,
    /// Compute the yaw command from a heading error instead of sampling it.
    pub heading_command: bool,
    pub ranges: CommandRangesConfig,
}

/// `(min, max)` sampling range per command axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRangesConfig {
    pub lin_vel_x: (f64, f64),
    pub lin_vel_y: (f64, f64),
    pub ang_vel_yaw: (f64, f64),
    pub heading: (f64, f64),
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            curriculum: false,
            max_curriculum: 1.0,
            num_commands: 4,
            resampling_time: 10.0,
            heading_command: true,
            ranges: CommandRangesConfig::default(),
        }
    }
}

impl Default for CommandRangesConfig {
    fn default() -> Self {
        Self {
            lin_vel_x: (-1.0, 1.0),
            lin_vel_y: (-1.0, 1.0),
            ang_vel_yaw: (-1.0, 1.0),
            heading: (-PI, PI),
        }
    }
}

impl Schema for CommandsConfig {
    const NAME: &'static str = "CommandsConfig";
}

impl Schema for CommandRangesConfig {
    const NAME: &'static str = "CommandRangesConfig";
}
