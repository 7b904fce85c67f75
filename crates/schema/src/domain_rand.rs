use serde::{Deserialize, Serialize};

use crate::resolve::Schema;

/// Per-episode randomization of physical parameters. Ranges are `(min, max)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRandConfig {
    pub randomize_friction: bool,
    pub friction_range: (f64, f64),
    pub randomize_base_mass: bool,
    /// Mass added to the base [kg].
    pub added_mass_range: (f64, f64),
    pub push_robots: bool,
    pub push_interval_s: f64,
    pub max_push_vel_xy: f64,
    pub randomize_gains: bool,
    pub added_stiffness_range: (f64, f64),
    pub added_damping_range: (f64, f64),
}

impl Default for DomainRandConfig {
    fn default() -> Self {
        Self {
            randomize_friction: true,
            friction_range: (0.5, 1.25),
            randomize_base_mass: false,
            added_mass_range: (-1.5, 2.5),
            push_robots: true,
            push_interval_s: 15.0,
            max_push_vel_xy: 1.0,
            randomize_gains: false,
            added_stiffness_range: (-5.0, 5.0),
            added_damping_range: (-0.5, 0.5),
        }
    }
}

impl Schema for DomainRandConfig {
    const NAME: &'static str = "DomainRandConfig";
}
