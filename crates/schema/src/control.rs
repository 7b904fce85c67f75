use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::resolve::Schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlType {
    /// Position targets.
    P,
    /// Velocity targets.
    V,
    /// Torques.
    T,
}

/// PD gains and action scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlConfig {
    pub control_type: ControlType,
    /// Proportional gain per joint-name fragment [N*m/rad].
    pub stiffness: BTreeMap<String, f64>,
    /// Derivative gain per joint-name fragment [N*m*s/rad].
    pub damping: BTreeMap<String, f64>,
    pub action_scale: f64,
    /// Simulation steps per policy step.
    pub decimation: u32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            control_type: ControlType::P,
            stiffness: BTreeMap::from([("joint".to_string(), 20.0)]),
            damping: BTreeMap::from([("joint".to_string(), 0.5)]),
            action_scale: 0.25,
            decimation: 4,
        }
    }
}

impl Schema for ControlConfig {
    const NAME: &'static str = "ControlConfig";
}
