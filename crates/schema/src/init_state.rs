use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::resolve::Schema;

/// Pose the robot is reset to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitStateConfig {
    /// Base position `[x, y, z]` in metres.
    pub pos: [f64; 3],
    /// Base orientation quaternion `[x, y, z, w]`.
    pub rot: [f64; 4],
    pub lin_vel: [f64; 3],
    pub ang_vel: [f64; 3],
    /// Joint angles in radians when the action is zero.
    pub default_joint_angles: BTreeMap<String, f64>,
}

impl Default for InitStateConfig {
    fn default() -> Self {
        Self {
            pos: [0.0, 0.0, 1.0],
            rot: [0.0, 0.0, 0.0, 1.0],
            lin_vel: [0.0; 3],
            ang_vel: [0.0; 3],
            default_joint_angles: joint_angles(&[
                ("1_FR_hip_joint", -0.1),
                ("1_FR_thigh_joint", 0.8),
                ("1_FR_calf_joint", -1.5),
                ("2_FL_hip_joint", 0.1),
                ("2_FL_thigh_joint", 0.8),
                ("2_FL_calf_joint", -1.5),
                ("3_RR_hip_joint", -0.1),
                ("3_RR_thigh_joint", 1.0),
                ("3_RR_calf_joint", -1.5),
                ("4_RL_hip_joint", 0.1),
                ("4_RL_thigh_joint", 1.0),
                ("4_RL_calf_joint", -1.5),
            ]),
        }
    }
}

impl Schema for InitStateConfig {
    const NAME: &'static str = "InitStateConfig";
}

/// Build a fresh joint-angle mapping.
#[must_use]
pub fn joint_angles(angles: &[(&str, f64)]) -> BTreeMap<String, f64> {
    angles
        .iter()
        .map(|&(joint, angle)| (joint.to_string(), angle))
        .collect()
}
