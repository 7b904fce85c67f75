use serde::{Deserialize, Serialize};

use crate::resolve::Schema;

/// Robot description and how the simulator should load it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetConfig {
    pub file: String,
    pub foot_name: String,
    /// Bodies whose contacts are penalized.
    pub penalize_contacts_on: Vec<String>,
    /// Bodies whose contacts end the episode.
    pub terminate_after_contacts_on: Vec<String>,
    pub disable_gravity: bool,
    pub collapse_fixed_joints: bool,
    pub fix_base_link: bool,
    /// 0 none, 1 position target, 2 velocity target, 3 effort.
    pub default_dof_drive_mode: u32,
    pub self_collisions: bool,
    pub replace_cylinder_with_capsule: bool,
    pub flip_visual_attachments: bool,
    pub density: f64,
    pub angular_damping: f64,
    pub linear_damping: f64,
    pub max_angular_velocity: f64,
    pub max_linear_velocity: f64,
    pub armature: f64,
    pub thickness: f64,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            file: "{LEGGED_GYM_ROOT_DIR}/resources/robots/a1/urdf/a1.urdf".to_string(),
            foot_name: "foot".to_string(),
            penalize_contacts_on: vec!["thigh".to_string(), "calf".to_string()],
            terminate_after_contacts_on: vec!["base".to_string()],
            disable_gravity: false,
            collapse_fixed_joints: true,
            fix_base_link: false,
            default_dof_drive_mode: 3,
            self_collisions: true,
            replace_cylinder_with_capsule: true,
            flip_visual_attachments: true,
            density: 0.001,
            angular_damping: 0.0,
            linear_damping: 0.0,
            max_angular_velocity: 1000.0,
            max_linear_velocity: 1000.0,
            armature: 0.0,
            thickness: 0.01,
        }
    }
}

impl Schema for AssetConfig {
    const NAME: &'static str = "AssetConfig";
}
