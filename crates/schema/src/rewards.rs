use serde::{Deserialize, Serialize};

use crate::resolve::Schema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardsConfig {
    /// Clip the summed reward at zero.
    pub only_positive_rewards: bool,
    pub tracking_sigma: f64,
    /// Fractions of the URDF limits beyond which limit penalties apply.
    pub soft_dof_pos_limit: f64,
    pub soft_dof_vel_limit: f64,
    pub soft_torque_limit: f64,
    pub base_height_target: f64,
    pub max_contact_force: f64,
    pub scales: RewardScalesConfig,
}

/// Weight of each reward term. A zero weight disables the term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardScalesConfig {
    pub termination: f64,
    pub tracking_lin_vel: f64,
    pub tracking_ang_vel: f64,
    pub lin_vel_z: f64,
    pub ang_vel_xy: f64,
    pub orientation: f64,
    pub torques: f64,
    pub dof_vel: f64,
    pub dof_acc: f64,
    pub base_height: f64,
    pub feet_air_time: f64,
    pub collision: f64,
    pub feet_stumble: f64,
    pub action_rate: f64,
    pub stand_still: f64,
    pub dof_pos_limits: f64,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            only_positive_rewards: true,
            tracking_sigma: 0.25,
            soft_dof_pos_limit: 1.0,
            soft_dof_vel_limit: 1.0,
            soft_torque_limit: 1.0,
            base_height_target: 1.0,
            max_contact_force: 100.0,
            scales: RewardScalesConfig::default(),
        }
    }
}

impl Default for RewardScalesConfig {
    fn default() -> Self {
        Self {
            termination: 0.0,
            tracking_lin_vel: 1.0,
            tracking_ang_vel: 0.5,
            lin_vel_z: -2.0,
            ang_vel_xy: -0.05,
            orientation: 0.0,
            torques: -0.000_01,
            dof_vel: 0.0,
            dof_acc: -2.5e-7,
            base_height: 0.0,
            feet_air_time: 1.0,
            collision: -1.0,
            feet_stumble: 0.0,
            action_rate: -0.01,
            stand_still: 0.0,
            dof_pos_limits: 0.0,
        }
    }
}

impl Schema for RewardsConfig {
    const NAME: &'static str = "RewardsConfig";
}

impl Schema for RewardScalesConfig {
    const NAME: &'static str = "RewardScalesConfig";
}
