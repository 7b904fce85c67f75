//! Reward presets.

use schema::{ConfigError, Patch, Preset, Registry, RewardScalesConfig, RewardsConfig};

pub const LEGGED_GYM: &str = "legged_gym";

/// # Errors
///
/// Fails only if two presets share a name.
pub fn registry() -> Result<Registry<RewardsConfig>, ConfigError> {
    Registry::new().with(Preset::root(LEGGED_GYM, legged_gym_overrides))
}

/// Reward weights tuned for the A1 on rough terrain.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the preset does not resolve.
pub fn legged_gym() -> Result<RewardsConfig, ConfigError> {
    registry()?.resolve(LEGGED_GYM)
}

fn legged_gym_overrides() -> Result<Patch, ConfigError> {
    let scales = RewardScalesConfig {
        torques: -0.0002,
        dof_pos_limits: -10.0,
        ..RewardScalesConfig::default()
    };
    Patch::new()
        .set("soft_dof_pos_limit", 0.9)
        .set("base_height_target", 0.25)
        .record("scales", &scales)
}
