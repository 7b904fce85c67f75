//! Training presets built on the plain PPO schema.
//!
//! AMP training uses its own record and lives in [`crate::amp`].

use schema::{ConfigError, Patch, Preset, Registry, TrainConfig};

pub const PPO: &str = "ppo";

/// # Errors
///
/// Fails only if two presets share a name.
pub fn registry() -> Result<Registry<TrainConfig>, ConfigError> {
    Registry::new().with(Preset::root(PPO, ppo_overrides))
}

fn ppo_overrides() -> Result<Patch, ConfigError> {
    Ok(Patch::new())
}
