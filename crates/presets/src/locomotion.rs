//! Blind quadruped locomotion over flat ground.
//!
//! Each nested record below is built from its own schema defaults, so the
//! task inherits nothing from the enclosing [`TaskConfig`] defaults for those
//! sub-configs beyond what the record itself declares.

use schema::{
    AssetConfig, CommandRangesConfig, CommandsConfig, ConfigError, DomainRandConfig, InitStateConfig,
    ObservationConfig, Patch, Sensor, TaskConfig,
};

use crate::{rewards, terrain};

pub const LOCOMOTION: &str = "locomotion";

/// # Errors
///
/// Returns a [`ConfigError`] if the preset does not resolve.
pub fn locomotion_task() -> Result<TaskConfig, ConfigError> {
    crate::task::registry()?.resolve(LOCOMOTION)
}

pub(crate) fn locomotion_overrides() -> Result<Patch, ConfigError> {
    let observation = ObservationConfig {
        sensors: vec![
            Sensor::ProjectedGravity,
            Sensor::Commands,
            Sensor::MotorPos,
            Sensor::MotorVel,
            Sensor::LastAction,
            Sensor::YawRate,
        ],
        critic_privileged_sensors: vec![
            Sensor::BaseLinVel,
            Sensor::BaseAngVel,
            Sensor::TerrainHeight,
            Sensor::Friction,
            Sensor::BaseMass,
        ],
        ..ObservationConfig::default()
    };

    let domain_rand = DomainRandConfig {
        friction_range: (0.4, 2.5),
        randomize_base_mass: true,
        ..DomainRandConfig::default()
    };

    let commands = CommandsConfig {
        ranges: CommandRangesConfig {
            lin_vel_x: (-1.0, 2.5),
            ..CommandRangesConfig::default()
        },
        ..CommandsConfig::default()
    };

    let init_state = InitStateConfig {
        pos: [0.0, 0.0, 0.32],
        ..InitStateConfig::default()
    };

    let asset = AssetConfig {
        self_collisions: false,
        ..AssetConfig::default()
    };

    Patch::new()
        .record("terrain", &terrain::flat()?)?
        .record("rewards", &rewards::legged_gym()?)?
        .record("observation", &observation)?
        .record("domain_rand", &domain_rand)?
        .record("commands", &commands)?
        .record("init_state", &init_state)?
        .record("asset", &asset)
}
