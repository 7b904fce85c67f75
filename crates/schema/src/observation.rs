use serde::{Deserialize, Serialize};

use crate::resolve::Schema;

/// Observation sources the environment knows how to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensor {
    ProjectedGravity,
    Commands,
    MotorPos,
    MotorVel,
    LastAction,
    YawRate,
    BaseLinVel,
    BaseAngVel,
    TerrainHeight,
    Friction,
    BaseMass,
    PGain,
    DGain,
}

/// Which sensors feed the policy and which only the critic.
///
/// Order is significant: it is the order in which sensor readings are
/// concatenated into the observation vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationConfig {
    pub sensors: Vec<Sensor>,
    pub critic_privileged_sensors: Vec<Sensor>,
    pub clip_observations: f64,
    pub clip_actions: f64,
}

impl Default for ObservationConfig {
    fn default() -> Self {
        Self {
            sensors: vec![
                Sensor::ProjectedGravity,
                Sensor::Commands,
                Sensor::MotorPos,
                Sensor::MotorVel,
                Sensor::LastAction,
            ],
            critic_privileged_sensors: Vec::new(),
            clip_observations: 100.0,
            clip_actions: 100.0,
        }
    }
}

impl Schema for ObservationConfig {
    const NAME: &'static str = "ObservationConfig";
}

impl ObservationConfig {
    /// Everything the critic sees: the policy sensors followed by the
    /// privileged ones.
    pub fn critic_sensors(&self) -> impl Iterator<Item = Sensor> + '_ {
        self.sensors
            .iter()
            .chain(&self.critic_privileged_sensors)
            .copied()
    }
}
