use serde::{Deserialize, Serialize};

use crate::asset::AssetConfig;
use crate::commands::CommandsConfig;
use crate::control::ControlConfig;
use crate::domain_rand::DomainRandConfig;
use crate::env::EnvConfig;
use crate::init_state::InitStateConfig;
use crate::noise::NoiseConfig;
use crate::observation::ObservationConfig;
use crate::resolve::Schema;
use crate::rewards::RewardsConfig;
use crate::target::TaskTarget;
use crate::terrain::TerrainConfig;

/// Everything needed to build one training environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskConfig {
    #[serde(rename = "_target_")]
    pub target: TaskTarget,
    pub env: EnvConfig,
    pub observation: ObservationConfig,
    pub terrain: TerrainConfig,
    pub commands: CommandsConfig,
    pub init_state: InitStateConfig,
    pub control: ControlConfig,
    pub asset: AssetConfig,
    pub domain_rand: DomainRandConfig,
    pub rewards: RewardsConfig,
    pub noise: NoiseConfig,
}

impl Schema for TaskConfig {
    const NAME: &'static str = "TaskConfig";
}
