use serde::{Deserialize, Serialize};

use crate::resolve::Schema;

/// Layout of the vectorized environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvConfig {
    pub num_envs: u32,
    /// Distance between robots when no terrain tiles are used [m].
    pub env_spacing: f64,
    /// Report time-outs separately so bootstrapping can ignore them.
    pub send_timeouts: bool,
    pub episode_length_s: f64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            num_envs: 4096,
            env_spacing: 3.0,
            send_timeouts: true,
            episode_length_s: 20.0,
        }
    }
}

impl Schema for EnvConfig {
    const NAME: &'static str = "EnvConfig";
}
