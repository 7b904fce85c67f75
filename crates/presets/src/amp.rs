//! # Adversarial Motion Priors
//!
//! The AMP task imitates reference motions on the A1, and AMP training adds a
//! motion discriminator on top of PPO. The training side needs fields the
//! base schemas do not have, so [`AmpAlgorithmConfig`] and
//! [`AmpRunnerConfig`] embed the base records and add their own fields next
//! to them; serialized, the result is a single flat record.

use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, PI};

use schema::init_state::joint_angles;
use schema::{
    AlgorithmConfig, AlgorithmTarget, AssetConfig, CommandRangesConfig, CommandsConfig, ConfigError,
    ControlConfig, DomainRandConfig, InitStateConfig, NoiseConfig, NoiseScalesConfig, Patch, PolicyConfig,
    Preset, Registry, RewardScalesConfig, RewardsConfig, RunnerConfig, RunnerTarget, Schema, TaskTarget,
    Variables,
};
use serde::{Deserialize, Serialize};

pub const AMP: &str = "amp";

/// Policy step of the AMP task: 5 ms simulation step times a decimation of 6.
const POLICY_DT: f64 = 0.005 * 6.0;

/// Number of training iterations unless the `iterations` variable is set.
pub const ITERATIONS: &str = "${resolve_default_int: 50_000, ${iterations}}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmpAlgorithmConfig {
    #[serde(flatten)]
    pub base: AlgorithmConfig,
    /// Capacity of the policy-transition buffer the discriminator samples.
    pub amp_replay_buffer_size: u64,
}

impl Default for AmpAlgorithmConfig {
    fn default() -> Self {
        Self {
            base: AlgorithmConfig {
                target: AlgorithmTarget::AmpPpo,
                ..AlgorithmConfig::default()
            },
            amp_replay_buffer_size: 1_000_000,
        }
    }
}

impl Schema for AmpAlgorithmConfig {
    const NAME: &'static str = "AmpAlgorithmConfig";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmpRunnerConfig {
    #[serde(flatten)]
    pub base: RunnerConfig,
    pub amp_reward_coef: f64,
    /// Blend between style reward (0) and task reward (1).
    pub amp_task_reward_lerp: f64,
    pub amp_discr_hidden_dims: Vec<u32>,
    /// Expert transitions loaded before training starts.
    pub num_preload_transitions: u64,
    /// Lower bound on the action standard deviation, per joint.
    pub min_normalized_std: Vec<f64>,
}

impl Default for AmpRunnerConfig {
    fn default() -> Self {
        Self {
            base: RunnerConfig::default(),
            amp_reward_coef: 2.0,
            amp_task_reward_lerp: 0.3,
            amp_discr_hidden_dims: vec![1024, 512],
            num_preload_transitions: 2_000_000,
            // hip, thigh, calf for each of the four legs
            min_normalized_std: [0.01, 0.005, 0.01].repeat(4),
        }
    }
}

impl Schema for AmpRunnerConfig {
    const NAME: &'static str = "AmpRunnerConfig";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmpTrainConfig {
    #[serde(rename = "_target_")]
    pub target: RunnerTarget,
    pub algorithm: AmpAlgorithmConfig,
    pub runner: AmpRunnerConfig,
    pub policy: PolicyConfig,
}

impl Default for AmpTrainConfig {
    fn default() -> Self {
        Self {
            target: RunnerTarget::AmpOnPolicy,
            algorithm: AmpAlgorithmConfig::default(),
            runner: AmpRunnerConfig::default(),
            policy: PolicyConfig::default(),
        }
    }
}

impl Schema for AmpTrainConfig {
    const NAME: &'static str = "AmpTrainConfig";
}

/// # Errors
///
/// Fails only if two presets share a name.
pub fn train_registry() -> Result<Registry<AmpTrainConfig>, ConfigError> {
    Registry::new().with(Preset::root(AMP, amp_train_overrides))
}

/// # Errors
///
/// Returns a [`ConfigError`] if the preset does not resolve.
pub fn amp_task() -> Result<schema::TaskConfig, ConfigError> {
    crate::task::registry()?.resolve(AMP)
}

/// Resolve AMP training, reading the iteration count from `variables`.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the preset does not resolve or `iterations`
/// is not an integer.
pub fn amp_train(variables: &Variables) -> Result<AmpTrainConfig, ConfigError> {
    train_registry()?.resolve_with(AMP, &[], variables)
}

fn amp_train_overrides() -> Result<Patch, ConfigError> {
    Ok(Patch::new().merge("runner", Patch::new().set("iterations", ITERATIONS)))
}

pub(crate) fn amp_task_overrides() -> Result<Patch, ConfigError> {
    let init_state = InitStateConfig {
        pos: [0.0, 0.0, 0.42],
        default_joint_angles: joint_angles(&[
            ("1_FR_hip_joint", 0.15),
            ("1_FR_thigh_joint", 0.55),
            ("1_FR_calf_joint", -1.5),
            ("2_FL_hip_joint", -0.15),
            ("2_FL_thigh_joint", 0.55),
            ("2_FL_calf_joint", -1.5),
            ("3_RR_hip_joint", 0.15),
            ("3_RR_thigh_joint", 0.7),
            ("3_RR_calf_joint", -1.5),
            ("4_RL_hip_joint", -0.15),
            ("4_RL_thigh_joint", 0.7),
            ("4_RL_calf_joint", -1.5),
        ]),
        ..InitStateConfig::default()
    };

    let rewards = RewardsConfig {
        soft_dof_pos_limit: 0.9,
        scales: RewardScalesConfig {
            tracking_lin_vel: 1.5 / POLICY_DT,
            tracking_ang_vel: 0.5 / POLICY_DT,
            ..RewardScalesConfig::default()
        },
        ..RewardsConfig::default()
    };

    let asset = AssetConfig {
        terminate_after_contacts_on: [
            "base", "1_FR_calf", "2_FL_calf", "3_RR_calf", "4_RL_calf", "1_FR_thigh", "2_FL_thigh",
            "3_RR_thigh", "4_RL_thigh",
        ]
        .iter()
        .map(ToString::to_string)
        .collect(),
        self_collisions: true,
        ..AssetConfig::default()
    };

    let control = ControlConfig {
        stiffness: BTreeMap::from([("joint".to_string(), 80.0)]),
        damping: BTreeMap::from([("joint".to_string(), 1.0)]),
        decimation: 6,
        ..ControlConfig::default()
    };

    let domain_rand = DomainRandConfig {
        friction_range: (0.25, 1.75),
        randomize_base_mass: true,
        randomize_gains: true,
        added_stiffness_range: (-8.0, 8.0),
        added_damping_range: (-0.1, 0.1),
        ..DomainRandConfig::default()
    };

    let noise = NoiseConfig {
        noise_scales: NoiseScalesConfig {
            dof_pos: 0.03,
            ang_vel: 0.3,
            ..NoiseScalesConfig::default()
        },
        ..NoiseConfig::default()
    };

    let commands = CommandsConfig {
        heading_command: false,
        ranges: CommandRangesConfig {
            lin_vel_x: (-1.0, 2.0),
            lin_vel_y: (-0.3, 0.3),
            ang_vel_yaw: (-FRAC_PI_2, FRAC_PI_2),
            heading: (-PI, PI),
        },
        ..CommandsConfig::default()
    };

    Patch::new()
        .set("_target_", TaskTarget::A1Amp.class_path())
        .record("init_state", &init_state)?
        .record("rewards", &rewards)?
        .record("asset", &asset)?
        .record("control", &control)?
        .record("domain_rand", &domain_rand)?
        .record("noise", &noise)?
        .record("commands", &commands)
}
