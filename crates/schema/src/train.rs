use serde::{Deserialize, Serialize};

use crate::resolve::Schema;
use crate::target::{AlgorithmTarget, RunnerTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningRateSchedule {
    /// Keep the learning rate fixed.
    Fixed,
    /// Scale the learning rate to track `desired_kl`.
    Adaptive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Elu,
    Relu,
    Selu,
    Tanh,
    Sigmoid,
    Lrelu,
}

/// PPO hyperparameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmConfig {
    #[serde(rename = "_target_")]
    pub target: AlgorithmTarget,
    pub value_loss_coef: f64,
    pub use_clipped_value_loss: bool,
    pub clip_param: f64,
    pub entropy_coef: f64,
    pub num_learning_epochs: u32,
    /// Mini-batch size is `num_envs * num_steps_per_env / num_mini_batches`.
    pub num_mini_batches: u32,
    pub learning_rate: f64,
    pub schedule: LearningRateSchedule,
    pub gamma: f64,
    pub lam: f64,
    pub desired_kl: f64,
    pub max_grad_norm: f64,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            target: AlgorithmTarget::Ppo,
            value_loss_coef: 1.0,
            use_clipped_value_loss: true,
            clip_param: 0.2,
            entropy_coef: 0.01,
            num_learning_epochs: 5,
            num_mini_batches: 4,
            learning_rate: 1.0e-3,
            schedule: LearningRateSchedule::Adaptive,
            gamma: 0.99,
            lam: 0.95,
            desired_kl: 0.01,
            max_grad_norm: 1.0,
        }
    }
}

impl Schema for AlgorithmConfig {
    const NAME: &'static str = "AlgorithmConfig";
}

/// Training-loop bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Rollout length per environment and update.
    pub num_steps_per_env: u32,
    /// Number of policy updates.
    pub iterations: u32,
    /// Updates between checkpoints.
    pub save_interval: u32,
    pub experiment_name: String,
    pub run_name: String,
    pub resume: bool,
    /// Run to resume from; the latest one when unset.
    pub load_run: Option<String>,
    /// Checkpoint to resume from; the latest one when unset.
    pub checkpoint: Option<u32>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            num_steps_per_env: 24,
            iterations: 1500,
            save_interval: 50,
            experiment_name: "locomotion".to_string(),
            run_name: String::new(),
            resume: false,
            load_run: None,
            checkpoint: None,
        }
    }
}

impl Schema for RunnerConfig {
    const NAME: &'static str = "RunnerConfig";
}

/// Actor-critic network shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub actor_hidden_dims: Vec<u32>,
    pub critic_hidden_dims: Vec<u32>,
    pub activation: Activation,
    pub init_noise_std: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            actor_hidden_dims: vec![512, 256, 128],
            critic_hidden_dims: vec![512, 256, 128],
            activation: Activation::Elu,
            init_noise_std: 1.0,
        }
    }
}

impl Schema for PolicyConfig {
    const NAME: &'static str = "PolicyConfig";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    #[serde(rename = "_target_")]
    pub target: RunnerTarget,
    pub algorithm: AlgorithmConfig,
    pub runner: RunnerConfig,
    pub policy: PolicyConfig,
}

impl Schema for TrainConfig {
    const NAME: &'static str = "TrainConfig";
}
