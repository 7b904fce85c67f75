#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Stride Configuration Schema
//!
//! Typed configuration records for legged-robot locomotion training, and the
//! machinery that composes them.
//!
//! ## Records
//!
//! Every record is a plain struct whose `Default` implementation declares the
//! field defaults. [`TaskConfig`] gathers the environment side (terrain,
//! rewards, commands, randomization, ...) and [`TrainConfig`] the learning
//! side. `_target_` fields are closed enums from the [`target`] module.
//!
//! ## Composition
//!
//! -   A [`Patch`] lists field overrides. Resolving a patch against a schema
//!     ([`resolve`]) starts from the schema defaults, applies the overrides and
//!     rebuilds the typed record. Unknown fields and incompatible values are
//!     rejected with a [`ConfigError`].
//! -   A [`Registry`] names presets. A preset may extend one parent preset;
//!     resolving it applies its whole ancestry, root first.
//! -   String values of the form `${...}` are evaluated against caller
//!     supplied [`Variables`] before the record is rebuilt.
//!
//! ```rust
//! use schema::{resolve, Patch, TerrainConfig};
//!
//! # fn main() -> Result<(), schema::ConfigError> {
//! let terrain: TerrainConfig = resolve(&Patch::new().set("num_rows", 4))?;
//! assert_eq!(terrain.num_rows, 4);
//! # Ok(())
//! # }
//! ```

pub mod asset;
pub mod commands;
pub mod control;
pub mod domain_rand;
pub mod env;
pub mod error;
pub mod init_state;
pub mod interpolate;
pub mod noise;
pub mod observation;
pub mod patch;
pub mod registry;
pub mod resolve;
pub mod rewards;
pub mod target;
pub mod task;
pub mod terrain;
pub mod train;

pub use asset::AssetConfig;
pub use commands::{CommandRangesConfig, CommandsConfig};
pub use control::{ControlConfig, ControlType};
pub use domain_rand::DomainRandConfig;
pub use env::EnvConfig;
pub use error::ConfigError;
pub use init_state::InitStateConfig;
pub use interpolate::Variables;
pub use noise::{NoiseConfig, NoiseScalesConfig};
pub use observation::{ObservationConfig, Sensor};
pub use patch::{Override, Patch};
pub use registry::{PatchFactory, Preset, Registry};
pub use resolve::{resolve, resolve_layers, specialize, Schema};
pub use rewards::{RewardScalesConfig, RewardsConfig};
pub use target::{AlgorithmTarget, RunnerTarget, TaskTarget};
pub use task::TaskConfig;
pub use terrain::{MeshType, TerrainConfig};
pub use train::{Activation, AlgorithmConfig, LearningRateSchedule, PolicyConfig, RunnerConfig, TrainConfig};
