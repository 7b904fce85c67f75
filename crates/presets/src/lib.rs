#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Stride Presets
//!
//! Named override records for the [`schema`] crate. Each module owns the
//! presets of one schema and exposes its [`schema::Registry`] plus typed
//! shortcuts for the common presets:
//!
//! -   [`terrain`]: `flat`, `trimesh`, `locomotion_curriculum` (extends
//!     `trimesh`) and `locomotion_randomized` (extends
//!     `locomotion_curriculum`).
//! -   [`rewards`]: `legged_gym`.
//! -   [`task`]: `locomotion` ([`locomotion`]) and `amp` ([`amp`]).
//! -   [`train`]: `ppo`; AMP training has its own record in [`amp`].
//!
//! [`Catalog`] bundles all registries for lookup by kind and name.

pub mod amp;
pub mod catalog;
pub mod locomotion;
pub mod rewards;
pub mod task;
pub mod terrain;
pub mod train;

pub use amp::{AmpAlgorithmConfig, AmpRunnerConfig, AmpTrainConfig};
pub use catalog::{Catalog, Kind};
