#![deny(clippy::all, clippy::pedantic)]
//! # Stride: Legged Locomotion Configuration
//!
//! Documentation entry point for the Stride workspace.
//!
//! ## Overview
//!
//! Stride defines the configuration records a legged-robot locomotion
//! training pipeline is launched from: terrain generation, reward shaping,
//! commanded velocities, domain randomization, observation layout and the
//! PPO / AMP training hyperparameters. It owns no simulation or learning
//! code; the resolved records are handed to an external trainer, which
//! instantiates the classes named by their `_target_` fields.
//!
//! ## The Crates
//!
//! -   **[`schema`]:** The base records with their declared defaults, and the
//!     composition machinery: field patches, layered resolution, named preset
//!     chains and `${...}` interpolation. Every composition error is a
//!     [`schema::ConfigError`] raised while the record is built.
//! -   **[`presets`]:** The named override records, such as the
//!     `locomotion_randomized` terrain (extending `locomotion_curriculum`,
//!     itself extending `trimesh`), the `locomotion` and `amp` tasks, and AMP
//!     training with its extra algorithm and runner fields.
//! -   **`stride`:** This crate. Its binary resolves a preset chosen on the
//!     command line, layers a patch file and `--set` overrides on top, and
//!     prints the result as JSON.
//!
//! ## Getting Started
//!
//! ```text
//! stride list
//! stride show terrain locomotion_randomized
//! stride show task locomotion --set terrain.num_rows=4 --set env.num_envs=512
//! stride show amp-train amp --var iterations=2000
//! stride show task amp --patch overrides.json --watch
//! ```

pub use presets;
pub use schema;
