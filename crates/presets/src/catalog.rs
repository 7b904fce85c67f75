//! # Preset Catalog
//!
//! One place to look presets up by kind and name, which is what a launcher
//! needs when the selection arrives as text.

use std::fmt;
use std::str::FromStr;

use schema::{ConfigError, Patch, Registry, RewardsConfig, Schema, TaskConfig, TerrainConfig, TrainConfig, Variables};
use serde_json::Value;

use crate::amp::{self, AmpTrainConfig};
use crate::{rewards, task, terrain, train};

/// Which schema a preset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Terrain,
    Rewards,
    Task,
    Train,
    AmpTrain,
}

impl Kind {
    pub const ALL: [Kind; 5] = [Kind::Terrain, Kind::Rewards, Kind::Task, Kind::Train, Kind::AmpTrain];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Terrain => "terrain",
            Kind::Rewards => "rewards",
            Kind::Task => "task",
            Kind::Train => "train",
            Kind::AmpTrain => "amp-train",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Kind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ConfigError::InvalidPatch(format!("unknown preset kind `{s}`")))
    }
}

/// Every registered preset, grouped by schema.
#[derive(Debug)]
pub struct Catalog {
    pub terrain: Registry<TerrainConfig>,
    pub rewards: Registry<RewardsConfig>,
    pub task: Registry<TaskConfig>,
    pub train: Registry<TrainConfig>,
    pub amp_train: Registry<AmpTrainConfig>,
}

impl Catalog {
    /// Build every registry and check every chain.
    ///
    /// # Errors
    ///
    /// Returns the first duplicate, unknown-parent or cycle error found.
    pub fn new() -> Result<Self, ConfigError> {
        let catalog = Self {
            terrain: terrain::registry()?,
            rewards: rewards::registry()?,
            task: task::registry()?,
            train: train::registry()?,
            amp_train: amp::train_registry()?,
        };
        catalog.terrain.validate()?;
        catalog.rewards.validate()?;
        catalog.task.validate()?;
        catalog.train.validate()?;
        catalog.amp_train.validate()?;
        Ok(catalog)
    }

    #[must_use]
    pub fn names(&self, kind: Kind) -> Vec<&'static str> {
        match kind {
            Kind::Terrain => self.terrain.names().collect(),
            Kind::Rewards => self.rewards.names().collect(),
            Kind::Task => self.task.names().collect(),
            Kind::Train => self.train.names().collect(),
            Kind::AmpTrain => self.amp_train.names().collect(),
        }
    }

    /// Preset names from the root of `name`'s chain down to `name`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for unknown presets or cycles.
    pub fn chain(&self, kind: Kind, name: &str) -> Result<Vec<&'static str>, ConfigError> {
        match kind {
            Kind::Terrain => chain_names(&self.terrain, name),
            Kind::Rewards => chain_names(&self.rewards, name),
            Kind::Task => chain_names(&self.task, name),
            Kind::Train => chain_names(&self.train, name),
            Kind::AmpTrain => chain_names(&self.amp_train, name),
        }
    }

    /// Resolve a preset and return it as a JSON tree for the trainer.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the preset or an extra patch does not
    /// resolve.
    pub fn resolve_json(
        &self,
        kind: Kind,
        name: &str,
        extra: &[Patch],
        variables: &Variables,
    ) -> Result<Value, ConfigError> {
        match kind {
            Kind::Terrain => to_json(&self.terrain, name, extra, variables),
            Kind::Rewards => to_json(&self.rewards, name, extra, variables),
            Kind::Task => to_json(&self.task, name, extra, variables),
            Kind::Train => to_json(&self.train, name, extra, variables),
            Kind::AmpTrain => to_json(&self.amp_train, name, extra, variables),
        }
    }
}

fn chain_names<T: Schema>(registry: &Registry<T>, name: &str) -> Result<Vec<&'static str>, ConfigError> {
    Ok(registry.chain(name)?.iter().map(|preset| preset.name()).collect())
}

fn to_json<T: Schema>(
    registry: &Registry<T>,
    name: &str,
    extra: &[Patch],
    variables: &Variables,
) -> Result<Value, ConfigError> {
    let record = registry.resolve_with(name, extra, variables)?;
    tracing::info!("Resolved {} preset '{}'", T::NAME, name);
    serde_json::to_value(&record).map_err(|e| ConfigError::Serialize {
        schema: T::NAME,
        message: e.to_string(),
    })
}
