//! # Chained Specialization
//!
//! A [`Registry`] holds the named presets of one schema. A preset either
//! starts from the schema defaults or extends exactly one parent preset, so
//! every chain is a simple line of ancestors. Resolving a preset applies the
//! chain from the root down; the most specific link that sets a field wins.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use crate::error::ConfigError;
use crate::interpolate::Variables;
use crate::patch::Patch;
use crate::resolve::{self, Schema};

/// Builds the overrides one preset contributes on top of its parent.
pub type PatchFactory = fn() -> Result<Patch, ConfigError>;

pub struct Preset<T> {
    name: &'static str,
    parent: Option<&'static str>,
    patch: PatchFactory,
    _schema: PhantomData<fn() -> T>,
}

impl<T: Schema> Preset<T> {
    /// A preset layered directly on the schema defaults.
    #[must_use]
    pub fn root(name: &'static str, patch: PatchFactory) -> Self {
        Self {
            name,
            parent: None,
            patch,
            _schema: PhantomData,
        }
    }

    /// A preset layered on top of `parent`.
    #[must_use]
    pub fn extends(name: &'static str, parent: &'static str, patch: PatchFactory) -> Self {
        Self {
            name,
            parent: Some(parent),
            patch,
            _schema: PhantomData,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn parent(&self) -> Option<&'static str> {
        self.parent
    }

    /// The overrides this link applies, built fresh on every call.
    ///
    /// # Errors
    ///
    /// Propagates any error raised while building nested records.
    pub fn patch(&self) -> Result<Patch, ConfigError> {
        (self.patch)()
    }
}

impl<T> fmt::Debug for Preset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preset")
            .field("name", &self.name)
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

pub struct Registry<T> {
    presets: BTreeMap<&'static str, Preset<T>>,
}

impl<T: Schema> Default for Registry<T> {
    fn default() -> Self {
        Self {
            presets: BTreeMap::new(),
        }
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.presets.iter()).finish()
    }
}

impl<T: Schema> Registry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicatePreset`] if the name is taken.
    pub fn register(&mut self, preset: Preset<T>) -> Result<(), ConfigError> {
        if self.presets.contains_key(preset.name) {
            return Err(ConfigError::DuplicatePreset {
                schema: T::NAME,
                name: preset.name.to_string(),
            });
        }
        self.presets.insert(preset.name, preset);
        Ok(())
    }

    /// Builder form of [`Registry::register`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicatePreset`] if the name is taken.
    pub fn with(mut self, preset: Preset<T>) -> Result<Self, ConfigError> {
        self.register(preset)?;
        Ok(self)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Preset<T>> {
        self.presets.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.presets.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// The ancestry of `name`, root first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPreset`] if `name` or one of its
    /// ancestors is not registered, and [`ConfigError::CyclicChain`] if the
    /// ancestry loops back on itself.
    pub fn chain(&self, name: &str) -> Result<Vec<&Preset<T>>, ConfigError> {
        let mut chain: Vec<&Preset<T>> = Vec::new();
        let mut current = name;
        loop {
            if chain.iter().any(|link| link.name == current) {
                let mut names: Vec<String> = chain.iter().map(|link| link.name.to_string()).collect();
                names.push(current.to_string());
                return Err(ConfigError::CyclicChain { chain: names });
            }
            let preset = self.get(current).ok_or_else(|| ConfigError::UnknownPreset {
                schema: T::NAME,
                name: current.to_string(),
            })?;
            chain.push(preset);
            match preset.parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
        chain.reverse();
        Ok(chain)
    }

    /// Check that every registered chain is complete and acyclic.
    ///
    /// # Errors
    ///
    /// Returns the first chain error found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in self.presets.keys() {
            self.chain(name)?;
        }
        Ok(())
    }

    /// Resolve `name` with no extra layers.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for chain, patch or type errors.
    pub fn resolve(&self, name: &str) -> Result<T, ConfigError> {
        self.resolve_with(name, &[], &Variables::default())
    }

    /// Resolve `name`, then apply `extra` patches and interpolate.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for chain, patch, interpolation or type
    /// errors.
    pub fn resolve_with(&self, name: &str, extra: &[Patch], variables: &Variables) -> Result<T, ConfigError> {
        let chain = self.chain(name)?;

        let mut layers = Vec::with_capacity(chain.len() + extra.len());
        for link in &chain {
            let patch = link.patch()?;
            tracing::debug!(
                "{} preset '{}' overrides {:?}",
                T::NAME,
                link.name,
                patch.fields().collect::<Vec<_>>()
            );
            layers.push(patch);
        }
        layers.extend(extra.iter().cloned());

        let record = resolve::resolve_layers(&T::default(), &layers, variables)?;
        tracing::debug!(
            "Resolved {} preset '{}' through {} link(s)",
            T::NAME,
            name,
            chain.len()
        );
        Ok(record)
    }
}
