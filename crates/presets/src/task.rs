//! Task presets.

use schema::{ConfigError, Preset, Registry, TaskConfig};

use crate::amp::{amp_task_overrides, AMP};
use crate::locomotion::{locomotion_overrides, LOCOMOTION};

/// # Errors
///
/// Fails only if two presets share a name.
pub fn registry() -> Result<Registry<TaskConfig>, ConfigError> {
    Registry::new()
        .with(Preset::root(LOCOMOTION, locomotion_overrides))?
        .with(Preset::root(AMP, amp_task_overrides))
}
