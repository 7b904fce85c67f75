//! # Field Overrides
//!
//! A [`Patch`] is an ordered list of field overrides applied on top of a
//! record's current values. Patches are applied to the JSON form of a record
//! so that one mechanism serves every schema; the typed record is only
//! rebuilt once all layers have been applied (see [`crate::resolve`]).
//!
//! Two kinds of override exist:
//!
//! -   [`Override::Value`] assigns a field outright. Assigning an object to a
//!     nested record replaces the whole record, which is how a preset swaps in
//!     an independently resolved sub-config.
//! -   [`Override::Merge`] descends into a nested record and applies another
//!     patch there, leaving its other fields untouched.
//!
//! Every field named by a patch must already exist in the target. Mapping
//! fields such as `terrain_kwargs` follow the same rule: a merge may only
//! touch existing keys, so adding keys means assigning the whole mapping
//! (`"=terrain_kwargs": {...}` in a JSON patch).

use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::interpolate;
use crate::resolve::{self, Schema};

/// Key prefix in JSON patches that assigns a value instead of merging it.
pub const ASSIGN_PREFIX: char = '=';

#[derive(Debug, Clone, PartialEq)]
pub enum Override {
    Value(Value),
    Merge(Patch),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch {
    entries: Vec<(String, Override)>,
}

impl Patch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` to `field`.
    #[must_use]
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((field.into(), Override::Value(value.into())));
        self
    }

    /// Apply `patch` inside the nested record stored at `field`.
    #[must_use]
    pub fn merge(mut self, field: impl Into<String>, patch: Patch) -> Self {
        self.entries.push((field.into(), Override::Merge(patch)));
        self
    }

    /// Replace the nested record at `field` with an already resolved record.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if the record cannot be turned into
    /// JSON.
    pub fn record<T: Schema>(self, field: impl Into<String>, record: &T) -> Result<Self, ConfigError> {
        let fields = resolve::to_fields(record)?;
        Ok(self.set(field, Value::Object(fields)))
    }

    /// Assign `value` at a dotted path such as `terrain.num_rows`.
    ///
    /// Intermediate segments become nested merges, so the rest of each
    /// enclosing record is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPatch`] for an empty path or an empty
    /// segment.
    pub fn set_path(&mut self, path: &str, value: Value) -> Result<(), ConfigError> {
        let segments: Vec<&str> = path.split('.').collect();
        if segments.iter().any(|segment| segment.trim().is_empty()) {
            return Err(ConfigError::InvalidPatch(format!("malformed field path `{path}`")));
        }

        let (leaf, parents) = match segments.split_last() {
            Some(split) => split,
            None => return Err(ConfigError::InvalidPatch("empty field path".to_string())),
        };

        let mut op = Override::Value(value);
        let mut field = leaf.trim().to_string();
        for parent in parents.iter().rev() {
            let nested = Patch {
                entries: vec![(field, op)],
            };
            op = Override::Merge(nested);
            field = parent.trim().to_string();
        }
        self.entries.push((field, op));
        Ok(())
    }

    /// Parse a `path=value` assignment, as given on the command line.
    ///
    /// The value is read as JSON when it parses as JSON and as a plain string
    /// otherwise, so `num_rows=5`, `curriculum=false`,
    /// `friction_range=[0.2,1.0]` and `terrain_type=stairs` all work.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPatch`] if there is no `=` or the path is
    /// malformed.
    pub fn assign(&mut self, assignment: &str) -> Result<(), ConfigError> {
        let (path, raw) = assignment.split_once('=').ok_or_else(|| {
            ConfigError::InvalidPatch(format!("expected `path=value`, got `{assignment}`"))
        })?;
        self.set_path(path.trim(), interpolate::parse_scalar(raw.trim()))
    }

    /// Build a patch from a JSON object. Nested objects become merges,
    /// except under a key written as `=field`, whose value is assigned to
    /// `field` as a whole. That is the way to replace or extend a mapping
    /// such as `terrain_kwargs` from a patch file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPatch`] if `value` is not an object.
    pub fn from_json(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(ConfigError::InvalidPatch(format!(
                "expected a JSON object, found {}",
                kind(&other)
            ))),
        }
    }

    /// Parse a JSON document into a patch.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPatch`] if the text is not a JSON object.
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| ConfigError::InvalidPatch(e.to_string()))?;
        Self::from_json(value)
    }

    fn from_map(map: Map<String, Value>) -> Self {
        let entries = map
            .into_iter()
            .map(|(field, value)| {
                if let Some(name) = field.strip_prefix(ASSIGN_PREFIX) {
                    return (name.to_string(), Override::Value(value));
                }
                match value {
                    Value::Object(nested) => (field, Override::Merge(Self::from_map(nested))),
                    leaf => (field, Override::Value(leaf)),
                }
            })
            .collect();
        Self { entries }
    }

    /// Append every override of `other` after this patch's own.
    pub fn extend(&mut self, other: Patch) {
        self.entries.extend(other.entries);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field names in the order they are applied.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(field, _)| field.as_str())
    }

    pub(crate) fn apply(&self, target: &mut Map<String, Value>, prefix: &str) -> Result<(), ConfigError> {
        for (field, op) in &self.entries {
            let path = join(prefix, field);
            let Some(slot) = target.get_mut(field) else {
                return Err(ConfigError::UnknownField { path });
            };
            match op {
                Override::Value(value) => {
                    check_kind(&path, slot, value)?;
                    *slot = value.clone();
                }
                Override::Merge(nested) => match slot {
                    Value::Object(fields) => nested.apply(fields, &path)?,
                    _ => return Err(ConfigError::NotARecord { path }),
                },
            }
        }
        Ok(())
    }
}

fn join(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

/// Reject assignments that change the JSON kind of a field.
///
/// Nulls and interpolation expressions are left for the typed
/// deserialization to judge.
fn check_kind(path: &str, current: &Value, incoming: &Value) -> Result<(), ConfigError> {
    if current.is_null() || incoming.is_null() {
        return Ok(());
    }
    if let Value::String(s) = incoming {
        if interpolate::is_expression(s) {
            return Ok(());
        }
    }
    let (expected, found) = (kind(current), kind(incoming));
    if expected == found {
        Ok(())
    } else {
        Err(ConfigError::TypeMismatch {
            path: path.to_string(),
            expected,
            found,
        })
    }
}

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
