//! # Override/Default Resolution
//!
//! Resolution starts from a schema's declared defaults, applies patches in
//! order, evaluates interpolation expressions and finally rebuilds the typed
//! record. The typed rebuild is what catches width and variant errors the
//! patch layer cannot see (a float for an integer field, an unknown sensor
//! name), so nothing escapes as a half-checked record.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::interpolate::{self, Variables};
use crate::patch::{self, Patch};

/// A configuration record with declared defaults.
///
/// `Default` is the field-default factory: it is called once per
/// resolution, so mappings and sequences are never shared between records.
pub trait Schema: Default + Serialize + DeserializeOwned {
    /// Name used in error messages and logs.
    const NAME: &'static str;
}

/// Resolve `T` from its defaults and a single patch.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the patch names an unknown field or
/// supplies an incompatible value.
pub fn resolve<T: Schema>(patch: &Patch) -> Result<T, ConfigError> {
    resolve_layers(&T::default(), [patch], &Variables::default())
}

/// Return a copy of `base` with the fields named by `patch` replaced.
///
/// # Errors
///
/// Same conditions as [`resolve`].
pub fn specialize<T: Schema>(base: &T, patch: &Patch) -> Result<T, ConfigError> {
    resolve_layers(base, [patch], &Variables::default())
}

/// Apply `layers` to `base` in order, then interpolate with `variables`.
///
/// # Errors
///
/// Returns the first [`ConfigError`] raised by any layer, by interpolation,
/// or by the final typed rebuild.
pub fn resolve_layers<'a, T, I>(base: &T, layers: I, variables: &Variables) -> Result<T, ConfigError>
where
    T: Schema,
    I: IntoIterator<Item = &'a Patch>,
{
    let mut fields = to_fields(base)?;
    for layer in layers {
        layer.apply(&mut fields, "")?;
    }
    interpolate::interpolate_fields(&mut fields, variables)?;
    from_fields(fields)
}

pub(crate) fn to_fields<T: Schema>(record: &T) -> Result<Map<String, Value>, ConfigError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(other) => Err(ConfigError::Serialize {
            schema: T::NAME,
            message: format!("expected a record, found {}", patch::kind(&other)),
        }),
        Err(e) => Err(ConfigError::Serialize {
            schema: T::NAME,
            message: e.to_string(),
        }),
    }
}

pub(crate) fn from_fields<T: Schema>(fields: Map<String, Value>) -> Result<T, ConfigError> {
    serde_json::from_value(Value::Object(fields)).map_err(|e| ConfigError::Deserialize {
        schema: T::NAME,
        message: e.to_string(),
    })
}
