//! # Interpolation
//!
//! String values of the form `${...}` are evaluated after all patches have
//! been applied and before the typed record is rebuilt. Two forms exist:
//!
//! -   `${name}` is replaced by the variable `name`.
//! -   `${resolve_default_int: 50_000, ${name}}` is replaced by the integer
//!     value of `name` when it is set, and by the literal default otherwise.
//!
//! Only whole-string expressions are evaluated; `"run-${name}"` and
//! `"${exp}_${seed}"` stay as written.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::ConfigError;

const DEFAULT_INT_RESOLVER: &str = "resolve_default_int";

/// Named values available to interpolation expressions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    values: BTreeMap<String, String>,
}

impl Variables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Parse and insert a `name=value` assignment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPatch`] when there is no `=` or the name
    /// is empty.
    pub fn assign(&mut self, assignment: &str) -> Result<(), ConfigError> {
        match assignment.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                self.insert(name.trim(), value.trim());
                Ok(())
            }
            _ => Err(ConfigError::InvalidPatch(format!(
                "expected `name=value`, got `{assignment}`"
            ))),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Whether `value` is a single `${...}` expression spanning the whole string.
///
/// The `${` at the start must be closed by the final `}`, so
/// `"${a}_${b}"` is not an expression and stays as written.
#[must_use]
pub fn is_expression(value: &str) -> bool {
    if !value.starts_with("${") || !value.ends_with('}') {
        return false;
    }
    let mut depth = 0usize;
    for (i, c) in value.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return i == value.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}

/// Read a raw textual value as JSON if possible, else as a string.
#[must_use]
pub fn parse_scalar(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

pub(crate) fn interpolate_fields(fields: &mut Map<String, Value>, variables: &Variables) -> Result<(), ConfigError> {
    for value in fields.values_mut() {
        interpolate_value(value, variables)?;
    }
    Ok(())
}

fn interpolate_value(value: &mut Value, variables: &Variables) -> Result<(), ConfigError> {
    match value {
        Value::String(text) if is_expression(text) => {
            *value = evaluate(text, variables)?;
        }
        Value::Array(items) => {
            for item in items {
                interpolate_value(item, variables)?;
            }
        }
        Value::Object(fields) => interpolate_fields(fields, variables)?,
        _ => {}
    }
    Ok(())
}

fn evaluate(expression: &str, variables: &Variables) -> Result<Value, ConfigError> {
    let body = expression[2..expression.len() - 1].trim();
    match body.split_once(':') {
        Some((resolver, args)) => match resolver.trim() {
            DEFAULT_INT_RESOLVER => resolve_default_int(expression, args, variables),
            other => Err(failure(expression, format!("unknown resolver `{other}`"))),
        },
        None => {
            let name = reference_name(expression, body)?;
            variables
                .get(name)
                .map(parse_scalar)
                .ok_or_else(|| failure(expression, format!("variable `{name}` is not set")))
        }
    }
}

fn resolve_default_int(expression: &str, args: &str, variables: &Variables) -> Result<Value, ConfigError> {
    let (default, reference) = args
        .split_once(',')
        .ok_or_else(|| failure(expression, "expected `default, ${name}`".to_string()))?;

    let default = parse_int(default)
        .ok_or_else(|| failure(expression, format!("default `{}` is not an integer", default.trim())))?;

    let reference = reference.trim();
    if !is_expression(reference) {
        return Err(failure(
            expression,
            format!("`{reference}` is not a `${{name}}` reference"),
        ));
    }
    let name = reference_name(expression, &reference[2..reference.len() - 1])?;

    match variables.get(name) {
        Some(raw) if !is_unset(raw) => parse_int(raw)
            .map(Value::from)
            .ok_or_else(|| failure(expression, format!("variable `{name}` = `{raw}` is not an integer"))),
        _ => Ok(Value::from(default)),
    }
}

fn reference_name<'a>(expression: &str, body: &'a str) -> Result<&'a str, ConfigError> {
    let name = body.trim();
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
    if valid {
        Ok(name)
    } else {
        Err(failure(expression, format!("`{name}` is not a variable name")))
    }
}

fn is_unset(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || raw == "null"
}

fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().replace('_', "").parse().ok()
}

fn failure(expression: &str, reason: String) -> ConfigError {
    ConfigError::Interpolation {
        expression: expression.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ITERATIONS: &str = "${resolve_default_int: 50_000, ${iterations}}";

    #[test]
    fn default_int_falls_back_when_unset() {
        let vars = Variables::new();
        assert_eq!(evaluate(ITERATIONS, &vars).unwrap(), json!(50_000));

        let vars = Variables::new().with("iterations", "null");
        assert_eq!(evaluate(ITERATIONS, &vars).unwrap(), json!(50_000));
    }

    #[test]
    fn default_int_prefers_variable() {
        let vars = Variables::new().with("iterations", "1_200");
        assert_eq!(evaluate(ITERATIONS, &vars).unwrap(), json!(1200));
    }

    #[test]
    fn default_int_rejects_non_integer_variable() {
        let vars = Variables::new().with("iterations", "many");
        let err = evaluate(ITERATIONS, &vars).unwrap_err();
        assert!(matches!(err, ConfigError::Interpolation { .. }));
    }

    #[test]
    fn plain_reference_parses_json() {
        let vars = Variables::new().with("num_envs", "512").with("name", "walk");
        assert_eq!(evaluate("${num_envs}", &vars).unwrap(), json!(512));
        assert_eq!(evaluate("${name}", &vars).unwrap(), json!("walk"));
        assert!(evaluate("${missing}", &vars).is_err());
    }

    #[test]
    fn unknown_resolver_is_an_error() {
        let err = evaluate("${resolve_default_float: 1.0, ${x}}", &Variables::new()).unwrap_err();
        match err {
            ConfigError::Interpolation { reason, .. } => assert!(reason.contains("resolve_default_float")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn nested_values_are_interpolated() {
        let mut fields = json!({
            "runner": { "iterations": ITERATIONS, "run_name": "run-${iterations}" },
            "dims": ["${width}", 128]
        });
        let vars = Variables::new().with("width", "256");
        interpolate_fields(fields.as_object_mut().unwrap(), &vars).unwrap();
        assert_eq!(fields["runner"]["iterations"], json!(50_000));
        assert_eq!(fields["runner"]["run_name"], json!("run-${iterations}"));
        assert_eq!(fields["dims"], json!([256, 128]));
    }

    #[test]
    fn adjacent_references_are_not_one_expression() {
        assert!(is_expression(ITERATIONS));
        assert!(is_expression("${seed}"));
        assert!(!is_expression("${exp}_${seed}"));
        assert!(!is_expression("${a}}"));
        assert!(!is_expression("${a"));

        let mut fields = json!({ "run_name": "${exp}_${seed}", "seed": "${seed}" });
        let vars = Variables::new().with("exp", "walk").with("seed", "3");
        interpolate_fields(fields.as_object_mut().unwrap(), &vars).unwrap();
        assert_eq!(fields["run_name"], json!("${exp}_${seed}"));
        assert_eq!(fields["seed"], json!(3));
    }

    #[test]
    fn variable_assignment_parsing() {
        let mut vars = Variables::new();
        vars.assign("iterations = 10").unwrap();
        assert_eq!(vars.get("iterations"), Some("10"));
        assert!(vars.assign("=10").is_err());
        assert!(vars.assign("iterations").is_err());
    }
}
