use thiserror::Error;

/// Everything that can go wrong while composing a configuration record.
///
/// Every variant is raised while the record is being built; a caller either
/// gets a complete record or one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown field `{path}`")]
    UnknownField { path: String },
    #[error("`{path}` is not a nested record and cannot be merged into")]
    NotARecord { path: String },
    #[error("type mismatch at `{path}`: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("invalid {schema}: {message}")]
    Deserialize { schema: &'static str, message: String },
    #[error("failed to serialize {schema}: {message}")]
    Serialize { schema: &'static str, message: String },
    #[error("unknown preset `{name}` for {schema}")]
    UnknownPreset { schema: &'static str, name: String },
    #[error("preset `{name}` is already registered for {schema}")]
    DuplicatePreset { schema: &'static str, name: String },
    #[error("preset chain forms a cycle: {}", chain.join(" -> "))]
    CyclicChain { chain: Vec<String> },
    #[error("cannot interpolate `{expression}`: {reason}")]
    Interpolation { expression: String, reason: String },
    #[error("invalid patch: {0}")]
    InvalidPatch(String),
}
