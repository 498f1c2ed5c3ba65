//! Errors raised while loading a registry snapshot and generating a catalog.
//!
//! Every variant is fatal: the generator aborts before any output file is
//! touched.
use std::path::PathBuf;

/// Result type used throughout the code generator.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors raised by the catalog generator.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum CodegenError {
    /// A registry or output file could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A registry or configuration file is not valid YAML for the expected shape.
    #[error("failed to parse {source_name}: {source}")]
    Yaml {
        /// Where the document came from.
        source_name: String,
        /// The underlying error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The JSON table could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A metric definition omits a field every metric must carry.
    #[error("{context} is missing required field `{field}`")]
    MissingField {
        /// Which group or metric, and where it came from.
        context: String,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A field holds a token outside its allowed set.
    #[error("{context} has invalid {field} `{value}`")]
    InvalidValue {
        /// Which group or metric, and where it came from.
        context: String,
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An identifier cannot be turned into a constant name.
    #[error("invalid metric identifier `{identifier}`: {reason}")]
    InvalidIdentifier {
        /// The rejected identifier.
        identifier: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The same identifier is defined more than once.
    #[error("metric `{identifier}` is defined more than once")]
    DuplicateIdentifier {
        /// The repeated identifier.
        identifier: String,
    },

    /// Two identifiers render to the same constant name.
    #[error("constant `{constant}` is produced by both `{first}` and `{second}`")]
    NameCollision {
        /// The colliding constant name.
        constant: String,
        /// Identifier that claimed the name first.
        first: String,
        /// Identifier that collided with it.
        second: String,
    },

    /// A deprecated metric names no replacement, or names itself.
    #[error("metric `{identifier}` is deprecated in favor of `{replaced_by}`, which is not another metric")]
    DanglingDeprecation {
        /// The deprecated identifier.
        identifier: String,
        /// The rejected replacement.
        replaced_by: String,
    },

    /// The description of a deprecated metric does not mention its replacement.
    #[error("description of deprecated metric `{identifier}` does not mention its replacement `{replaced_by}`")]
    UndescribedDeprecation {
        /// The deprecated identifier.
        identifier: String,
        /// The replacement the description should mention.
        replaced_by: String,
    },

    /// A configured output cannot be written.
    #[error("cannot write output {}: {reason}", .path.display())]
    InvalidOutput {
        /// The configured destination.
        path: PathBuf,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The registry snapshot holds no metric definitions at all.
    #[error("no metric definitions found in {0}")]
    EmptyRegistry(String),

    /// An output target name is not known.
    #[error("unknown output target `{0}`")]
    UnknownTarget(String),
}

impl CodegenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CodegenError::Io {
            path: path.into(),
            source,
        }
    }
}
