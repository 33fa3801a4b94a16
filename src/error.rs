//! Error types for dddc
//!
//! Uses `thiserror` for library errors. Every variant is fatal: any structural
//! problem voids the output of the whole document.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for compiler operations
pub type CompileResult<T> = Result<T, CompileError>;

/// Main error type for compiler operations
#[derive(Error, Debug)]
pub enum CompileError {
    /// Model file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is not valid YAML or does not match the expected shape
    #[error("invalid model document {file}: {message}")]
    InvalidDocument { file: PathBuf, message: String },

    /// Document root has no `aggregates` array
    #[error("model document {file} has no 'aggregates' array at its root")]
    MissingAggregates { file: PathBuf },

    /// Two aggregates share one name
    #[error("aggregate '{name}' is declared more than once")]
    DuplicateAggregate { name: String },

    /// Aggregate does not have exactly one root entity
    #[error("aggregate '{aggregate}' must have exactly one root entity, found {count}")]
    RootEntityCount { aggregate: String, count: usize },

    /// Relationship without a target entity
    #[error(
        "relationship #{index} on entity '{entity}' in aggregate '{aggregate}' has no 'target' or 'targetEntity'"
    )]
    MissingRelationshipTarget {
        aggregate: String,
        entity: String,
        index: usize,
    },

    /// `audit.trackUser` set without `audit.enabled`
    #[error(
        "entity '{entity}' in aggregate '{aggregate}' sets audit.trackUser without audit.enabled"
    )]
    TrackUserWithoutAudit { aggregate: String, entity: String },

    /// Audit flag holding something other than a boolean
    #[error(
        "entity '{entity}' in aggregate '{aggregate}': '{key}' must be a boolean, found {found}"
    )]
    InvalidAuditFlag {
        aggregate: String,
        entity: String,
        key: String,
        found: String,
    },

    /// Transition edge naming a state the enum does not declare
    #[error("enum '{enum_name}' in aggregate '{aggregate}' has a transition over unknown state '{state}'")]
    UnknownTransitionState {
        aggregate: String,
        enum_name: String,
        state: String,
    },

    /// `initialValue` not among the enum values
    #[error("enum '{enum_name}' in aggregate '{aggregate}' has initialValue '{value}' which is not one of its values")]
    InvalidInitialValue {
        aggregate: String,
        enum_name: String,
        value: String,
    },

    /// Enum value listed twice
    #[error("enum '{enum_name}' in aggregate '{aggregate}' lists value '{value}' more than once")]
    DuplicateEnumValue {
        aggregate: String,
        enum_name: String,
        value: String,
    },

    /// Value object field typed as an entity
    #[error("value object '{value_object}' in aggregate '{aggregate}' references entity '{entity}' through field '{field}'")]
    ValueObjectReferencesEntity {
        aggregate: String,
        value_object: String,
        field: String,
        entity: String,
    },

    /// Compiler configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}
