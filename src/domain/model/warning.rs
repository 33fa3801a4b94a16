//! Compile warning value object.

use serde::Serialize;

/// Non-fatal diagnostic produced while compiling a model document.
///
/// Warnings never stop compilation; they are returned alongside the IR so the
/// caller can surface them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CompileWarning {
    /// Legacy `auditable` flag instead of the `audit` object
    LegacyAuditFlag { aggregate: String, entity: String },
    /// Type name that matches no scalar, entity, value object or enum
    UnresolvedType {
        aggregate: String,
        owner: String,
        field: String,
        type_name: String,
    },
    /// Relationship target that is not an entity anywhere in the document
    UnresolvedRelationshipTarget {
        aggregate: String,
        entity: String,
        target: String,
    },
    /// Root relationship whose target is not a secondary entity of the aggregate
    UnresolvedAggregateTarget {
        aggregate: String,
        relationship: String,
        target: String,
    },
    /// Second `mappedBy` claiming the same field name on one target entity
    ConflictingInverse {
        aggregate: String,
        entity: String,
        field: String,
        kept: String,
        dropped: String,
    },
}

impl std::fmt::Display for CompileWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileWarning::LegacyAuditFlag { aggregate, entity } => write!(
                f,
                "{}.{}: 'auditable' is deprecated, use 'audit: {{ enabled: true }}'",
                aggregate, entity
            ),
            CompileWarning::UnresolvedType {
                aggregate,
                owner,
                field,
                type_name,
            } => write!(
                f,
                "{}.{}.{}: type '{}' is not a known scalar, entity, value object or enum",
                aggregate, owner, field, type_name
            ),
            CompileWarning::UnresolvedRelationshipTarget {
                aggregate,
                entity,
                target,
            } => write!(
                f,
                "{}.{}: relationship target '{}' is not a declared entity",
                aggregate, entity, target
            ),
            CompileWarning::UnresolvedAggregateTarget {
                aggregate,
                relationship,
                target,
            } => write!(
                f,
                "{}: no root methods for '{}', '{}' is not a secondary entity of this aggregate",
                aggregate, relationship, target
            ),
            CompileWarning::ConflictingInverse {
                aggregate,
                entity,
                field,
                kept,
                dropped,
            } => write!(
                f,
                "{}.{}: back-reference '{}' from '{}' ignored, already mapped by '{}'",
                aggregate, entity, field, dropped, kept
            ),
        }
    }
}
