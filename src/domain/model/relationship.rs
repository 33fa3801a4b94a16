//! Relationship descriptor and its vocabulary

use serde::{Deserialize, Serialize};

use super::resolved_type::ResolvedType;

/// Relationship cardinality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipKind {
    OneToMany,
    ManyToOne,
    OneToOne,
    ManyToMany,
}

impl RelationshipKind {
    /// OneToMany and ManyToMany map to a collection; the other kinds are scalar.
    pub fn is_to_many(&self) -> bool {
        matches!(self, RelationshipKind::OneToMany | RelationshipKind::ManyToMany)
    }

    /// Kind of the synthesized inverse side, if this kind produces one.
    ///
    /// ManyToOne is already the owning side, and ManyToMany would need a
    /// join table, so neither is inverted.
    pub fn inverse(&self) -> Option<RelationshipKind> {
        match self {
            RelationshipKind::OneToMany => Some(RelationshipKind::ManyToOne),
            RelationshipKind::OneToOne => Some(RelationshipKind::OneToOne),
            RelationshipKind::ManyToOne | RelationshipKind::ManyToMany => None,
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RelationshipKind::OneToMany => "OneToMany",
            RelationshipKind::ManyToOne => "ManyToOne",
            RelationshipKind::OneToOne => "OneToOne",
            RelationshipKind::ManyToMany => "ManyToMany",
        };
        write!(f, "{}", name)
    }
}

/// Cascade operation propagated along a relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CascadeType {
    #[serde(alias = "all", alias = "All")]
    All,
    #[serde(alias = "persist", alias = "Persist")]
    Persist,
    #[serde(alias = "merge", alias = "Merge")]
    Merge,
    #[serde(alias = "remove", alias = "Remove")]
    Remove,
    #[serde(alias = "refresh", alias = "Refresh")]
    Refresh,
    #[serde(alias = "detach", alias = "Detach")]
    Detach,
}

/// Fetch strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum FetchMode {
    #[default]
    #[serde(alias = "lazy", alias = "Lazy")]
    Lazy,
    #[serde(alias = "eager", alias = "Eager")]
    Eager,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipDescriptor {
    pub kind: RelationshipKind,
    pub target: String,
    pub field_name: String,
    /// `List<Target>` for to-many kinds, `Target` otherwise.
    pub resolved_type: ResolvedType,
    pub is_collection: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapped_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_column_name: Option<String>,
    pub cascade_ops: Vec<CascadeType>,
    pub fetch_mode: FetchMode,
    /// Synthesized from a `mappedBy` on another entity, never declared.
    pub is_inverse: bool,
}

impl RelationshipDescriptor {
    pub fn new(kind: RelationshipKind, target: impl Into<String>, field_name: impl Into<String>) -> Self {
        let target = target.into();
        let resolved_type = if kind.is_to_many() {
            ResolvedType::list_of(ResolvedType::user(target.clone()))
        } else {
            ResolvedType::user(target.clone())
        };
        Self {
            kind,
            target,
            field_name: field_name.into(),
            is_collection: resolved_type.is_collection(),
            resolved_type,
            mapped_by: None,
            join_column_name: None,
            cascade_ops: Vec::new(),
            fetch_mode: FetchMode::default(),
            is_inverse: false,
        }
    }
}
