//! Relationship Resolver
//!
//! Parses declared relationships and derives the inverse side of those
//! declared with `mappedBy`.

use crate::domain::model::{RelationshipDescriptor, RelationshipKind};
use crate::error::{CompileError, CompileResult};
use crate::naming::{camel_case, pascal_case, pluralize, snake_case};
use crate::schema::RawRelationship;

/// Where a relationship is declared, for error messages.
#[derive(Debug, Clone, Copy)]
pub struct RelationshipOwner<'a> {
    pub aggregate: &'a str,
    pub entity: &'a str,
}

/// Resolve the `index`-th relationship declared on `owner`.
pub fn resolve_relationship(
    raw: &RawRelationship,
    owner: RelationshipOwner<'_>,
    index: usize,
) -> CompileResult<RelationshipDescriptor> {
    let target = raw
        .target
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| CompileError::MissingRelationshipTarget {
            aggregate: owner.aggregate.to_string(),
            entity: owner.entity.to_string(),
            index,
        })?;
    let target = pascal_case(target);

    let field_name = relationship_field_name(raw.kind, &target);
    let mut rel = RelationshipDescriptor::new(raw.kind, target, field_name);
    rel.join_column_name = join_column_name(raw, &rel);
    rel.mapped_by = raw.mapped_by.clone();
    rel.cascade_ops = raw.cascade.clone();
    rel.fetch_mode = raw.fetch;
    Ok(rel)
}

/// Singular camelCase for to-one kinds, plural camelCase for to-many kinds.
pub fn relationship_field_name(kind: RelationshipKind, target: &str) -> String {
    if kind.is_to_many() {
        camel_case(&pluralize(target))
    } else {
        camel_case(target)
    }
}

/// Explicit `joinColumn`, else `<mappedBy>_id`, else `<field>_id` for to-one
/// kinds.
fn join_column_name(raw: &RawRelationship, rel: &RelationshipDescriptor) -> Option<String> {
    if let Some(column) = raw.join_column.as_deref().filter(|c| !c.trim().is_empty()) {
        return Some(column.trim().to_string());
    }
    if let Some(mapped_by) = raw.mapped_by.as_deref() {
        return Some(format!("{}_id", snake_case(mapped_by)));
    }
    if rel.kind.is_to_many() {
        None
    } else {
        Some(format!("{}_id", snake_case(&rel.field_name)))
    }
}

/// Inverse side of a declared relationship, to be attached to its target.
///
/// `owner` is the PascalCase name of the declaring entity. Returns `None`
/// when the relationship has no `mappedBy` or its kind is not inverted.
pub fn synthesize_inverse(declared: &RelationshipDescriptor, owner: &str) -> Option<RelationshipDescriptor> {
    let mapped_by = declared.mapped_by.as_deref()?;
    let kind = declared.kind.inverse()?;

    let mut inverse = RelationshipDescriptor::new(kind, owner, mapped_by);
    inverse.join_column_name = declared
        .join_column_name
        .clone()
        .or_else(|| Some(format!("{}_id", snake_case(mapped_by))));
    inverse.is_inverse = true;
    Some(inverse)
}
