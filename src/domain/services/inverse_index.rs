//! Inverse Relationship Index
//!
//! First stage of the two-stage entity pipeline: every relationship declared
//! anywhere in the document is resolved once, and the inverse sides of those
//! carrying `mappedBy` are grouped by the entity they attach to. Entity
//! resolution (second stage) only reads this index, so declaration order in
//! the document never changes the result.
//!
//! A target is looked up in the declaring aggregate first, then in the other
//! aggregates in document order.

use std::collections::{HashMap, HashSet};

use crate::domain::model::{CompileWarning, RelationshipDescriptor};
use crate::error::CompileResult;
use crate::naming::pascal_case;
use crate::schema::RawAggregate;

use super::relationship_resolver::{resolve_relationship, synthesize_inverse, RelationshipOwner};

/// `(aggregate, entity)`, both PascalCase.
type EntityKey = (String, String);

#[derive(Debug, Clone, Default)]
pub struct InverseIndex {
    by_target: HashMap<EntityKey, Vec<RelationshipDescriptor>>,
    warnings: Vec<CompileWarning>,
}

struct AggregateScope {
    name: String,
    entities: HashSet<String>,
}

impl InverseIndex {
    /// Collect inverse relationships across every entity of every aggregate.
    pub fn build(aggregates: &[RawAggregate]) -> CompileResult<Self> {
        let scopes: Vec<AggregateScope> = aggregates
            .iter()
            .map(|a| AggregateScope {
                name: pascal_case(&a.name),
                entities: a.entities.iter().map(|e| pascal_case(&e.name)).collect(),
            })
            .collect();

        let mut index = Self::default();
        for (aggregate, scope) in aggregates.iter().zip(&scopes) {
            for entity in &aggregate.entities {
                let entity_name = pascal_case(&entity.name);
                let owner = RelationshipOwner {
                    aggregate: &scope.name,
                    entity: &entity_name,
                };
                for (index_in_entity, raw) in entity.relationships.iter().enumerate() {
                    let declared = resolve_relationship(raw, owner, index_in_entity)?;
                    if let Some(inverse) = synthesize_inverse(&declared, &entity_name) {
                        let home = home_aggregate(&scopes, &scope.name, &declared.target);
                        index.insert((home.to_string(), declared.target), inverse);
                    }
                }
            }
        }

        tracing::debug!(
            targets = index.by_target.len(),
            conflicts = index.warnings.len(),
            "collected inverse relationships"
        );
        Ok(index)
    }

    /// The first inverse for a field name is kept; later ones are reported.
    fn insert(&mut self, key: EntityKey, inverse: RelationshipDescriptor) {
        let slot = self.by_target.entry(key.clone()).or_default();
        let kept_owner = slot
            .iter()
            .find(|r| r.field_name == inverse.field_name)
            .map(|r| r.target.clone());

        match kept_owner {
            None => slot.push(inverse),
            Some(kept) => {
                let (aggregate, entity) = key;
                let warning = CompileWarning::ConflictingInverse {
                    aggregate,
                    entity,
                    field: inverse.field_name,
                    kept,
                    dropped: inverse.target,
                };
                tracing::warn!("{}", warning);
                self.warnings.push(warning);
            }
        }
    }

    /// Inverse relationships attaching to `entity` of `aggregate` (PascalCase).
    pub fn for_entity(&self, aggregate: &str, entity: &str) -> &[RelationshipDescriptor] {
        self.by_target
            .get(&(aggregate.to_string(), entity.to_string()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Declared relationships followed by the inverses of `entity` whose field
    /// name is not already declared.
    pub fn merge(
        &self,
        aggregate: &str,
        entity: &str,
        declared: Vec<RelationshipDescriptor>,
    ) -> Vec<RelationshipDescriptor> {
        let inverses: Vec<RelationshipDescriptor> = self
            .for_entity(aggregate, entity)
            .iter()
            .filter(|inverse| !declared.iter().any(|d| d.field_name == inverse.field_name))
            .cloned()
            .collect();

        let mut merged = declared;
        merged.extend(inverses);
        merged
    }

    /// Back-references dropped because another entity already claimed the
    /// same field name on the target.
    pub fn warnings(&self) -> &[CompileWarning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.by_target.is_empty()
    }
}

/// Aggregate holding `target`: the declaring one if it has such an entity,
/// else the first aggregate that does, else the declaring one.
fn home_aggregate<'s>(scopes: &'s [AggregateScope], declaring: &'s str, target: &str) -> &'s str {
    let declares_target = |scope: &&AggregateScope| scope.entities.contains(target);
    if scopes
        .iter()
        .filter(declares_target)
        .any(|scope| scope.name == declaring)
    {
        return declaring;
    }
    scopes
        .iter()
        .find(declares_target)
        .map_or(declaring, |scope| scope.name.as_str())
}
