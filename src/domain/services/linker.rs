//! Reference Linker
//!
//! Runs after every aggregate is resolved and checks user-defined type names
//! and relationship targets against the whole document. Unknown names stay
//! permissive: they become warnings, never errors.

use std::collections::HashSet;

use crate::domain::model::{AggregateDescriptor, CompileWarning, FieldDescriptor};

pub fn link(aggregates: &[AggregateDescriptor]) -> Vec<CompileWarning> {
    let entities: HashSet<&str> = aggregates
        .iter()
        .flat_map(|a| a.all_entities())
        .map(|e| e.name.as_str())
        .collect();

    let mut known = entities.clone();
    for aggregate in aggregates {
        known.extend(aggregate.value_objects.iter().map(|vo| vo.name.as_str()));
        known.extend(aggregate.all_enums().map(|e| e.name.as_str()));
    }

    let mut warnings = Vec::new();
    for aggregate in aggregates {
        let mut check_fields = |owner: &str, fields: &[FieldDescriptor]| {
            for field in fields.iter().filter(|f| !f.is_audit) {
                if let Some(name) = field.resolved_type.user_defined_name() {
                    if !known.contains(name) {
                        warnings.push(CompileWarning::UnresolvedType {
                            aggregate: aggregate.name.clone(),
                            owner: owner.to_string(),
                            field: field.name.clone(),
                            type_name: name.to_string(),
                        });
                    }
                }
            }
        };

        for entity in aggregate.all_entities() {
            check_fields(&entity.name, &entity.fields);
        }
        for value_object in &aggregate.value_objects {
            check_fields(&value_object.name, &value_object.fields);
        }

        for entity in aggregate.all_entities() {
            for rel in entity.relationships.iter().filter(|r| !r.is_inverse) {
                if !entities.contains(rel.target.as_str()) {
                    warnings.push(CompileWarning::UnresolvedRelationshipTarget {
                        aggregate: aggregate.name.clone(),
                        entity: entity.name.clone(),
                        target: rel.target.clone(),
                    });
                }
            }
        }
    }

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    warnings
}
