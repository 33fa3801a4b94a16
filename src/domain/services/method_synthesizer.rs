//! Aggregate-Root Method Synthesizer
//!
//! Derives the root's mutators from its relationships so the root stays the
//! only entry point that changes the aggregate:
//!
//! - OneToMany to a secondary entity: `add<Target>` factory, `add<Target>`
//!   instance overload, `remove<Target>` by id, and an unmodifiable getter.
//! - OneToOne with `mappedBy` to a secondary entity: `assign<Field>` factory
//!   delegating to a plain `assign<Field>` overload.
//!
//! Factory parameters are the target's scalar input fields. Nested forward
//! OneToOne children of the target are flattened into prefixed, grouped
//! parameters and built in the same call.

use crate::domain::model::{
    AggregateMethod, CompileWarning, EntityDescriptor, MethodKind, Parameter,
    RelationshipDescriptor, RelationshipKind, Statement,
};
use crate::naming::{camel_case, pascal_case};

const VOID: &str = "void";

pub fn synthesize_methods(
    aggregate: &str,
    root: &EntityDescriptor,
    secondaries: &[EntityDescriptor],
    warnings: &mut Vec<CompileWarning>,
) -> Vec<AggregateMethod> {
    let mut methods = Vec::new();

    for rel in root.relationships.iter().filter(|r| !r.is_inverse) {
        let wants_methods = match rel.kind {
            RelationshipKind::OneToMany => true,
            RelationshipKind::OneToOne => rel.mapped_by.is_some(),
            RelationshipKind::ManyToOne | RelationshipKind::ManyToMany => false,
        };
        if !wants_methods {
            continue;
        }

        let Some(target) = secondaries.iter().find(|e| e.name == rel.target) else {
            tracing::warn!(
                aggregate,
                relationship = %rel.field_name,
                target = %rel.target,
                "relationship target is not a secondary entity, no root methods"
            );
            warnings.push(CompileWarning::UnresolvedAggregateTarget {
                aggregate: aggregate.to_string(),
                relationship: rel.field_name.clone(),
                target: rel.target.clone(),
            });
            continue;
        };

        if rel.kind == RelationshipKind::OneToMany {
            methods.push(add_factory(rel, target, secondaries));
            methods.push(add_instance(rel, target));
            methods.push(remove(rel, target));
            methods.push(collection_getter(rel));
        } else {
            methods.push(assign_factory(rel, target));
            methods.push(assign(rel));
        }
    }

    methods
}

fn scalar_parameters(entity: &EntityDescriptor) -> Vec<Parameter> {
    entity
        .scalar_input_fields()
        .map(|f| Parameter::new(f.name.clone(), f.resolved_type.to_string()))
        .collect()
}

/// Forward OneToOne relationships of `entity` whose target is a secondary
/// entity, paired with that entity.
fn nested_children<'a>(
    entity: &'a EntityDescriptor,
    secondaries: &'a [EntityDescriptor],
) -> impl Iterator<Item = (&'a RelationshipDescriptor, &'a EntityDescriptor)> {
    entity
        .relationships
        .iter()
        .filter(|r| r.kind == RelationshipKind::OneToOne && !r.is_inverse)
        .filter_map(move |r| {
            secondaries
                .iter()
                .find(|e| e.name == r.target)
                .map(|child| (r, child))
        })
}

fn add_factory(
    rel: &RelationshipDescriptor,
    target: &EntityDescriptor,
    secondaries: &[EntityDescriptor],
) -> AggregateMethod {
    let variable = camel_case(&target.name);
    let own = scalar_parameters(target);

    let mut parameters = own.clone();
    let mut body = vec![Statement::Construct {
        variable: variable.clone(),
        entity: target.name.clone(),
        arguments: own.iter().map(|p| p.name.clone()).collect(),
    }];

    for (child_rel, child) in nested_children(target, secondaries) {
        let group = &child_rel.field_name;
        let grouped: Vec<Parameter> = child
            .scalar_input_fields()
            .map(|f| {
                Parameter::grouped(
                    format!("{}{}", group, pascal_case(&f.name)),
                    f.resolved_type.to_string(),
                    group.clone(),
                )
            })
            .collect();

        body.push(Statement::Construct {
            variable: group.clone(),
            entity: child.name.clone(),
            arguments: grouped.iter().map(|p| p.name.clone()).collect(),
        });
        body.push(Statement::AssignCall {
            receiver: variable.clone(),
            method: format!("assign{}", pascal_case(group)),
            argument: group.clone(),
        });
        parameters.extend(grouped);
    }

    body.push(Statement::CollectionAppend {
        collection: rel.field_name.clone(),
        element: variable,
    });

    AggregateMethod {
        name: format!("add{}", target.name),
        kind: MethodKind::AddFactory,
        relationship: rel.field_name.clone(),
        target: target.name.clone(),
        parameters,
        return_type: VOID.to_string(),
        body,
    }
}

fn add_instance(rel: &RelationshipDescriptor, target: &EntityDescriptor) -> AggregateMethod {
    let variable = camel_case(&target.name);
    AggregateMethod {
        name: format!("add{}", target.name),
        kind: MethodKind::AddInstance,
        relationship: rel.field_name.clone(),
        target: target.name.clone(),
        parameters: vec![Parameter::new(variable.clone(), target.name.clone())],
        return_type: VOID.to_string(),
        body: vec![Statement::CollectionAppend {
            collection: rel.field_name.clone(),
            element: variable,
        }],
    }
}

fn remove(rel: &RelationshipDescriptor, target: &EntityDescriptor) -> AggregateMethod {
    AggregateMethod {
        name: format!("remove{}", target.name),
        kind: MethodKind::Remove,
        relationship: rel.field_name.clone(),
        target: target.name.clone(),
        parameters: vec![Parameter::new("id", target.id_type.to_string())],
        return_type: VOID.to_string(),
        body: vec![Statement::CollectionRemoveById {
            collection: rel.field_name.clone(),
            id: "id".to_string(),
        }],
    }
}

fn collection_getter(rel: &RelationshipDescriptor) -> AggregateMethod {
    AggregateMethod {
        name: format!("get{}", pascal_case(&rel.field_name)),
        kind: MethodKind::CollectionGetter,
        relationship: rel.field_name.clone(),
        target: rel.target.clone(),
        parameters: Vec::new(),
        return_type: rel.resolved_type.to_string(),
        body: vec![Statement::ReturnUnmodifiable {
            collection: rel.field_name.clone(),
        }],
    }
}

fn assign_factory(rel: &RelationshipDescriptor, target: &EntityDescriptor) -> AggregateMethod {
    let method = format!("assign{}", pascal_case(&rel.field_name));
    let parameters = scalar_parameters(target);
    let body = vec![
        Statement::Construct {
            variable: rel.field_name.clone(),
            entity: target.name.clone(),
            arguments: parameters.iter().map(|p| p.name.clone()).collect(),
        },
        Statement::AssignCall {
            receiver: "this".to_string(),
            method: method.clone(),
            argument: rel.field_name.clone(),
        },
    ];

    AggregateMethod {
        name: method,
        kind: MethodKind::AssignFactory,
        relationship: rel.field_name.clone(),
        target: target.name.clone(),
        parameters,
        return_type: VOID.to_string(),
        body,
    }
}

fn assign(rel: &RelationshipDescriptor) -> AggregateMethod {
    AggregateMethod {
        name: format!("assign{}", pascal_case(&rel.field_name)),
        kind: MethodKind::Assign,
        relationship: rel.field_name.clone(),
        target: rel.target.clone(),
        parameters: vec![Parameter::new(rel.field_name.clone(), rel.target.clone())],
        return_type: VOID.to_string(),
        body: vec![Statement::FieldAssign {
            field: rel.field_name.clone(),
            value: rel.field_name.clone(),
        }],
    }
}
