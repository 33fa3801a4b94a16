//! Aggregate Resolver
//!
//! Resolves one aggregate in dependency order: enums, then value objects
//! (entities need their names), then entities, then the root's synthesized
//! methods.

use crate::config::CompilerConfig;
use crate::domain::model::{
    AggregateDescriptor, CompileWarning, EntityDescriptor, EnumDescriptor, Parameter,
    ValueObjectDescriptor, ValueObjectMethod,
};
use crate::error::{CompileError, CompileResult};
use crate::naming::pascal_case;
use crate::schema::{RawAggregate, RawValueObject};

use super::entity_resolver::{resolve_entity, EntityContext};
use super::enum_resolver::resolve_enum;
use super::import_resolver::{resolve_imports, ImportContext};
use super::inverse_index::InverseIndex;
use super::method_synthesizer::synthesize_methods;
use super::property_resolver::{inline_enum, resolve_field, PropertyContext};

/// Document-wide inputs shared by every aggregate.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    pub package_name: &'a str,
    pub module_name: &'a str,
    pub inverses: &'a InverseIndex,
    pub config: &'a CompilerConfig,
}

pub fn resolve_aggregate(
    raw: &RawAggregate,
    ctx: &ResolveContext<'_>,
    warnings: &mut Vec<CompileWarning>,
) -> CompileResult<AggregateDescriptor> {
    let name = pascal_case(&raw.name);

    let root_count = raw.entities.iter().filter(|e| e.is_root).count();
    if root_count != 1 {
        return Err(CompileError::RootEntityCount {
            aggregate: name,
            count: root_count,
        });
    }

    let mut enums = raw
        .enums
        .iter()
        .map(|e| resolve_enum(e, &name))
        .collect::<CompileResult<Vec<_>>>()?;

    // Inline enums of value-object fields have no entity to live on.
    for inline in raw
        .value_objects
        .iter()
        .flat_map(|vo| vo.fields.iter())
        .filter_map(inline_enum)
    {
        if !enums.iter().any(|e| e.name == inline.name) {
            enums.push(inline);
        }
    }

    let value_object_names: Vec<String> =
        raw.value_objects.iter().map(|vo| pascal_case(&vo.name)).collect();
    let entity_names: Vec<String> = raw.entities.iter().map(|e| pascal_case(&e.name)).collect();

    let value_objects = raw
        .value_objects
        .iter()
        .map(|vo| {
            resolve_value_object(
                vo,
                &ValueObjectScope {
                    aggregate: &name,
                    value_objects: &value_object_names,
                    entities: &entity_names,
                    enums: &enums,
                    resolve: ctx,
                },
            )
        })
        .collect::<CompileResult<Vec<_>>>()?;

    let entity_ctx = EntityContext {
        aggregate: &name,
        package_name: ctx.package_name,
        module_name: ctx.module_name,
        value_objects: &value_object_names,
        enums: &enums,
        inverses: ctx.inverses,
        config: ctx.config,
    };
    let mut root_entity: Option<EntityDescriptor> = None;
    let mut secondary_entities = Vec::new();
    for raw_entity in &raw.entities {
        let entity = resolve_entity(raw_entity, &entity_ctx, warnings)?;
        if entity.is_root {
            root_entity = Some(entity);
        } else {
            secondary_entities.push(entity);
        }
    }
    let root_entity = root_entity.ok_or_else(|| CompileError::RootEntityCount {
        aggregate: name.clone(),
        count: 0,
    })?;

    let aggregate_methods = synthesize_methods(&name, &root_entity, &secondary_entities, warnings);

    tracing::debug!(
        aggregate = %name,
        entities = secondary_entities.len() + 1,
        value_objects = value_objects.len(),
        methods = aggregate_methods.len(),
        "resolved aggregate"
    );

    Ok(AggregateDescriptor {
        name,
        root_entity,
        secondary_entities,
        value_objects,
        enums,
        aggregate_methods,
    })
}

struct ValueObjectScope<'a> {
    aggregate: &'a str,
    value_objects: &'a [String],
    entities: &'a [String],
    enums: &'a [EnumDescriptor],
    resolve: &'a ResolveContext<'a>,
}

fn resolve_value_object(
    raw: &RawValueObject,
    scope: &ValueObjectScope<'_>,
) -> CompileResult<ValueObjectDescriptor> {
    let name = pascal_case(&raw.name);
    let config = scope.resolve.config;
    let properties = PropertyContext {
        value_objects: scope.value_objects,
        enums: scope.enums,
        embeddable_suffix: &config.naming.embeddable_suffix,
    };

    let mut fields = Vec::with_capacity(raw.fields.len());
    for raw_field in &raw.fields {
        let field = resolve_field(raw_field, &properties);
        let base = field.resolved_type.base_name();
        if let Some(entity) = scope.entities.iter().find(|e| *e == base) {
            return Err(CompileError::ValueObjectReferencesEntity {
                aggregate: scope.aggregate.to_string(),
                value_object: name,
                field: field.name,
                entity: entity.clone(),
            });
        }
        fields.push(field);
    }

    let methods = raw
        .methods
        .iter()
        .map(|m| ValueObjectMethod {
            name: m.name.clone(),
            return_type: m.return_type.clone(),
            parameters: m
                .parameters
                .iter()
                .map(|p| Parameter::new(p.name.clone(), p.param_type.clone()))
                .collect(),
            body: m.body.clone(),
        })
        .collect();

    let enum_names: Vec<String> = scope.enums.iter().map(|e| e.name.clone()).collect();
    let import_ctx = ImportContext {
        package_name: scope.resolve.package_name,
        module_name: scope.resolve.module_name,
        enum_package: &config.naming.enum_package,
        enum_names: &enum_names,
        imports: &config.imports,
    };
    let required_imports = resolve_imports(&fields, &[], &[], &import_ctx);

    Ok(ValueObjectDescriptor {
        name,
        fields,
        methods,
        required_imports,
    })
}
