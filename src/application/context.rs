//! Renderer context
//!
//! Borrowed views over a `CompiledModel` in the shape templates consume.

use serde::Serialize;

use crate::domain::model::{
    AggregateDescriptor, AggregateMethod, CompileWarning, EntityDescriptor, EnumDescriptor,
    ValueObjectDescriptor,
};

use super::compiler::CompiledModel;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelContext<'a> {
    pub package_name: &'a str,
    pub module_name: &'a str,
    pub aggregates: Vec<AggregateContext<'a>>,
    /// Document-wide enum registry
    pub enums: &'a [EnumDescriptor],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub warnings: &'a [CompileWarning],
}

impl<'a> ModelContext<'a> {
    pub fn new(model: &'a CompiledModel) -> Self {
        Self {
            package_name: &model.package_name,
            module_name: &model.module_name,
            aggregates: model
                .aggregates
                .iter()
                .map(|a| AggregateContext::new(a, &model.package_name, &model.module_name))
                .collect(),
            enums: &model.enums,
            warnings: &model.warnings,
        }
    }
}

/// Per-aggregate view: `allEntities` lists the root first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateContext<'a> {
    pub name: &'a str,
    pub package_name: &'a str,
    pub module_name: &'a str,
    pub root_entity: &'a EntityDescriptor,
    pub secondary_entities: &'a [EntityDescriptor],
    pub all_entities: Vec<&'a EntityDescriptor>,
    pub value_objects: &'a [ValueObjectDescriptor],
    pub enums: Vec<&'a EnumDescriptor>,
    pub aggregate_methods: &'a [AggregateMethod],
}

impl<'a> AggregateContext<'a> {
    pub fn new(aggregate: &'a AggregateDescriptor, package_name: &'a str, module_name: &'a str) -> Self {
        Self {
            name: &aggregate.name,
            package_name,
            module_name,
            root_entity: &aggregate.root_entity,
            secondary_entities: &aggregate.secondary_entities,
            all_entities: aggregate.all_entities().collect(),
            value_objects: &aggregate.value_objects,
            enums: aggregate.all_enums().collect(),
            aggregate_methods: &aggregate.aggregate_methods,
        }
    }
}
