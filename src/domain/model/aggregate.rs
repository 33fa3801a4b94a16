//! Aggregate descriptor

use serde::Serialize;

use super::entity::EntityDescriptor;
use super::enumeration::EnumDescriptor;
use super::method::AggregateMethod;
use super::value_object::ValueObjectDescriptor;

/// A cluster of entities sharing one lifecycle, mutated only through its root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateDescriptor {
    pub name: String,
    pub root_entity: EntityDescriptor,
    pub secondary_entities: Vec<EntityDescriptor>,
    pub value_objects: Vec<ValueObjectDescriptor>,
    pub enums: Vec<EnumDescriptor>,
    pub aggregate_methods: Vec<AggregateMethod>,
}

impl AggregateDescriptor {
    /// Root first, then secondary entities in declared order.
    pub fn all_entities(&self) -> impl Iterator<Item = &EntityDescriptor> {
        std::iter::once(&self.root_entity).chain(self.secondary_entities.iter())
    }

    pub fn entity(&self, name: &str) -> Option<&EntityDescriptor> {
        self.all_entities().find(|e| e.name == name)
    }

    pub fn value_object(&self, name: &str) -> Option<&ValueObjectDescriptor> {
        self.value_objects.iter().find(|v| v.name == name)
    }

    pub fn method(&self, name: &str) -> Option<&AggregateMethod> {
        self.aggregate_methods.iter().find(|m| m.name == name)
    }

    /// Aggregate enums followed by entity-scoped enums.
    pub fn all_enums(&self) -> impl Iterator<Item = &EnumDescriptor> {
        self.enums
            .iter()
            .chain(self.all_entities().flat_map(|e| e.enums.iter()))
    }
}
