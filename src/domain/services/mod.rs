//! Domain Services
//!
//! The resolvers turning raw declarations into the model. Pure functions with
//! no I/O; the application layer sequences them:
//!
//! 1. `InverseIndex::build` over the whole document
//! 2. `resolve_aggregate` per aggregate (enums, value objects, entities, methods)
//! 3. `link` over the resolved aggregates

pub mod aggregate_resolver;
pub mod entity_resolver;
pub mod enum_resolver;
pub mod import_resolver;
pub mod inverse_index;
pub mod linker;
pub mod method_synthesizer;
pub mod property_resolver;
pub mod relationship_resolver;
pub mod type_mapper;

pub use aggregate_resolver::{resolve_aggregate, ResolveContext};
pub use entity_resolver::{audit_fields, resolve_entity, EntityContext};
pub use enum_resolver::resolve_enum;
pub use import_resolver::{resolve_imports, ImportContext};
pub use inverse_index::InverseIndex;
pub use linker::link;
pub use method_synthesizer::synthesize_methods;
pub use property_resolver::{build_validation_annotations, inline_enum, resolve_field, PropertyContext};
pub use relationship_resolver::{
    relationship_field_name, resolve_relationship, synthesize_inverse, RelationshipOwner,
};
pub use type_mapper::{collection_element, resolve_type};
