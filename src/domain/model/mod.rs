//! Domain Model
//!
//! The intermediate representation handed to the renderer:
//! - `AggregateDescriptor` - root + secondary entities, value objects, enums, root methods
//! - `EntityDescriptor` / `FieldDescriptor` / `RelationshipDescriptor`
//! - `ValueObjectDescriptor`, `EnumDescriptor`
//! - `ResolvedType` - mapped type names
//! - `CompileWarning` - non-fatal diagnostics

mod aggregate;
mod entity;
mod enumeration;
mod field;
mod method;
mod relationship;
mod resolved_type;
mod value_object;
mod warning;

pub use aggregate::AggregateDescriptor;
pub use entity::{AuditConfig, EntityDescriptor};
pub use enumeration::{EnumDescriptor, Transition, TransitionMap};
pub use field::{FieldDescriptor, TransitionMeta};
pub use method::{AggregateMethod, MethodKind, Parameter, Statement};
pub use relationship::{CascadeType, FetchMode, RelationshipDescriptor, RelationshipKind};
pub use resolved_type::{ResolvedType, ScalarType};
pub use value_object::{ValueObjectDescriptor, ValueObjectMethod};
pub use warning::CompileWarning;
