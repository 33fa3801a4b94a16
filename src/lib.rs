//! dddc - domain-driven design model compiler
//!
//! dddc reads a declarative YAML description of aggregates (entities, value
//! objects, enums, relationships, audit and validation metadata) and resolves
//! it into an intermediate representation that code templates render from.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod naming;
pub mod parser;
pub mod schema;

// Re-exports for convenience
pub use application::{compile_file, AggregateContext, CompiledModel, ModelCompiler, ModelContext};
pub use config::CompilerConfig;
pub use domain::model::{
    AggregateDescriptor, AggregateMethod, CompileWarning, EntityDescriptor, EnumDescriptor,
    FieldDescriptor, RelationshipDescriptor, ResolvedType, ValueObjectDescriptor,
};
pub use error::{CompileError, CompileResult};
