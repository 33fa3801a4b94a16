//! Application Layer
//!
//! Use cases that sequence the domain services.
//! This layer:
//! - Depends on the domain layer (model, services)
//! - Owns document I/O and configuration
//! - Does NOT contain resolution rules (those are in the domain)
//!
//! ## Use Cases
//!
//! - `ModelCompiler` - Compile one model document into a `CompiledModel`
//! - `ModelContext` - Renderer-facing projection of a compiled model

pub mod compiler;
pub mod context;

pub use compiler::{compile_file, CompiledModel, ModelCompiler};
pub use context::{AggregateContext, ModelContext};
