//! Domain Layer
//!
//! The core of dddc: model resolution without I/O.
//!
//! ## Structure
//!
//! - `model/` - The resolved intermediate representation (aggregates, entities, fields, ...)
//! - `services/` - Resolvers turning raw declarations into the model
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Two stages** - Inverse relationships are collected for the whole
//!    document before any entity is assembled

pub mod model;
pub mod services;
