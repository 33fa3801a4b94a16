//! Model compilation use case
//!
//! Sequences the whole pipeline for one document:
//!
//! 1. Load and decode the YAML document
//! 2. Reject missing `aggregates` and duplicate aggregate names
//! 3. Build the inverse-relationship index over every entity
//! 4. Resolve each aggregate against the read-only index
//! 5. Link type names and relationship targets across aggregates
//! 6. Collect the document-wide enum registry
//!
//! ## Usage
//!
//! ```ignore
//! use dddc::application::ModelCompiler;
//!
//! let model = ModelCompiler::new("com.acme", "sales").compile_file(path)?;
//! ```

use std::path::Path;

use crate::config::CompilerConfig;
use crate::domain::model::{AggregateDescriptor, CompileWarning, EnumDescriptor};
use crate::domain::services::{link, resolve_aggregate, InverseIndex, ResolveContext};
use crate::error::{CompileError, CompileResult};
use crate::naming::pascal_case;
use crate::parser::{load_document, parse_document, require_aggregates};
use crate::schema::{RawAggregate, RawDocument};

use super::context::ModelContext;

/// Fully resolved output of one compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledModel {
    pub package_name: String,
    pub module_name: String,
    pub aggregates: Vec<AggregateDescriptor>,
    /// Every enum of the document, first declaration per name.
    pub enums: Vec<EnumDescriptor>,
    pub warnings: Vec<CompileWarning>,
}

impl CompiledModel {
    pub fn aggregate(&self, name: &str) -> Option<&AggregateDescriptor> {
        self.aggregates.iter().find(|a| a.name == name)
    }

    /// Borrowed projection handed to the renderer.
    pub fn context(&self) -> ModelContext<'_> {
        ModelContext::new(self)
    }
}

/// Compiler for model documents.
///
/// `package_name` and `module_name` only qualify enum imports.
#[derive(Debug, Clone)]
pub struct ModelCompiler {
    package_name: String,
    module_name: String,
    config: CompilerConfig,
}

impl ModelCompiler {
    /// Create a compiler with default conventions.
    pub fn new(package_name: impl Into<String>, module_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            module_name: module_name.into(),
            config: CompilerConfig::default(),
        }
    }

    /// Set naming and import conventions.
    pub fn with_config(mut self, config: CompilerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Read, parse and compile a model document.
    pub fn compile_file(&self, path: &Path) -> CompileResult<CompiledModel> {
        let document = load_document(path)?;
        tracing::debug!(file = %path.display(), "loaded model document");
        self.compile_document(document, path)
    }

    /// Compile document content. `file` is used for error messages only.
    pub fn compile_str(&self, content: &str, file: &Path) -> CompileResult<CompiledModel> {
        let document = parse_document(content, file)?;
        self.compile_document(document, file)
    }

    fn compile_document(&self, document: RawDocument, file: &Path) -> CompileResult<CompiledModel> {
        let raw_aggregates = require_aggregates(document, file)?;
        check_unique_names(&raw_aggregates)?;

        let inverses = InverseIndex::build(&raw_aggregates)?;
        let ctx = ResolveContext {
            package_name: &self.package_name,
            module_name: &self.module_name,
            inverses: &inverses,
            config: &self.config,
        };

        let mut warnings = inverses.warnings().to_vec();
        let aggregates = raw_aggregates
            .iter()
            .map(|raw| resolve_aggregate(raw, &ctx, &mut warnings))
            .collect::<CompileResult<Vec<_>>>()?;

        warnings.extend(link(&aggregates));
        let enums = enum_registry(&aggregates);

        tracing::debug!(
            aggregates = aggregates.len(),
            enums = enums.len(),
            warnings = warnings.len(),
            "compiled model document"
        );

        Ok(CompiledModel {
            package_name: self.package_name.clone(),
            module_name: self.module_name.clone(),
            aggregates,
            enums,
            warnings,
        })
    }
}

/// Compile `path` with default conventions.
pub fn compile_file(path: &Path, package_name: &str, module_name: &str) -> CompileResult<CompiledModel> {
    ModelCompiler::new(package_name, module_name).compile_file(path)
}

fn check_unique_names(aggregates: &[RawAggregate]) -> CompileResult<()> {
    let mut seen: Vec<String> = Vec::with_capacity(aggregates.len());
    for aggregate in aggregates {
        let name = pascal_case(&aggregate.name);
        if seen.contains(&name) {
            return Err(CompileError::DuplicateAggregate { name });
        }
        seen.push(name);
    }
    Ok(())
}

/// Aggregate enums before entity-scoped ones, first declaration per name.
fn enum_registry(aggregates: &[AggregateDescriptor]) -> Vec<EnumDescriptor> {
    let mut registry: Vec<EnumDescriptor> = Vec::new();
    let ordered = aggregates
        .iter()
        .flat_map(|a| a.enums.iter())
        .chain(
            aggregates
                .iter()
                .flat_map(|a| a.all_entities())
                .flat_map(|e| e.enums.iter()),
        );
    for descriptor in ordered {
        if !registry.iter().any(|e| e.name == descriptor.name) {
            registry.push(descriptor.clone());
        }
    }
    registry
}
