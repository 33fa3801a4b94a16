//! Import Resolver
//!
//! Computes the sorted, de-duplicated imports an entity or value object needs.

use std::collections::BTreeSet;

use crate::config::ImportsConfig;
use crate::domain::model::{FieldDescriptor, RelationshipDescriptor, ResolvedType, ScalarType};

/// Everything import resolution needs besides the fields themselves.
#[derive(Debug, Clone, Copy)]
pub struct ImportContext<'a> {
    pub package_name: &'a str,
    pub module_name: &'a str,
    pub enum_package: &'a str,
    /// Aggregate-scoped and entity-scoped enum names
    pub enum_names: &'a [String],
    pub imports: &'a ImportsConfig,
}

impl ImportContext<'_> {
    /// `<package>.<module>.<enum package>.<Enum>`, skipping empty segments.
    pub fn enum_import(&self, enum_name: &str) -> String {
        [self.package_name, self.module_name, self.enum_package, enum_name]
            .iter()
            .map(|segment| segment.trim_matches('.'))
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(".")
    }
}

pub fn resolve_imports(
    fields: &[FieldDescriptor],
    relationships: &[RelationshipDescriptor],
    extra_types: &[&ResolvedType],
    ctx: &ImportContext<'_>,
) -> Vec<String> {
    let mut imports = BTreeSet::new();

    let type_strings = fields
        .iter()
        .map(|f| f.resolved_type.to_string())
        .chain(extra_types.iter().map(|t| t.to_string()));
    for type_string in type_strings {
        for token in type_tokens(&type_string) {
            if let Some(import) = ScalarType::from_name(token).and_then(|s| s.import()) {
                imports.insert(import.to_string());
            }
        }
    }

    for field in fields {
        let base = field.resolved_type.base_name();
        if ctx.enum_names.iter().any(|e| e == base) {
            imports.insert(ctx.enum_import(base));
        }
    }

    let has_collection = fields.iter().any(|f| f.is_collection)
        || relationships.iter().any(|r| r.is_collection);
    if has_collection {
        imports.extend(ctx.imports.collections.iter().cloned());
    }

    if fields.iter().any(FieldDescriptor::has_validation) {
        imports.insert(ctx.imports.validation.clone());
    }

    imports.into_iter().collect()
}

/// Identifier tokens of a type string: `List<LocalDateTime>` → `List`, `LocalDateTime`.
fn type_tokens(type_string: &str) -> impl Iterator<Item = &str> {
    type_string
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
}
