//! Type Mapper
//!
//! Maps a declared type name to a `ResolvedType`. The mapper never fails:
//! unknown names are taken to be user-defined types (entities, value objects
//! or enums that may be declared later) and PascalCased. The reference linker
//! reports the ones that never resolve.

use crate::domain::model::{ResolvedType, ScalarType};
use crate::naming::pascal_case;

/// Resolve a declared type, optionally carrying inline enum values.
pub fn resolve_type(declared: &str, inline_enum_values: Option<&[String]>) -> ResolvedType {
    let declared = declared.trim();

    if inline_enum_values.is_some() {
        return ResolvedType::UserDefined(pascal_case(declared));
    }

    if let Some(element) = collection_element(declared) {
        return ResolvedType::list_of(resolve_element(element));
    }

    match ScalarType::from_name(declared) {
        Some(scalar) => ResolvedType::Known(scalar),
        None => ResolvedType::UserDefined(pascal_case(declared)),
    }
}

/// `List<X>` → `X`
pub fn collection_element(declared: &str) -> Option<&str> {
    declared
        .strip_prefix("List<")
        .and_then(|rest| rest.strip_suffix('>'))
        .map(str::trim)
}

/// Collection elements pass through unchanged unless they are known scalars
/// or nested lists.
fn resolve_element(element: &str) -> ResolvedType {
    if let Some(inner) = collection_element(element) {
        return ResolvedType::list_of(resolve_element(inner));
    }
    match ScalarType::from_name(element) {
        Some(scalar) => ResolvedType::Known(scalar),
        None => ResolvedType::UserDefined(element.to_string()),
    }
}
