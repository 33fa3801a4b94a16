//! Resolved type value object
//!
//! A declared type name after mapping: a known scalar, a user-defined name
//! (entity, value object or enum, possibly not yet resolved), or a list of
//! either.

use std::fmt;

use serde::{Serialize, Serializer};

/// Scalar types the type mapper knows by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    String,
    Integer,
    Long,
    Double,
    BigDecimal,
    Boolean,
    LocalDate,
    LocalDateTime,
    LocalTime,
    Uuid,
}

impl ScalarType {
    pub const ALL: [ScalarType; 10] = [
        ScalarType::String,
        ScalarType::Integer,
        ScalarType::Long,
        ScalarType::Double,
        ScalarType::BigDecimal,
        ScalarType::Boolean,
        ScalarType::LocalDate,
        ScalarType::LocalDateTime,
        ScalarType::LocalTime,
        ScalarType::Uuid,
    ];

    /// Look up a scalar by its exact declared name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScalarType::String => "String",
            ScalarType::Integer => "Integer",
            ScalarType::Long => "Long",
            ScalarType::Double => "Double",
            ScalarType::BigDecimal => "BigDecimal",
            ScalarType::Boolean => "Boolean",
            ScalarType::LocalDate => "LocalDate",
            ScalarType::LocalDateTime => "LocalDateTime",
            ScalarType::LocalTime => "LocalTime",
            ScalarType::Uuid => "UUID",
        }
    }

    /// Fully-qualified import the generated source needs, if any.
    pub fn import(&self) -> Option<&'static str> {
        match self {
            ScalarType::BigDecimal => Some("java.math.BigDecimal"),
            ScalarType::LocalDate => Some("java.time.LocalDate"),
            ScalarType::LocalDateTime => Some("java.time.LocalDateTime"),
            ScalarType::LocalTime => Some("java.time.LocalTime"),
            ScalarType::Uuid => Some("java.util.UUID"),
            _ => None,
        }
    }
}

/// Result of mapping a declared type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedType {
    Known(ScalarType),
    UserDefined(String),
    Collection(Box<ResolvedType>),
}

impl ResolvedType {
    pub fn user(name: impl Into<String>) -> Self {
        ResolvedType::UserDefined(name.into())
    }

    pub fn list_of(element: ResolvedType) -> Self {
        ResolvedType::Collection(Box::new(element))
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, ResolvedType::Collection(_))
    }

    /// Element type for collections, `None` otherwise.
    pub fn element(&self) -> Option<&ResolvedType> {
        match self {
            ResolvedType::Collection(element) => Some(element),
            _ => None,
        }
    }

    /// Innermost non-collection type.
    pub fn base(&self) -> &ResolvedType {
        match self {
            ResolvedType::Collection(element) => element.base(),
            other => other,
        }
    }

    /// Name of the innermost type (`List<Money>` → `Money`).
    pub fn base_name(&self) -> &str {
        match self {
            ResolvedType::Known(scalar) => scalar.name(),
            ResolvedType::UserDefined(name) => name,
            ResolvedType::Collection(element) => element.base_name(),
        }
    }

    /// User-defined name of the innermost type, if it is one.
    pub fn user_defined_name(&self) -> Option<&str> {
        match self.base() {
            ResolvedType::UserDefined(name) => Some(name),
            _ => None,
        }
    }

    /// Replace the innermost user-defined name, keeping the collection shape.
    pub fn map_base_name(&self, f: impl Fn(&str) -> String) -> ResolvedType {
        match self {
            ResolvedType::Collection(element) => ResolvedType::list_of(element.map_base_name(f)),
            ResolvedType::UserDefined(name) => ResolvedType::UserDefined(f(name)),
            known => known.clone(),
        }
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedType::Known(scalar) => write!(f, "{}", scalar.name()),
            ResolvedType::UserDefined(name) => write!(f, "{}", name),
            ResolvedType::Collection(element) => write!(f, "List<{}>", element),
        }
    }
}

impl Serialize for ResolvedType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
