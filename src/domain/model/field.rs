//! Field descriptor

use serde::Serialize;

use super::enumeration::TransitionMap;
use super::resolved_type::{ResolvedType, ScalarType};

/// State-machine metadata carried by fields typed to an enum with transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionMeta {
    pub transition_map: TransitionMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    pub values: Vec<String>,
}

/// A fully resolved field of an entity or value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    pub declared_type: String,
    pub resolved_type: ResolvedType,
    /// Persistence-side type: value objects are swapped for their embeddable
    /// companion.
    pub jpa_type: ResolvedType,
    pub is_collection: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_element_type: Option<ResolvedType>,
    pub is_value_object: bool,
    pub is_enum: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    pub is_id: bool,
    pub is_audit: bool,
    pub read_only: bool,
    pub hidden: bool,
    pub validation_annotations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_meta: Option<TransitionMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_init_value: Option<String>,
}

impl FieldDescriptor {
    /// Plain field of the given type with every flag cleared.
    pub fn plain(name: impl Into<String>, resolved_type: ResolvedType) -> Self {
        let collection_element_type = resolved_type.element().cloned();
        Self {
            name: name.into(),
            declared_type: resolved_type.to_string(),
            jpa_type: resolved_type.clone(),
            is_collection: resolved_type.is_collection(),
            collection_element_type,
            resolved_type,
            is_value_object: false,
            is_enum: false,
            enum_values: None,
            is_id: false,
            is_audit: false,
            read_only: false,
            hidden: false,
            validation_annotations: Vec::new(),
            transition_meta: None,
            auto_init_value: None,
        }
    }

    /// Synthetic audit field appended by the entity resolver.
    pub fn audit(name: &str, scalar: ScalarType) -> Self {
        Self {
            is_audit: true,
            ..Self::plain(name, ResolvedType::Known(scalar))
        }
    }

    /// Whether the field takes part in constructor / add-method parameters.
    pub fn is_input(&self) -> bool {
        !self.is_id && !self.is_audit && !self.read_only
    }

    pub fn has_validation(&self) -> bool {
        !self.validation_annotations.is_empty()
    }
}
