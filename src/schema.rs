//! Raw model document
//!
//! Serde mirror of the YAML input. Nothing here is resolved: names keep the
//! author's casing and every optional key stays optional. The domain services
//! turn these into descriptors.

use serde::Deserialize;
use serde_yaml_ng::Value;

use crate::domain::model::{CascadeType, FetchMode, RelationshipKind};

/// Document root
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDocument {
    /// `None` when the key is absent or null; the compiler rejects that.
    #[serde(default)]
    pub aggregates: Option<Vec<RawAggregate>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAggregate {
    pub name: String,

    #[serde(default)]
    pub entities: Vec<RawEntity>,

    #[serde(default)]
    pub value_objects: Vec<RawValueObject>,

    #[serde(default)]
    pub enums: Vec<RawEnum>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntity {
    pub name: String,

    #[serde(default)]
    pub is_root: bool,

    #[serde(default)]
    pub table_name: Option<String>,

    /// `{ enabled, trackUser }`; kept untyped so non-boolean flags can be
    /// reported against the entity.
    #[serde(default)]
    pub audit: Option<Value>,

    /// Legacy boolean audit switch
    #[serde(default)]
    pub auditable: Option<Value>,

    #[serde(default, alias = "properties")]
    pub fields: Vec<RawField>,

    #[serde(default)]
    pub relationships: Vec<RawRelationship>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawField {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: String,

    /// Inline enum values; the field then defines its own enum type.
    #[serde(default)]
    pub enum_values: Option<Vec<String>>,

    #[serde(default)]
    pub is_value_object: bool,

    #[serde(default)]
    pub is_embedded: bool,

    #[serde(default)]
    pub read_only: bool,

    #[serde(default)]
    pub hidden: bool,

    #[serde(default)]
    pub validations: Vec<RawValidation>,
}

impl RawField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            enum_values: None,
            is_value_object: false,
            is_embedded: false,
            read_only: false,
            hidden: false,
            validations: Vec::new(),
        }
    }
}

/// Validation entry: either a bare kind (`- NotBlank`) or a full rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawValidation {
    Kind(String),
    Rule(RawValidationRule),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawValidationRule {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub min: Option<Value>,
    #[serde(default)]
    pub max: Option<Value>,
    #[serde(default)]
    pub regexp: Option<Value>,
    #[serde(default)]
    pub integer: Option<Value>,
    #[serde(default)]
    pub fraction: Option<Value>,
    #[serde(default)]
    pub inclusive: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRelationship {
    #[serde(rename = "type")]
    pub kind: RelationshipKind,

    #[serde(default, alias = "targetEntity")]
    pub target: Option<String>,

    #[serde(default)]
    pub mapped_by: Option<String>,

    #[serde(default)]
    pub join_column: Option<String>,

    #[serde(default)]
    pub cascade: Vec<CascadeType>,

    #[serde(default)]
    pub fetch: FetchMode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawValueObject {
    pub name: String,

    #[serde(default, alias = "properties")]
    pub fields: Vec<RawField>,

    #[serde(default)]
    pub methods: Vec<RawMethod>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMethod {
    pub name: String,

    #[serde(default = "default_return_type")]
    pub return_type: String,

    #[serde(default)]
    pub parameters: Vec<RawParameter>,

    #[serde(default)]
    pub body: String,
}

fn default_return_type() -> String {
    "void".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEnum {
    pub name: String,

    #[serde(default)]
    pub values: Vec<String>,

    #[serde(default)]
    pub transitions: Vec<RawTransition>,

    #[serde(default)]
    pub initial_value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTransition {
    pub from: StateRef,
    pub to: String,
}

/// Transition source: one state or several.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StateRef {
    One(String),
    Many(Vec<String>),
}

impl StateRef {
    pub fn states(&self) -> Vec<String> {
        match self {
            StateRef::One(state) => vec![state.clone()],
            StateRef::Many(states) => states.clone(),
        }
    }
}
