//! Entity descriptor

use serde::Serialize;

use super::enumeration::EnumDescriptor;
use super::field::FieldDescriptor;
use super::relationship::RelationshipDescriptor;
use super::resolved_type::ResolvedType;

/// Audit settings of an entity. `track_user` implies `enabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditConfig {
    pub enabled: bool,
    pub track_user: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDescriptor {
    pub name: String,
    pub field_name_form: String,
    pub table_name: String,
    pub is_root: bool,
    pub audit_config: AuditConfig,
    pub id_type: ResolvedType,
    /// Declared fields followed by synthetic audit fields.
    pub fields: Vec<FieldDescriptor>,
    /// Declared relationships followed by synthesized inverses.
    pub relationships: Vec<RelationshipDescriptor>,
    /// Enums defined inline by this entity's fields.
    pub enums: Vec<EnumDescriptor>,
    pub required_imports: Vec<String>,
}

impl EntityDescriptor {
    /// Fields accepted as constructor parameters: no id, audit or read-only
    /// fields.
    pub fn input_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.is_input())
    }

    /// Non-collection input fields, the parameters of factory methods.
    pub fn scalar_input_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.input_fields().filter(|f| !f.is_collection)
    }

    /// Fields exposed in responses: no hidden or audit fields.
    pub fn response_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| !f.hidden && !f.is_audit)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn relationship(&self, field_name: &str) -> Option<&RelationshipDescriptor> {
        self.relationships.iter().find(|r| r.field_name == field_name)
    }

    pub fn has_audit_fields(&self) -> bool {
        self.fields.iter().any(|f| f.is_audit)
    }
}
