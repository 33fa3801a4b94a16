//! Value object descriptor

use serde::Serialize;

use super::field::FieldDescriptor;
use super::method::Parameter;

/// Hand-declared behavior method, carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueObjectMethod {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    pub body: String,
}

/// Immutable composite value without identity, audit fields or relationships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueObjectDescriptor {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
    pub methods: Vec<ValueObjectMethod>,
    pub required_imports: Vec<String>,
}
