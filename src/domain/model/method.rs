//! Aggregate-root methods
//!
//! Synthesized mutators on the aggregate root. Bodies are structured
//! statements; the renderer turns them into source text.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    /// Relationship field a flattened nested parameter belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            group: None,
        }
    }

    pub fn grouped(name: impl Into<String>, type_name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            ..Self::new(name, type_name)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MethodKind {
    /// Builds the child from its scalar fields and appends it.
    AddFactory,
    /// Appends a pre-built child.
    AddInstance,
    Remove,
    /// Read-only view of a child collection.
    CollectionGetter,
    /// Builds a one-to-one child from its scalar fields and assigns it.
    AssignFactory,
    Assign,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(
    tag = "op",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum Statement {
    /// `var variable = new Entity(arguments...)`
    Construct {
        variable: String,
        entity: String,
        arguments: Vec<String>,
    },
    /// `receiver.method(argument)`
    ///
    /// Nested factory bodies call `assign<Field>` on a secondary entity for
    /// each of its forward OneToOne relationships. The IR carries no method
    /// descriptor for it, so renderers must generate that setter on the
    /// secondary entity themselves.
    AssignCall {
        receiver: String,
        method: String,
        argument: String,
    },
    /// `this.collection.add(element)`
    CollectionAppend { collection: String, element: String },
    /// Remove the first element of `collection` whose id equals `id`.
    CollectionRemoveById { collection: String, id: String },
    /// Return an unmodifiable view of `collection`.
    ReturnUnmodifiable { collection: String },
    /// `this.field = value`
    FieldAssign { field: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateMethod {
    pub name: String,
    pub kind: MethodKind,
    /// Root field the method operates on.
    pub relationship: String,
    /// Entity type of the child.
    pub target: String,
    pub parameters: Vec<Parameter>,
    pub return_type: String,
    pub body: Vec<Statement>,
}

impl AggregateMethod {
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.name.as_str()).collect()
    }
}
