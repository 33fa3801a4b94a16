//! Property Resolver
//!
//! Turns one raw field declaration into a `FieldDescriptor`:
//!
//! 1. type mapping
//! 2. value-object detection (by name, or the explicit `isValueObject` /
//!    `isEmbedded` flags), swapping the persistence type for the embeddable
//!    companion
//! 3. enum detection against the aggregate's enums
//! 4. state-machine metadata for enums with transitions
//! 5. read-only forcing for enums with an initial value
//! 6. validation annotation rendering
//!
//! Resolution is total: nothing here fails.

use serde_yaml_ng::Value;

use crate::domain::model::{EnumDescriptor, FieldDescriptor, TransitionMeta};
use crate::naming::camel_case;
use crate::schema::{RawField, RawValidation, RawValidationRule};

use super::type_mapper::resolve_type;

/// What the property resolver knows about the enclosing aggregate.
#[derive(Debug, Clone, Copy)]
pub struct PropertyContext<'a> {
    pub value_objects: &'a [String],
    pub enums: &'a [EnumDescriptor],
    pub embeddable_suffix: &'a str,
}

pub fn resolve_field(raw: &RawField, ctx: &PropertyContext<'_>) -> FieldDescriptor {
    let resolved_type = resolve_type(&raw.field_type, raw.enum_values.as_deref());
    let base_name = resolved_type.base_name().to_string();

    let is_value_object = raw.is_value_object
        || raw.is_embedded
        || ctx.value_objects.iter().any(|vo| *vo == base_name);
    let jpa_type = if is_value_object {
        resolved_type.map_base_name(|name| format!("{}{}", name, ctx.embeddable_suffix))
    } else {
        resolved_type.clone()
    };

    let matched_enum = ctx.enums.iter().find(|e| e.name == base_name);
    let is_enum = raw.enum_values.is_some() || matched_enum.is_some();

    let transition_meta = matched_enum
        .filter(|e| e.has_transitions())
        .map(|e| TransitionMeta {
            transition_map: e.transition_map(),
            initial_value: e.initial_value.clone(),
            values: e.values.clone(),
        });
    let auto_init_value = matched_enum.and_then(|e| e.initial_value.clone());

    let name = camel_case(&raw.name);
    FieldDescriptor {
        is_id: name == "id",
        name,
        declared_type: raw.field_type.clone(),
        is_collection: resolved_type.is_collection(),
        collection_element_type: resolved_type.element().cloned(),
        resolved_type,
        jpa_type,
        is_value_object,
        is_enum,
        enum_values: raw.enum_values.clone(),
        is_audit: false,
        read_only: raw.read_only || auto_init_value.is_some(),
        hidden: raw.hidden,
        validation_annotations: build_validation_annotations(&raw.validations),
        transition_meta,
        auto_init_value,
    }
}

/// Entity-scoped enum defined by a field's inline `enumValues`.
pub fn inline_enum(raw: &RawField) -> Option<EnumDescriptor> {
    let values = raw.enum_values.as_ref()?;
    let resolved = resolve_type(&raw.field_type, Some(values));
    Some(EnumDescriptor::new(resolved.base_name(), values.clone()))
}

/// Render validation rules as annotation strings, in declaration order.
pub fn build_validation_annotations(rules: &[RawValidation]) -> Vec<String> {
    rules
        .iter()
        .map(|rule| match rule {
            RawValidation::Kind(kind) => render_annotation(&RawValidationRule {
                kind: kind.clone(),
                ..RawValidationRule::default()
            }),
            RawValidation::Rule(rule) => render_annotation(rule),
        })
        .collect()
}

/// `@Kind` or `@Kind(key = value, ...)` with keys in fixed order, message last.
fn render_annotation(rule: &RawValidationRule) -> String {
    let kind = rule.kind.trim().trim_start_matches('@');

    let attributes: Vec<String> = [
        ("value", &rule.value),
        ("min", &rule.min),
        ("max", &rule.max),
        ("regexp", &rule.regexp),
        ("integer", &rule.integer),
        ("fraction", &rule.fraction),
        ("inclusive", &rule.inclusive),
        ("message", &rule.message),
    ]
    .into_iter()
    .filter_map(|(key, value)| {
        value
            .as_ref()
            .filter(|v| !v.is_null())
            .map(|v| format!("{} = {}", key, render_value(v)))
    })
    .collect();

    if attributes.is_empty() {
        format!("@{}", kind)
    } else {
        format!("@{}({})", kind, attributes.join(", "))
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", escape(s)),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Sequence(items) => format!(
            "{{{}}}",
            items.iter().map(render_value).collect::<Vec<_>>().join(", ")
        ),
        Value::Tagged(tagged) => render_value(&tagged.value),
        Value::Null => "null".to_string(),
        Value::Mapping(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
