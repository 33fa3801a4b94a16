//! Entity Resolver
//!
//! Assembles one `EntityDescriptor`: resolved fields, audit-field injection,
//! declared relationships merged with the inverses from the `InverseIndex`,
//! entity-scoped enums and imports.

use serde_yaml_ng::Value;

use crate::config::CompilerConfig;
use crate::domain::model::{
    AuditConfig, CompileWarning, EntityDescriptor, EnumDescriptor, FieldDescriptor, ScalarType,
};
use crate::error::{CompileError, CompileResult};
use crate::naming::{camel_case, pascal_case, pluralize, snake_case};
use crate::schema::RawEntity;

use super::import_resolver::{resolve_imports, ImportContext};
use super::inverse_index::InverseIndex;
use super::property_resolver::{inline_enum, resolve_field, PropertyContext};
use super::relationship_resolver::{resolve_relationship, RelationshipOwner};
use super::type_mapper::resolve_type;

/// Shared, read-only inputs of entity resolution within one aggregate.
#[derive(Debug, Clone, Copy)]
pub struct EntityContext<'a> {
    pub aggregate: &'a str,
    pub package_name: &'a str,
    pub module_name: &'a str,
    pub value_objects: &'a [String],
    pub enums: &'a [EnumDescriptor],
    pub inverses: &'a InverseIndex,
    pub config: &'a CompilerConfig,
}

pub fn resolve_entity(
    raw: &RawEntity,
    ctx: &EntityContext<'_>,
    warnings: &mut Vec<CompileWarning>,
) -> CompileResult<EntityDescriptor> {
    let name = pascal_case(&raw.name);
    let audit_config = resolve_audit(raw, ctx.aggregate, &name, warnings)?;

    let properties = PropertyContext {
        value_objects: ctx.value_objects,
        enums: ctx.enums,
        embeddable_suffix: &ctx.config.naming.embeddable_suffix,
    };
    let mut fields: Vec<FieldDescriptor> =
        raw.fields.iter().map(|f| resolve_field(f, &properties)).collect();
    fields.extend(audit_fields(audit_config));

    let entity_enums = entity_scoped_enums(raw);

    let owner = RelationshipOwner {
        aggregate: ctx.aggregate,
        entity: &name,
    };
    let declared = raw
        .relationships
        .iter()
        .enumerate()
        .map(|(index, r)| resolve_relationship(r, owner, index))
        .collect::<CompileResult<Vec<_>>>()?;
    let relationships = ctx.inverses.merge(ctx.aggregate, &name, declared);

    let id_type = fields
        .iter()
        .find(|f| f.is_id)
        .map(|f| f.resolved_type.clone())
        .unwrap_or_else(|| resolve_type(&ctx.config.entity.default_id_type, None));

    let enum_names: Vec<String> = ctx
        .enums
        .iter()
        .chain(entity_enums.iter())
        .map(|e| e.name.clone())
        .collect();
    let import_ctx = ImportContext {
        package_name: ctx.package_name,
        module_name: ctx.module_name,
        enum_package: &ctx.config.naming.enum_package,
        enum_names: &enum_names,
        imports: &ctx.config.imports,
    };
    let required_imports = resolve_imports(&fields, &relationships, &[&id_type], &import_ctx);

    let table_name = raw
        .table_name
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| snake_case(&pluralize(&name)));

    Ok(EntityDescriptor {
        field_name_form: camel_case(&name),
        table_name,
        is_root: raw.is_root,
        audit_config,
        id_type,
        fields,
        relationships,
        enums: entity_enums,
        required_imports,
        name,
    })
}

/// `createdAt`/`updatedAt`, plus `createdBy`/`updatedBy` when tracking users.
pub fn audit_fields(audit: AuditConfig) -> Vec<FieldDescriptor> {
    if !audit.enabled {
        return Vec::new();
    }
    let mut fields = vec![
        FieldDescriptor::audit("createdAt", ScalarType::LocalDateTime),
        FieldDescriptor::audit("updatedAt", ScalarType::LocalDateTime),
    ];
    if audit.track_user {
        fields.push(FieldDescriptor::audit("createdBy", ScalarType::String));
        fields.push(FieldDescriptor::audit("updatedBy", ScalarType::String));
    }
    fields
}

/// Enums declared inline through `enumValues`, first declaration per name.
fn entity_scoped_enums(raw: &RawEntity) -> Vec<EnumDescriptor> {
    let mut enums: Vec<EnumDescriptor> = Vec::new();
    for inline in raw.fields.iter().filter_map(inline_enum) {
        if !enums.iter().any(|e| e.name == inline.name) {
            enums.push(inline);
        }
    }
    enums
}

fn resolve_audit(
    raw: &RawEntity,
    aggregate: &str,
    entity: &str,
    warnings: &mut Vec<CompileWarning>,
) -> CompileResult<AuditConfig> {
    let flag = |key: &str, value: Option<&Value>| -> CompileResult<bool> {
        match value {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(CompileError::InvalidAuditFlag {
                aggregate: aggregate.to_string(),
                entity: entity.to_string(),
                key: key.to_string(),
                found: describe(other),
            }),
        }
    };

    let legacy = match &raw.auditable {
        None => None,
        Some(value) => {
            let enabled = flag("auditable", Some(value))?;
            tracing::warn!(aggregate, entity, "'auditable' is deprecated, use 'audit: {{ enabled: true }}'");
            warnings.push(CompileWarning::LegacyAuditFlag {
                aggregate: aggregate.to_string(),
                entity: entity.to_string(),
            });
            Some(enabled)
        }
    };

    let config = match &raw.audit {
        None | Some(Value::Null) => AuditConfig {
            enabled: legacy.unwrap_or(false),
            track_user: false,
        },
        Some(Value::Mapping(map)) => AuditConfig {
            enabled: flag("audit.enabled", map.get("enabled"))?,
            track_user: flag("audit.trackUser", map.get("trackUser"))?,
        },
        Some(other) => {
            return Err(CompileError::InvalidAuditFlag {
                aggregate: aggregate.to_string(),
                entity: entity.to_string(),
                key: "audit".to_string(),
                found: describe(other),
            })
        }
    };

    if config.track_user && !config.enabled {
        return Err(CompileError::TrackUserWithoutAudit {
            aggregate: aggregate.to_string(),
            entity: entity.to_string(),
        });
    }

    Ok(config)
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string '{}'", s),
        Value::Sequence(_) => "a list".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(tagged) => format!("tagged value {}", tagged.tag),
    }
}
