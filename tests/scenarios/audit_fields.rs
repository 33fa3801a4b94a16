//! Scenario: Audit field injection
//!
//! Success Criteria:
//! - `enabled` appends createdAt/updatedAt after declared fields
//! - `trackUser` adds createdBy/updatedBy
//! - Audit fields never appear in input or response projections
//! - `trackUser` without `enabled` voids the whole document
//! - Legacy `auditable` still works but is reported

use dddc::{CompileError, CompileWarning};

use crate::common::*;

fn field_summary(model: &dddc::CompiledModel) -> Vec<(String, String)> {
    model.aggregates[0]
        .root_entity
        .fields
        .iter()
        .map(|f| (f.name.clone(), f.resolved_type.to_string()))
        .collect()
}

fn pair(name: &str, ty: &str) -> (String, String) {
    (name.to_string(), ty.to_string())
}

/// SCENARIO: Timestamps only
#[test]
fn scenario_audit_enabled_without_user() {
    let model = compile(&user_model("audit: { enabled: true, trackUser: false }")).unwrap();

    assert_eq!(
        field_summary(&model),
        vec![
            pair("email", "String"),
            pair("createdAt", "LocalDateTime"),
            pair("updatedAt", "LocalDateTime"),
        ]
    );
}

/// SCENARIO: Timestamps and users, in that order
#[test]
fn scenario_audit_with_track_user() {
    let model = compile(&user_model("audit: { enabled: true, trackUser: true }")).unwrap();

    assert_eq!(
        field_summary(&model),
        vec![
            pair("email", "String"),
            pair("createdAt", "LocalDateTime"),
            pair("updatedAt", "LocalDateTime"),
            pair("createdBy", "String"),
            pair("updatedBy", "String"),
        ]
    );

    let user = &model.aggregates[0].root_entity;
    let inputs: Vec<&str> = user.input_fields().map(|f| f.name.as_str()).collect();
    assert_eq!(inputs, vec!["email"]);
    let responses: Vec<&str> = user.response_fields().map(|f| f.name.as_str()).collect();
    assert_eq!(responses, vec!["email"]);
}

/// SCENARIO: trackUser without enabled is fatal
#[test]
fn scenario_track_user_without_enabled() {
    let err = compile(&user_model("audit: { enabled: false, trackUser: true }")).unwrap_err();
    assert!(matches!(err, CompileError::TrackUserWithoutAudit { ref entity, .. } if entity == "User"));
    assert!(err.to_string().contains("audit.trackUser"));
}

/// SCENARIO: Non-boolean flag is fatal
#[test]
fn scenario_non_boolean_audit_flag() {
    let err = compile(&user_model("audit: { enabled: maybe }")).unwrap_err();
    assert!(matches!(err, CompileError::InvalidAuditFlag { .. }));
}

/// SCENARIO: Legacy flag is honored with a warning
#[test]
fn scenario_legacy_auditable() {
    let model = compile(&user_model("auditable: true")).unwrap();

    assert_eq!(model.aggregates[0].root_entity.fields.len(), 3);
    assert_eq!(
        model.warnings,
        vec![CompileWarning::LegacyAuditFlag {
            aggregate: "Account".to_string(),
            entity: "User".to_string(),
        }]
    );
}
