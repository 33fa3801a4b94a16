//! Scenario: Structural errors void the document
//!
//! Every fatal problem is reported as a `CompileError` naming the offending
//! aggregate, entity or enum; no partial model is produced.

use dddc::CompileError;

use crate::common::*;

/// SCENARIO: No aggregates array
#[test]
fn scenario_missing_aggregates() {
    let err = compile("entities: []\n").unwrap_err();
    assert!(matches!(err, CompileError::MissingAggregates { .. }));
}

/// SCENARIO: Aggregate without root
#[test]
fn scenario_no_root() {
    let yaml = r#"
aggregates:
  - name: Order
    entities:
      - name: Order
"#;
    let err = compile(yaml).unwrap_err();
    assert_eq!(
        err.to_string(),
        "aggregate 'Order' must have exactly one root entity, found 0"
    );
}

/// SCENARIO: Second aggregate fails, first is not returned either
#[test]
fn scenario_error_in_later_aggregate_voids_all() {
    let yaml = r#"
aggregates:
  - name: Good
    entities:
      - name: Good
        isRoot: true
  - name: Bad
    entities:
      - name: A
        isRoot: true
      - name: B
        isRoot: true
"#;
    assert!(matches!(
        compile(yaml),
        Err(CompileError::RootEntityCount { ref aggregate, count: 2 }) if aggregate == "Bad"
    ));
}

/// SCENARIO: Relationship without target
#[test]
fn scenario_relationship_without_target() {
    let yaml = r#"
aggregates:
  - name: Order
    entities:
      - name: Order
        isRoot: true
        relationships:
          - type: OneToMany
            mappedBy: order
"#;
    let err = compile(yaml).unwrap_err();
    assert!(matches!(err, CompileError::MissingRelationshipTarget { .. }));
    assert!(err.to_string().contains("'Order'"));
}

/// SCENARIO: Transition over an undeclared state
#[test]
fn scenario_enum_transition_unknown_state() {
    let yaml = r#"
aggregates:
  - name: Order
    entities:
      - name: Order
        isRoot: true
    enums:
      - name: Status
        values: [NEW, DONE]
        transitions:
          - from: NEW
            to: ARCHIVED
"#;
    let err = compile(yaml).unwrap_err();
    assert!(matches!(
        err,
        CompileError::UnknownTransitionState { ref state, .. } if state == "ARCHIVED"
    ));
}

/// SCENARIO: Malformed YAML
#[test]
fn scenario_invalid_yaml() {
    let err = compile("aggregates:\n  - name: [unclosed\n").unwrap_err();
    match err {
        CompileError::InvalidDocument { file, message } => {
            assert_eq!(file, std::path::PathBuf::from("model.yaml"));
            assert!(!message.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
