//! Scenario: Field resolution
//!
//! Success Criteria:
//! - Value objects are detected by name alone
//! - State-machine enums seed read-only fields
//! - Validation rules render as annotations

use crate::common::*;

/// SCENARIO: Money is a value object without any flag
#[test]
fn scenario_value_object_detected() {
    let model = compile(ORDER_MODEL).unwrap();
    let total = model.aggregates[0].root_entity.field("total").unwrap();

    assert!(total.is_value_object);
    assert_eq!(total.resolved_type.to_string(), "Money");
    assert_eq!(total.jpa_type.to_string(), "MoneyEmbeddable");
}

/// SCENARIO: Transition map and read-only status
#[test]
fn scenario_state_machine_field() {
    let model = compile(ORDER_MODEL).unwrap();
    let order = &model.aggregates[0].root_entity;
    let status = order.field("status").unwrap();

    assert!(status.is_enum);
    assert!(status.read_only);
    assert_eq!(status.auto_init_value.as_deref(), Some("PENDING"));

    let meta = status.transition_meta.as_ref().unwrap();
    assert_eq!(
        serde_json::to_string(&meta.transition_map).unwrap(),
        r#"{"PENDING":["CONFIRMED","CANCELLED"],"CONFIRMED":["CANCELLED"],"CANCELLED":[]}"#
    );
    assert_eq!(meta.values, vec!["PENDING", "CONFIRMED", "CANCELLED"]);

    assert!(order.input_fields().all(|f| f.name != "status"));
}

/// SCENARIO: Validation rules in declared order
#[test]
fn scenario_validation_annotations() {
    let model = compile(ORDER_MODEL).unwrap();
    let reference = model.aggregates[0].root_entity.field("reference").unwrap();

    assert_eq!(
        reference.validation_annotations,
        vec!["@Size(min = 5, max = 100)", "@NotBlank"]
    );
}

/// SCENARIO: Read-only fields never become add-method parameters
#[test]
fn scenario_read_only_excluded_from_add_parameters() {
    let yaml = r#"
aggregates:
  - name: Cart
    entities:
      - name: Cart
        isRoot: true
        relationships:
          - type: OneToMany
            target: Line
            mappedBy: cart
      - name: Line
        fields:
          - name: sku
            type: String
          - name: state
            type: LineState
          - name: addedAt
            type: LocalDateTime
            readOnly: true
    enums:
      - name: LineState
        values: [OPEN, CLOSED]
        initialValue: OPEN
"#;
    let model = compile(yaml).unwrap();
    let cart = &model.aggregates[0];

    let add = cart.method("addLine").unwrap();
    assert_eq!(add.parameter_names(), vec!["sku"]);
    let line = cart.entity("Line").unwrap();
    assert!(line.field("state").unwrap().transition_meta.is_none());
    assert!(line.field("state").unwrap().read_only);
}

/// SCENARIO: Unknown type names compile but are reported
#[test]
fn scenario_unknown_type_is_warning() {
    let yaml = r#"
aggregates:
  - name: Order
    entities:
      - name: Order
        isRoot: true
        fields:
          - name: total
            type: mony
"#;
    let model = compile(yaml).unwrap();

    let total = model.aggregates[0].root_entity.field("total").unwrap();
    assert_eq!(total.resolved_type.to_string(), "Mony");
    assert!(!total.is_value_object);
    assert_eq!(model.warnings.len(), 1);
    assert!(model.warnings[0].to_string().contains("'Mony'"));
}
