//! Scenario: Order aggregate with mapped child collection
//!
//! Journey: An author declares only the root side of Order → OrderItem.
//!
//! Success Criteria:
//! - OrderItem gets the inverse ManyToOne `order`
//! - The root gets add/remove/get methods for its items
//! - Entity order in the document does not matter

use dddc::domain::model::{MethodKind, RelationshipKind, Statement};
use dddc::CompileWarning;

use crate::common::*;

/// SCENARIO: Inverse side is synthesized on the child
#[test]
fn scenario_inverse_relationship_on_child() {
    let model = compile(ORDER_MODEL).unwrap();
    let order = model.aggregate("Order").unwrap();
    let item = order.entity("OrderItem").unwrap();

    assert_eq!(item.relationships.len(), 1);
    let back = &item.relationships[0];
    assert_eq!(back.kind, RelationshipKind::ManyToOne);
    assert_eq!(back.field_name, "order");
    assert_eq!(back.target, "Order");
    assert_eq!(back.join_column_name.as_deref(), Some("order_id"));
    assert!(back.is_inverse);

    let forward = order.root_entity.relationship("orderItems").unwrap();
    assert!(forward.is_collection);
    assert!(!forward.is_inverse);
    assert_eq!(forward.resolved_type.to_string(), "List<OrderItem>");
}

/// SCENARIO: Root gets factory add, overload add, remove and getter
#[test]
fn scenario_root_methods() {
    let model = compile(ORDER_MODEL).unwrap();
    let order = model.aggregate("Order").unwrap();

    let kinds: Vec<(&str, MethodKind)> = order
        .aggregate_methods
        .iter()
        .map(|m| (m.name.as_str(), m.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("addOrderItem", MethodKind::AddFactory),
            ("addOrderItem", MethodKind::AddInstance),
            ("removeOrderItem", MethodKind::Remove),
            ("getOrderItems", MethodKind::CollectionGetter),
        ]
    );

    let factory = &order.aggregate_methods[0];
    assert_eq!(factory.parameter_names(), vec!["sku", "quantity", "unitPrice"]);

    let remove = &order.aggregate_methods[2];
    assert_eq!(remove.parameters[0].type_name, "UUID");
}

/// SCENARIO: Getter never hands out the backing collection
#[test]
fn scenario_getter_is_unmodifiable() {
    let model = compile(ORDER_MODEL).unwrap();
    let order = model.aggregate("Order").unwrap();

    for getter in order
        .aggregate_methods
        .iter()
        .filter(|m| m.kind == MethodKind::CollectionGetter)
    {
        assert_eq!(
            getter.body,
            vec![Statement::ReturnUnmodifiable {
                collection: getter.relationship.clone(),
            }]
        );
    }
}

/// SCENARIO: Declaring the child first yields the same model
#[test]
fn scenario_order_independence() {
    let forward = compile(ORDER_MODEL).unwrap();
    let reversed = compile(ORDER_MODEL_REVERSED).unwrap();

    let item = |m: &dddc::CompiledModel| {
        m.aggregate("Order")
            .unwrap()
            .entity("OrderItem")
            .unwrap()
            .relationships
            .clone()
    };
    assert_eq!(item(&forward), item(&reversed));
    assert_eq!(
        forward.aggregates[0].aggregate_methods,
        reversed.aggregates[0].aggregate_methods
    );
}

/// SCENARIO: Compiling twice yields identical output
#[test]
fn scenario_idempotent() {
    assert_eq!(compile(ORDER_MODEL).unwrap(), compile(ORDER_MODEL).unwrap());
}

/// SCENARIO: Child's explicit back-reference wins over the inferred one
#[test]
fn scenario_declared_back_reference_wins() {
    let yaml = r#"
aggregates:
  - name: Order
    entities:
      - name: Order
        isRoot: true
        relationships:
          - type: OneToMany
            target: OrderItem
            mappedBy: order
      - name: OrderItem
        relationships:
          - type: ManyToOne
            target: Order
            joinColumn: order_ref
            fetch: EAGER
"#;
    let model = compile(yaml).unwrap();
    let item = model.aggregates[0].entity("OrderItem").unwrap();

    let named_order: Vec<_> = item
        .relationships
        .iter()
        .filter(|r| r.field_name == "order")
        .collect();
    assert_eq!(named_order.len(), 1);
    assert_eq!(named_order[0].join_column_name.as_deref(), Some("order_ref"));
    assert_eq!(named_order[0].fetch_mode, dddc::domain::model::FetchMode::Eager);
    assert!(!named_order[0].is_inverse);
}

/// SCENARIO: Renderer context exposes every entity, root first
#[test]
fn scenario_renderer_context() {
    let model = compile(ORDER_MODEL).unwrap();
    let json = serde_json::to_value(model.context()).unwrap();

    assert_eq!(json["packageName"], "com.acme");
    assert_eq!(json["moduleName"], "sales");
    let aggregate = &json["aggregates"][0];
    assert_eq!(aggregate["rootEntity"]["name"], "Order");
    assert_eq!(aggregate["secondaryEntities"][0]["name"], "OrderItem");
    assert_eq!(aggregate["allEntities"].as_array().unwrap().len(), 2);
    assert_eq!(aggregate["valueObjects"][0]["name"], "Money");
    assert_eq!(aggregate["aggregateMethods"][0]["body"][0]["op"], "construct");
    assert_eq!(json["enums"][0]["name"], "OrderStatus");
    assert_eq!(
        aggregate["rootEntity"]["requiredImports"],
        serde_json::json!([
            "com.acme.sales.domain.enums.OrderStatus",
            "jakarta.validation.constraints.*",
            "java.time.LocalDateTime",
            "java.util.ArrayList",
            "java.util.Collections",
            "java.util.UUID"
        ])
    );
}

/// SCENARIO: Same entity name in another aggregate keeps its own relationships
#[test]
fn scenario_inverse_stays_in_declaring_aggregate() {
    let yaml = r#"
aggregates:
  - name: Order
    entities:
      - name: Order
        isRoot: true
        relationships:
          - type: OneToMany
            target: Item
            mappedBy: order
      - name: Item
  - name: Cart
    entities:
      - name: Cart
        isRoot: true
      - name: Item
"#;
    let model = compile(yaml).unwrap();

    let order_item = model.aggregate("Order").unwrap().entity("Item").unwrap();
    assert_eq!(order_item.relationships.len(), 1);
    assert!(order_item.relationships[0].is_inverse);

    let cart_item = model.aggregate("Cart").unwrap().entity("Item").unwrap();
    assert!(cart_item.relationships.is_empty());
    assert!(model.warnings.is_empty(), "{:?}", model.warnings);
}

/// SCENARIO: Two back-references with one name keep the first and warn
#[test]
fn scenario_conflicting_back_reference_is_reported() {
    let yaml = r#"
aggregates:
  - name: Order
    entities:
      - name: Order
        isRoot: true
        relationships:
          - type: OneToMany
            target: Note
            mappedBy: owner
      - name: Invoice
        relationships:
          - type: OneToMany
            target: Note
            mappedBy: owner
      - name: Note
"#;
    let model = compile(yaml).unwrap();

    let note = model.aggregates[0].entity("Note").unwrap();
    let owners: Vec<(&str, &str)> = note
        .relationships
        .iter()
        .map(|r| (r.field_name.as_str(), r.target.as_str()))
        .collect();
    assert_eq!(owners, vec![("owner", "Order")]);

    assert_eq!(model.warnings.len(), 1);
    assert!(matches!(
        &model.warnings[0],
        CompileWarning::ConflictingInverse { field, dropped, .. }
            if field == "owner" && dropped == "Invoice"
    ));
    assert!(model.warnings[0].to_string().contains("already mapped by 'Order'"));
}
