//! Test fixtures - reusable model documents.

/// Order aggregate: root with a mapped OneToMany to OrderItem, a state-machine
/// enum and a value object.
pub const ORDER_MODEL: &str = r#"
aggregates:
  - name: Order
    entities:
      - name: order
        isRoot: true
        audit:
          enabled: true
        fields:
          - name: id
            type: UUID
          - name: reference
            type: String
            validations:
              - type: Size
                min: 5
                max: 100
              - type: NotBlank
          - name: status
            type: OrderStatus
          - name: total
            type: Money
        relationships:
          - type: OneToMany
            target: OrderItem
            mappedBy: order
            cascade: [ALL]
      - name: orderItem
        fields:
          - name: id
            type: UUID
          - name: sku
            type: String
          - name: quantity
            type: Integer
          - name: unitPrice
            type: Money
    valueObjects:
      - name: Money
        fields:
          - name: amount
            type: BigDecimal
          - name: currency
            type: String
    enums:
      - name: OrderStatus
        values: [PENDING, CONFIRMED, CANCELLED]
        transitions:
          - from: PENDING
            to: CONFIRMED
          - from: [PENDING, CONFIRMED]
            to: CANCELLED
        initialValue: PENDING
"#;

/// Same aggregate as `ORDER_MODEL` with the entities declared in reverse.
pub const ORDER_MODEL_REVERSED: &str = r#"
aggregates:
  - name: Order
    entities:
      - name: orderItem
        fields:
          - name: id
            type: UUID
          - name: sku
            type: String
          - name: quantity
            type: Integer
          - name: unitPrice
            type: Money
      - name: order
        isRoot: true
        audit:
          enabled: true
        fields:
          - name: id
            type: UUID
          - name: reference
            type: String
            validations:
              - type: Size
                min: 5
                max: 100
              - type: NotBlank
          - name: status
            type: OrderStatus
          - name: total
            type: Money
        relationships:
          - type: OneToMany
            target: OrderItem
            mappedBy: order
            cascade: [ALL]
    valueObjects:
      - name: Money
        fields:
          - name: amount
            type: BigDecimal
          - name: currency
            type: String
    enums:
      - name: OrderStatus
        values: [PENDING, CONFIRMED, CANCELLED]
        transitions:
          - from: PENDING
            to: CONFIRMED
          - from: [PENDING, CONFIRMED]
            to: CANCELLED
        initialValue: PENDING
"#;

/// Single-aggregate model with one audited root entity.
pub fn user_model(audit: &str) -> String {
    format!(
        r#"
aggregates:
  - name: Account
    entities:
      - name: user
        isRoot: true
        {audit}
        fields:
          - name: email
            type: String
"#
    )
}
