//! Property tests for whole-document compilation.

use std::path::Path;

use proptest::prelude::*;

use dddc::{CompiledModel, ModelCompiler};

const CHILDREN: [&str; 4] = ["Line", "Note", "Shipment", "Payment"];
const SCALARS: [&str; 6] = ["String", "Integer", "BigDecimal", "LocalDate", "LocalDateTime", "UUID"];

#[derive(Debug, Clone)]
struct Child {
    name: &'static str,
    field_type: &'static str,
    mapped: bool,
}

fn child() -> impl Strategy<Value = Child> {
    (0..CHILDREN.len(), 0..SCALARS.len(), any::<bool>()).prop_map(|(n, t, mapped)| Child {
        name: CHILDREN[n],
        field_type: SCALARS[t],
        mapped,
    })
}

/// Distinct children, in generation order.
fn children() -> impl Strategy<Value = Vec<Child>> {
    proptest::collection::vec(child(), 1..=4).prop_map(|mut list| {
        let mut seen = Vec::new();
        list.retain(|c| {
            let fresh = !seen.contains(&c.name);
            seen.push(c.name);
            fresh
        });
        list
    })
}

/// Root relationships in fixed order; entity declarations in `order`.
fn document(children: &[Child], order: &[usize], root_first: bool) -> String {
    let mut root = String::from("      - name: Root\n        isRoot: true\n        relationships:\n");
    for c in children {
        root.push_str(&format!("          - type: OneToMany\n            target: {}\n", c.name));
        if c.mapped {
            root.push_str("            mappedBy: root\n");
        }
    }

    let mut entities = Vec::new();
    for &i in order {
        let c = &children[i];
        entities.push(format!(
            "      - name: {}\n        fields:\n          - name: value\n            type: {}\n",
            c.name, c.field_type
        ));
    }
    if root_first {
        entities.insert(0, root);
    } else {
        entities.push(root);
    }

    format!("aggregates:\n  - name: Root\n    entities:\n{}", entities.concat())
}

fn compile(yaml: &str) -> CompiledModel {
    ModelCompiler::new("com.acme", "sales")
        .compile_str(yaml, Path::new("model.yaml"))
        .unwrap()
}

fn shuffled_documents() -> impl Strategy<Value = (Vec<Child>, Vec<usize>, bool)> {
    children().prop_flat_map(|children| {
        let indices: Vec<usize> = (0..children.len()).collect();
        (Just(children), Just(indices).prop_shuffle(), any::<bool>())
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Compiling the same document twice yields identical models.
    #[test]
    fn property_compile_idempotent((children, order, root_first) in shuffled_documents()) {
        let yaml = document(&children, &order, root_first);
        prop_assert_eq!(compile(&yaml), compile(&yaml));
    }

    /// PROPERTY: Entity declaration order never changes relationships or methods.
    #[test]
    fn property_order_independent((children, order, root_first) in shuffled_documents()) {
        let natural: Vec<usize> = (0..children.len()).collect();
        let baseline = compile(&document(&children, &natural, true));
        let shuffled = compile(&document(&children, &order, root_first));

        let a = &baseline.aggregates[0];
        let b = &shuffled.aggregates[0];
        prop_assert_eq!(&a.root_entity, &b.root_entity);
        prop_assert_eq!(&a.aggregate_methods, &b.aggregate_methods);
        for c in &children {
            prop_assert_eq!(a.entity(c.name), b.entity(c.name));
        }
    }

    /// PROPERTY: Mapped children carry exactly one inverse `root` relationship.
    #[test]
    fn property_inverse_only_when_mapped((children, order, root_first) in shuffled_documents()) {
        let model = compile(&document(&children, &order, root_first));
        let aggregate = &model.aggregates[0];
        for c in &children {
            let entity = aggregate.entity(c.name).unwrap();
            let inverses = entity.relationships.iter().filter(|r| r.is_inverse).count();
            prop_assert_eq!(inverses, usize::from(c.mapped));
        }
    }

    /// PROPERTY: Import lists are sorted and free of duplicates.
    #[test]
    fn property_imports_sorted_unique((children, order, root_first) in shuffled_documents()) {
        let model = compile(&document(&children, &order, root_first));
        for entity in model.aggregates[0].all_entities() {
            let imports = &entity.required_imports;
            prop_assert!(imports.windows(2).all(|w| w[0] < w[1]), "{:?}", imports);
        }
    }
}
