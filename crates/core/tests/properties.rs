//! Property-based tests for structural comparison and resolution.
//!
//! These tests use proptest to verify invariants hold for arbitrary trees.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use yamlet_core::{resolve, unresolved_count, AnchorTable, Node, TagName};

fn hash_of(node: &Node) -> u64 {
    let mut h = DefaultHasher::new();
    node.hash(&mut h);
    h.finish()
}

fn arb_scalar() -> impl Strategy<Value = Node> {
    prop_oneof![
        "[a-z]{0,6}".prop_map(Node::from),
        any::<i32>().prop_map(|i| Node::from(i64::from(i))),
        prop::bool::ANY.prop_map(|b| Node::from(if b { "true" } else { "no" })),
        "[a-z0-9]{1,4}".prop_map(|t| Node::tagged(t, TagName::STR)),
    ]
}

/// Trees made of scalars, sequences and mappings only.
fn arb_tree() -> impl Strategy<Value = Node> {
    arb_scalar().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Node::sequence),
            prop::collection::vec((arb_scalar(), inner), 0..4).prop_map(Node::mapping),
        ]
    })
}

proptest! {
    /// Equal nodes always hash identically.
    #[test]
    fn equal_nodes_hash_equally(a in arb_tree(), b in arb_tree()) {
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
        prop_assert_eq!(hash_of(&a), hash_of(&a.clone()));
    }

    /// Re-tagging with the resolved tag keeps a scalar equal and its hash.
    #[test]
    fn resolved_tag_is_stable(text in "[a-z0-9.~-]{0,6}") {
        let implicit = Node::from(text.as_str());
        let explicit = Node::tagged(text.as_str(), implicit.tag().name().clone());
        prop_assert_eq!(&implicit, &explicit);
        prop_assert_eq!(hash_of(&implicit), hash_of(&explicit));
    }

    /// `partial_cmp` reports `Equal` exactly when the nodes are equal.
    #[test]
    fn ordering_agrees_with_equality(a in arb_tree(), b in arb_tree()) {
        let equal_by_order = a.partial_cmp(&b) == Some(std::cmp::Ordering::Equal);
        prop_assert_eq!(equal_by_order, a == b);
    }

    /// A tree without placeholders resolves to itself under any table.
    #[test]
    fn resolution_of_placeholder_free_tree_is_identity(
        tree in arb_tree(),
        bound in arb_tree(),
    ) {
        prop_assert_eq!(unresolved_count(&tree), 0);
        let anchors: AnchorTable = [("a", bound)].into_iter().collect();
        prop_assert_eq!(resolve(tree.clone(), &anchors).unwrap(), tree.clone());
        prop_assert_eq!(resolve(tree.clone(), &AnchorTable::new()).unwrap(), tree);
    }

    /// Every placeholder bound in the table is substituted by its value.
    #[test]
    fn bound_placeholders_are_replaced(values in prop::collection::vec(arb_tree(), 1..5)) {
        let anchors: AnchorTable = values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("a{}", i), v.clone()))
            .collect();
        let doc = Node::sequence(
            (0..values.len()).map(|i| Node::alias(format!("a{}", i), None)).collect(),
        );
        let resolved = resolve(doc, &anchors).unwrap();
        prop_assert_eq!(resolved.array(), values);
    }
}
