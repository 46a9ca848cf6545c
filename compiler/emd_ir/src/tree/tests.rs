#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::collections::HashMap;

use super::*;
use pretty_assertions::assert_eq;

fn arities() -> HashMap<&'static str, usize> {
    HashMap::from([
        ("closest-water-patch", 2),
        ("patches-with-water", 0),
        ("farms", 0),
        ("myself", 0),
    ])
}

fn scenario(table: &HashMap<&'static str, usize>) -> Tree {
    let mut b = TreeBuilder::new(table);
    let water = b.node("patches-with-water", &[]).unwrap();
    let farms = b.node("farms", &[]).unwrap();
    let root = b.node("closest-water-patch", &[water, farms]).unwrap();
    b.finish(root).unwrap()
}

#[test]
fn builds_two_child_tree() {
    let table = arities();
    let tree = scenario(&table);

    assert_eq!(tree.node_count(), 3);
    assert_eq!(tree.depth(), 2);
    assert_eq!(tree.node(tree.root()).name(), "closest-water-patch");
    assert_eq!(tree.node(tree.root()).arity(), 2);

    let names: Vec<&str> = tree
        .children(tree.root())
        .iter()
        .map(|&id| tree.node(id).name())
        .collect();
    assert_eq!(names, ["patches-with-water", "farms"]);
}

#[test]
fn single_terminal_is_a_tree() {
    let table = arities();
    let mut b = TreeBuilder::new(&table);
    let root = b.node("farms", &[]).unwrap();
    let tree = b.finish(root).unwrap();

    assert_eq!(tree.depth(), 1);
    assert!(tree.node(root).is_terminal());
    assert!(tree.children(root).is_empty());
}

#[test]
fn rejects_too_few_children() {
    let table = arities();
    let mut b = TreeBuilder::new(&table);
    let farms = b.node("farms", &[]).unwrap();

    assert_eq!(
        b.node("closest-water-patch", &[farms]),
        Err(BuildError::ArityMismatch {
            name: "closest-water-patch".into(),
            expected: 2,
            got: 1,
        })
    );
}

#[test]
fn rejects_too_many_children() {
    let table = arities();
    let mut b = TreeBuilder::new(&table);
    let a = b.node("farms", &[]).unwrap();
    let c = b.node("myself", &[]).unwrap();
    let d = b.node("patches-with-water", &[]).unwrap();

    let err = b.node("closest-water-patch", &[a, c, d]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "`closest-water-patch` expects 2 children, got 3"
    );
}

#[test]
fn rejects_children_on_terminal() {
    let table = arities();
    let mut b = TreeBuilder::new(&table);
    let a = b.node("farms", &[]).unwrap();

    assert!(matches!(
        b.node("myself", &[a]),
        Err(BuildError::ArityMismatch { expected: 0, got: 1, .. })
    ));
}

#[test]
fn rejects_unknown_primitive() {
    let table = arities();
    let mut b = TreeBuilder::new(&table);

    assert_eq!(
        b.node("move-to", &[]),
        Err(BuildError::UnknownPrimitive {
            name: "move-to".into()
        })
    );
}

#[test]
fn rejects_child_used_twice() {
    let table = arities();
    let mut b = TreeBuilder::new(&table);
    let farms = b.node("farms", &[]).unwrap();

    assert_eq!(
        b.node("closest-water-patch", &[farms, farms]),
        Err(BuildError::SharedChild { id: farms })
    );
}

#[test]
fn rejects_child_with_existing_parent() {
    let table = arities();
    let mut b = TreeBuilder::new(&table);
    let water = b.node("patches-with-water", &[]).unwrap();
    let farms = b.node("farms", &[]).unwrap();
    let first = b.node("closest-water-patch", &[water, farms]).unwrap();
    let other = b.node("myself", &[]).unwrap();

    assert_eq!(
        b.node("closest-water-patch", &[other, farms]),
        Err(BuildError::SharedChild { id: farms })
    );
    assert_eq!(b.finish(first), Err(BuildError::Detached { count: 1 }));
}

#[test]
fn rejects_foreign_child() {
    let table = arities();
    let mut b = TreeBuilder::new(&table);
    let farms = b.node("farms", &[]).unwrap();

    assert_eq!(
        b.node("closest-water-patch", &[farms, NodeId::new(7)]),
        Err(BuildError::DanglingChild { id: NodeId::new(7) })
    );
}

#[test]
fn finish_requires_nodes() {
    let table = arities();
    let b = TreeBuilder::new(&table);
    assert_eq!(b.finish(NodeId::new(0)), Err(BuildError::EmptyTree));
}

#[test]
fn finish_rejects_non_root() {
    let table = arities();
    let tree_builder = {
        let mut b = TreeBuilder::new(&table);
        let water = b.node("patches-with-water", &[]).unwrap();
        let farms = b.node("farms", &[]).unwrap();
        b.node("closest-water-patch", &[water, farms]).unwrap();
        b
    };

    assert_eq!(
        tree_builder.finish(NodeId::new(0)),
        Err(BuildError::SharedChild { id: NodeId::new(0) })
    );
}

#[test]
fn display_uses_prefix_notation() {
    let table = arities();
    let tree = scenario(&table);
    assert_eq!(
        tree.to_string(),
        "closest-water-patch(patches-with-water, farms)"
    );
}

#[test]
fn depth_of_nested_tree() {
    let table = arities();
    let mut b = TreeBuilder::new(&table);
    let water = b.node("patches-with-water", &[]).unwrap();
    let farms = b.node("farms", &[]).unwrap();
    let inner = b.node("closest-water-patch", &[water, farms]).unwrap();
    let me = b.node("myself", &[]).unwrap();
    let root = b.node("closest-water-patch", &[inner, me]).unwrap();
    let tree = b.finish(root).unwrap();

    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.node_count(), 5);
    assert_eq!(
        tree.to_string(),
        "closest-water-patch(closest-water-patch(patches-with-water, farms), myself)"
    );
}
