use std::collections::HashSet;

use super::{NodeKind, Tree};

/// Asserts the structural invariants of a tree:
/// parent links agree with child lists, every node is reached once,
/// list children are items, item children are blocks, and ids are unique
/// apart from the fixed testing id.
pub fn check(tree: &Tree) {
    let mut seen = HashSet::new();
    let mut ids = HashSet::new();
    for ix in tree.reachable() {
        assert!(seen.insert(ix), "node {ix:?} reached twice");

        let id = tree.id(ix);
        if !id.is_testing() {
            assert!(ids.insert(id.clone()), "duplicate id {id}");
        }

        for child in tree.children(ix) {
            assert_eq!(
                tree.parent(*child),
                Some(ix),
                "child {child:?} of {ix:?} has a different parent"
            );
        }

        match tree.kind(ix) {
            NodeKind::List { .. } => {
                for child in tree.children(ix) {
                    assert!(
                        tree.kind(*child).is_list_item(),
                        "list {id} holds a {}",
                        tree.kind(*child).name()
                    );
                }
            }
            NodeKind::ListItem { .. } | NodeKind::BlockQuote | NodeKind::Document => {
                for child in tree.children(ix) {
                    assert!(
                        tree.kind(*child).is_block() && !tree.kind(*child).is_list_item(),
                        "{} {id} holds a {}",
                        tree.kind(ix).name(),
                        tree.kind(*child).name()
                    );
                }
            }
            _ => {}
        }
    }
    assert_eq!(tree.parent(tree.root()), None, "root has a parent");
}
