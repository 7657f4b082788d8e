//! Tree annotation: one-pass parent linking.
//!
//! The current rule set does not consult parent links for its decisions, but
//! the map is built for every run so parent-aware rules (and consumers that
//! inspect matched nodes afterwards) have it available.

use crate::tree::{NodeId, SyntaxTree};

/// Side table mapping every node to its immediate parent.
///
/// Built once per run, read-only afterwards, and discarded with the tree.
/// The root is the only node without a parent.
#[derive(Debug)]
pub struct ParentMap {
    parents: Vec<Option<NodeId>>,
}

impl ParentMap {
    /// Parent of `id`, or `None` for the root.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id.index()).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Record, for every node in the tree, which node is its parent.
///
/// Visitation order does not matter: each node is the child of exactly one
/// other node, so any single pass over the arena produces the same map.
/// This step cannot fail on a well-formed tree.
pub fn annotate(tree: &SyntaxTree) -> ParentMap {
    let mut parents = vec![None; tree.len()];
    for id in tree.ids() {
        for &child in &tree.node(id).children {
            parents[child.index()] = Some(id);
        }
    }
    tracing::trace!(nodes = parents.len(), "recorded parent links");
    ParentMap { parents }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ast::FileId;
    use crate::parse::python::parse_python_file;
    use crate::types::context::SourceFile;
    use crate::tree::ExprKind;

    fn lower(code: &str) -> SyntaxTree {
        let sf = SourceFile {
            path: "test.py".to_string(),
            content: code.to_string(),
        };
        let parsed = parse_python_file(FileId(1), &sf).unwrap();
        SyntaxTree::from_parsed(&parsed)
    }

    #[test]
    fn root_has_no_parent() {
        let tree = lower("x = 1\n");
        let parents = annotate(&tree);
        assert!(parents.parent_of(tree.root()).is_none());
    }

    #[test]
    fn every_non_root_node_has_exactly_one_parent() {
        let tree = lower("self.get_url('http://x', '/y', callback=cb)\n");
        let parents = annotate(&tree);
        assert_eq!(parents.len(), tree.len());
        for id in tree.ids() {
            if id == tree.root() {
                assert!(parents.parent_of(id).is_none());
            } else {
                assert!(parents.parent_of(id).is_some(), "{id:?} has no parent");
            }
        }
    }

    #[test]
    fn parent_of_keyword_value_is_the_keyword() {
        let tree = lower("self.get_url(callback=cb)\n");
        let parents = annotate(&tree);

        let cb = tree
            .ids()
            .find(|&id| matches!(&tree.node(id).kind, ExprKind::Name { id } if id == "cb"))
            .unwrap();
        let parent = parents.parent_of(cb).unwrap();
        assert!(matches!(tree.node(parent).kind, ExprKind::Keyword { .. }));
    }

    #[test]
    fn parent_chain_reaches_the_root() {
        let tree = lower("def cb():\n    self.get_url('http://x')\n");
        let parents = annotate(&tree);

        for id in tree.ids() {
            let mut current = id;
            let mut hops = 0;
            while let Some(parent) = parents.parent_of(current) {
                current = parent;
                hops += 1;
                assert!(hops <= tree.len(), "cycle via {id:?}");
            }
            assert_eq!(current, tree.root());
        }
    }

    #[test]
    fn annotating_twice_yields_the_same_map() {
        let tree = lower("self.get_url(a, callback=cb)\n");
        let first = annotate(&tree);
        let second = annotate(&tree);
        for id in tree.ids() {
            assert_eq!(first.parent_of(id), second.parent_of(id));
        }
    }

    #[test]
    fn empty_file_has_lone_unparented_root() {
        let tree = lower("");
        let parents = annotate(&tree);
        assert_eq!(parents.len(), 1);
        assert!(parents.parent_of(tree.root()).is_none());
    }
}
