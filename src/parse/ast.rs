use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tree_sitter::Tree;

/// Engine-internal identifier for a file in an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(pub u64);

/// A fully parsed source file: source text + tree-sitter AST.
///
/// Created fresh for each analysis invocation and discarded afterwards;
/// nothing is cached across files or runs.
#[derive(Debug)]
pub struct ParsedFile {
    pub file_id: FileId,
    pub path: String,
    pub source: Arc<String>,
    pub tree: Tree,
}

impl ParsedFile {
    /// Get the exact source text for a node.
    pub fn text_for_node(&self, node: &tree_sitter::Node) -> String {
        let byte_range = node.byte_range();
        self.source[byte_range.start..byte_range.end].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::parse::python::parse_python_file;
    use crate::types::context::SourceFile;

    fn parse(code: &str) -> ParsedFile {
        let sf = SourceFile {
            path: "test.py".to_string(),
            content: code.to_string(),
        };
        parse_python_file(FileId(1), &sf).unwrap()
    }

    #[test]
    fn file_id_is_hashable_and_comparable() {
        let mut set = HashSet::new();
        set.insert(FileId(1));
        set.insert(FileId(2));
        set.insert(FileId(1));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&FileId(1)));
        assert!(!set.contains(&FileId(3)));
    }

    #[test]
    fn file_id_serialize_deserialize() {
        let id = FileId(999);
        let json = serde_json::to_string(&id).unwrap();
        let back: FileId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn text_for_node_returns_exact_source() {
        let code = "x = 42";
        let parsed = parse(code);
        let root = parsed.tree.root_node();
        assert_eq!(parsed.text_for_node(&root), code);
    }

    #[test]
    fn text_for_node_identifier() {
        let code = "variable_name = 123";
        let parsed = parse(code);
        let root = parsed.tree.root_node();

        let expr_stmt = root.child(0).unwrap();
        let assignment = expr_stmt.child(0).unwrap();
        let identifier = assignment.child(0).unwrap();
        assert_eq!(identifier.kind(), "identifier");
        assert_eq!(parsed.text_for_node(&identifier), "variable_name");
    }

    #[test]
    fn source_is_shared_via_arc() {
        let parsed = parse("x = 1");
        let source_clone = Arc::clone(&parsed.source);
        assert_eq!(*source_clone, "x = 1");
        assert_eq!(Arc::strong_count(&parsed.source), 2);
    }

    #[test]
    fn path_and_file_id_preserved() {
        let sf = SourceFile {
            path: "some/nested/module.py".to_string(),
            content: "pass".to_string(),
        };
        let parsed = parse_python_file(FileId(99), &sf).unwrap();
        assert_eq!(parsed.path, "some/nested/module.py");
        assert_eq!(parsed.file_id, FileId(99));
    }
}
