//! Arena-backed syntax tree lowered from the external parser's output.
//!
//! Nodes live in an indexed `Vec` and reference each other by [`NodeId`], so
//! parent links can be kept in a side table (see [`annotate`]) instead of
//! mutating shared nodes. Expression shape is a closed tagged variant
//! ([`ExprKind`]) so rule predicates are exhaustive pattern matches rather
//! than runtime type probes.
//!
//! A tree is built fresh for every analysis invocation and discarded when the
//! run completes.

pub mod annotate;

use tree_sitter::Node as TsNode;

use crate::parse::ast::ParsedFile;

/// Index of a node in a [`SyntaxTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Shape of an expression node, as far as the rules need to distinguish.
///
/// Anything the matcher has no business inspecting lowers to `Other`; such
/// nodes still carry their children so traversal reaches everything nested
/// inside them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    /// Function or method invocation.
    Call {
        callee: NodeId,
        /// Positional arguments, in source order.
        args: Vec<NodeId>,
        /// Keyword arguments (including `**` splats, which have no name).
        keywords: Vec<NodeId>,
    },
    /// Member access `receiver.attr`.
    Attribute { value: NodeId, attr: String },
    /// Bare identifier reference.
    Name { id: String },
    /// A `name=value` keyword argument; `name` is `None` for `**` splats.
    Keyword { name: Option<String>, value: NodeId },
    /// Number, string, or constant literal.
    Literal,
    /// Everything else (statements, operators, definitions, ...).
    Other,
}

/// A single node: position, grammar kind, shape, and children.
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    /// Line number, 1-based.
    pub line: u32,
    /// Column offset, 0-based.
    pub column: u32,
    /// The tree-sitter grammar kind this was lowered from. Kept for logging
    /// and debugging only; rules match on `kind`.
    pub ts_kind: &'static str,
    pub kind: ExprKind,
    /// All lowered children, in source order. For calls this is the callee
    /// followed by positional then keyword arguments.
    pub children: Vec<NodeId>,
}

/// The lowered tree for one source file.
#[derive(Debug)]
pub struct SyntaxTree {
    path: String,
    nodes: Vec<SyntaxNode>,
    root: NodeId,
}

impl SyntaxTree {
    /// Lower a parsed file into an arena tree. One pass, linear in tree size.
    pub fn from_parsed(parsed: &ParsedFile) -> Self {
        let mut tree = Self {
            path: parsed.path.clone(),
            nodes: Vec::new(),
            root: NodeId(0),
        };
        tree.root = tree.lower(parsed, parsed.tree.root_node());
        tracing::debug!(
            path = %tree.path,
            nodes = tree.nodes.len(),
            "lowered syntax tree"
        );
        tree
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.index()]
    }

    /// Iterate all node ids in arena order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    fn push(&mut self, node: SyntaxNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn lower(&mut self, parsed: &ParsedFile, node: TsNode) -> NodeId {
        // Parentheses are not nodes in Python's own AST; lower through them
        // so `(cb)` in an argument slot is still a bare identifier.
        if node.kind() == "parenthesized_expression" {
            let mut cursor = node.walk();
            let inner: Vec<TsNode> = node
                .named_children(&mut cursor)
                .filter(|c| c.kind() != "comment")
                .collect();
            if let [only] = inner.as_slice() {
                return self.lower(parsed, *only);
            }
        }

        let pos = node.start_position();
        let line = pos.row as u32 + 1;
        let column = pos.column as u32;
        let ts_kind = node.kind();

        let (kind, children) = match node.kind() {
            "call" => self.lower_call(parsed, node),
            "attribute" => self.lower_attribute(parsed, node),
            "identifier" => (
                ExprKind::Name {
                    id: parsed.text_for_node(&node),
                },
                Vec::new(),
            ),
            "keyword_argument" => self.lower_keyword(parsed, node),
            "dictionary_splat" => self.lower_splat(parsed, node),
            "integer" | "float" | "string" | "concatenated_string" | "true" | "false"
            | "none" => {
                // f-string interpolations can nest arbitrary expressions,
                // so literals keep their children for traversal
                let children = self.lower_named_children(parsed, node);
                (ExprKind::Literal, children)
            }
            _ => {
                let children = self.lower_named_children(parsed, node);
                (ExprKind::Other, children)
            }
        };

        self.push(SyntaxNode {
            line,
            column,
            ts_kind,
            kind,
            children,
        })
    }

    fn lower_call(&mut self, parsed: &ParsedFile, node: TsNode) -> (ExprKind, Vec<NodeId>) {
        let callee = match node.child_by_field_name("function") {
            Some(func) => self.lower(parsed, func),
            // Degraded call shape from an error-recovered parse; keep the
            // children reachable but never let it match.
            None => return (ExprKind::Other, self.lower_named_children(parsed, node)),
        };

        let mut args = Vec::new();
        let mut keywords = Vec::new();
        if let Some(arg_list) = node.child_by_field_name("arguments") {
            let mut cursor = arg_list.walk();
            for child in arg_list.named_children(&mut cursor) {
                match child.kind() {
                    "comment" => {}
                    "keyword_argument" | "dictionary_splat" => {
                        keywords.push(self.lower(parsed, child));
                    }
                    _ => args.push(self.lower(parsed, child)),
                }
            }
        }

        let mut children = Vec::with_capacity(1 + args.len() + keywords.len());
        children.push(callee);
        children.extend_from_slice(&args);
        children.extend_from_slice(&keywords);

        (
            ExprKind::Call {
                callee,
                args,
                keywords,
            },
            children,
        )
    }

    fn lower_attribute(&mut self, parsed: &ParsedFile, node: TsNode) -> (ExprKind, Vec<NodeId>) {
        let (object, attr) = match (
            node.child_by_field_name("object"),
            node.child_by_field_name("attribute"),
        ) {
            (Some(object), Some(attr)) => (object, attr),
            _ => return (ExprKind::Other, self.lower_named_children(parsed, node)),
        };

        let value = self.lower(parsed, object);
        (
            ExprKind::Attribute {
                value,
                attr: parsed.text_for_node(&attr),
            },
            vec![value],
        )
    }

    fn lower_keyword(&mut self, parsed: &ParsedFile, node: TsNode) -> (ExprKind, Vec<NodeId>) {
        let name = node
            .child_by_field_name("name")
            .map(|n| parsed.text_for_node(&n));
        match node.child_by_field_name("value") {
            Some(v) => {
                let value = self.lower(parsed, v);
                (ExprKind::Keyword { name, value }, vec![value])
            }
            None => (ExprKind::Other, self.lower_named_children(parsed, node)),
        }
    }

    fn lower_splat(&mut self, parsed: &ParsedFile, node: TsNode) -> (ExprKind, Vec<NodeId>) {
        // `**kwargs` counts as a nameless keyword, mirroring Python's AST
        let children = self.lower_named_children(parsed, node);
        if let [value] = *children.as_slice() {
            return (ExprKind::Keyword { name: None, value }, children);
        }
        (ExprKind::Other, children)
    }

    fn lower_named_children(&mut self, parsed: &ParsedFile, node: TsNode) -> Vec<NodeId> {
        let mut cursor = node.walk();
        let ts_children: Vec<TsNode> = node.named_children(&mut cursor).collect();
        ts_children
            .into_iter()
            .map(|child| self.lower(parsed, child))
            .collect()
    }
}
