use crate::rules::Rule;
use crate::tree::annotate::ParentMap;
use crate::tree::{ExprKind, NodeId, SyntaxTree};
use crate::types::diagnostic::Diagnostic;

/// Methods of the legacy HTTP client whose callback arguments are deprecated.
const HTTP_METHODS: [&str; 4] = ["get_url", "post_url", "put_url", "delete_url"];

/// The legacy method signatures place the callback in the 10th positional
/// slot. Any call with 10+ positional arguments where this slot is a bare
/// identifier is treated as passing a callback, whatever the identifier
/// actually means; the check is syntactic on purpose.
const CALLBACK_ARG_INDEX: usize = 9;

/// Message attached to every finding. The NOC101 code is the stable
/// identifier consumers filter and suppress by.
pub const NOC101: &str =
    "NOC101 Callbacks are deprecated. Use coroutines instead of callbacks.";

/// Rule: deprecated callback passed to an HTTP-verb method
///
/// Flags calls like `self.get_url(host, path, callback=cb)` and calls that
/// pass the callback positionally in the legacy 10th slot:
///
/// ```python
/// self.get_url(
///     host, uri, name, data, headers, follow_redirects, connect_timeout,
///     request_timeout, max_timeout_tries, callback
/// )
/// ```
///
/// Matching is purely syntactic: the callee must be an attribute access whose
/// accessed name is one of the four HTTP-verb methods; whether the receiver
/// really is an HTTP client instance is not resolved.
#[derive(Debug)]
pub struct DeprecatedCallbackRule;

impl DeprecatedCallbackRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DeprecatedCallbackRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for DeprecatedCallbackRule {
    fn id(&self) -> &'static str {
        "python.http.deprecated_callback"
    }

    fn name(&self) -> &'static str {
        "Detects HTTP client calls that pass a deprecated callback argument."
    }

    fn check(&self, tree: &SyntaxTree, _parents: &ParentMap) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        self.collect(tree, tree.root(), &mut diagnostics);
        diagnostics
    }
}

impl DeprecatedCallbackRule {
    /// Pre-order walk: the current node is checked before its children, so
    /// outer calls are reported before calls nested inside their arguments.
    /// Nested matches are independent; nothing is suppressed or merged.
    fn collect(&self, tree: &SyntaxTree, id: NodeId, out: &mut Vec<Diagnostic>) {
        let node = tree.node(id);
        if is_flagged_call(tree, id) {
            tracing::trace!(line = node.line, column = node.column, "flagged call");
            out.push(Diagnostic {
                rule_id: self.id().to_string(),
                file_path: tree.path().to_string(),
                line: node.line,
                column: node.column,
                message: NOC101.to_string(),
            });
        }
        for &child in &node.children {
            self.collect(tree, child, out);
        }
    }
}

/// Does this node match the "callback passed to an HTTP-verb method" pattern?
///
/// Pure predicate; returns false for anything that is not a call whose callee
/// is an attribute access naming one of the four methods, without inspecting
/// arguments.
pub fn is_flagged_call(tree: &SyntaxTree, id: NodeId) -> bool {
    let ExprKind::Call {
        callee,
        args,
        keywords,
    } = &tree.node(id).kind
    else {
        return false;
    };

    let ExprKind::Attribute { attr, .. } = &tree.node(*callee).kind else {
        return false;
    };
    if !HTTP_METHODS.contains(&attr.as_str()) {
        return false;
    }

    has_callback_as_arg_or_keyword(tree, args, keywords)
}

fn has_callback_as_arg_or_keyword(tree: &SyntaxTree, args: &[NodeId], keywords: &[NodeId]) -> bool {
    if args.len() > CALLBACK_ARG_INDEX
        && matches!(
            tree.node(args[CALLBACK_ARG_INDEX]).kind,
            ExprKind::Name { .. }
        )
    {
        return true;
    }

    keywords.iter().any(|&kw| {
        matches!(
            &tree.node(kw).kind,
            ExprKind::Keyword { name: Some(name), .. } if name == "callback"
        )
    })
}
