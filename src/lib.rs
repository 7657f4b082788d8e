//! # callback-lint
//!
//! Static analysis for Python source that flags HTTP client calls passing a
//! deprecated callback argument.
//!
//! The analysis is purely syntactic: it looks for call expressions whose
//! callee is an attribute access naming one of the legacy HTTP-verb methods
//! (`get_url`, `post_url`, `put_url`, `delete_url`) and which pass a callback
//! either as the 10th positional argument or as a keyword argument named
//! `callback`. Each match is reported as a [`Diagnostic`] at the call's own
//! line and column.
//!
//! Pipeline:
//!
//! - **Parsing**: tree-sitter based parsing of Python source (the parser is an
//!   external collaborator; this crate only adapts its output)
//! - **Lowering**: the tree-sitter tree is lowered once per run into an
//!   arena-backed [`SyntaxTree`] with a closed set of expression shapes
//! - **Annotation**: a one-pass [`ParentMap`] records each node's parent
//! - **Rules**: a pre-order traversal applies the matcher at every call node
//!
//! ## Example
//!
//! ```rust,ignore
//! use callback_lint::{Analyzer, SourceFile};
//!
//! let analyzer = Analyzer::with_builtin_rules();
//! let source = SourceFile {
//!     path: "handler.py".to_string(),
//!     content: "self.get_url('http://api', '/v1', callback=cb)".to_string(),
//! };
//! let diagnostics = analyzer.analyze_source(&source)?;
//! ```

pub mod engine;
pub mod error;
pub mod parse;
pub mod rules;
pub mod tree;
pub mod types;

// Re-export commonly used types for convenience
pub use engine::Analyzer;
pub use error::{AnalysisError, ParseError};
pub use parse::ast::{FileId, ParsedFile};
pub use rules::registry::RuleRegistry;
pub use rules::Rule;
pub use tree::annotate::{annotate, ParentMap};
pub use tree::{ExprKind, NodeId, SyntaxNode, SyntaxTree};
pub use types::context::SourceFile;
pub use types::diagnostic::Diagnostic;

/// Stable identity of this rule set, consumed by host framework registries.
pub const RULE_SET_NAME: &str = "callback-lint";

/// Semantic version exposed alongside the rule set name.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_metadata_is_stable() {
        assert_eq!(RULE_SET_NAME, "callback-lint");
        assert_eq!(VERSION, "0.0.1");
    }
}
