pub mod python;
pub mod registry;

use std::fmt::Debug;

use crate::tree::annotate::ParentMap;
use crate::tree::SyntaxTree;
use crate::types::diagnostic::Diagnostic;

/// A single rule the analyzer can run.
///
/// Rules are pure: they inspect the lowered tree (and its parent links) and
/// return diagnostics. They hold no state between runs and never mutate
/// their input, so running a rule twice over the same tree yields the same
/// sequence.
pub trait Rule: Send + Sync + Debug {
    /// Stable identifier, used as the producer tag on diagnostics.
    fn id(&self) -> &'static str;

    /// Human-readable one-line description.
    fn name(&self) -> &'static str;

    /// Semantic version of the rule, for host framework registries.
    fn version(&self) -> &'static str {
        crate::VERSION
    }

    /// Evaluate the rule against one file's tree.
    ///
    /// Returns diagnostics in discovery order (may be empty).
    fn check(&self, tree: &SyntaxTree, parents: &ParentMap) -> Vec<Diagnostic>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct DummyRule;

    impl Rule for DummyRule {
        fn id(&self) -> &'static str {
            "dummy.rule"
        }
        fn name(&self) -> &'static str {
            "Dummy Rule"
        }
        fn check(&self, _tree: &SyntaxTree, _parents: &ParentMap) -> Vec<Diagnostic> {
            vec![]
        }
    }

    #[test]
    fn rule_trait_defaults() {
        let rule = DummyRule;
        assert_eq!(rule.id(), "dummy.rule");
        assert_eq!(rule.name(), "Dummy Rule");
        assert_eq!(rule.version(), crate::VERSION);
    }
}
