use std::sync::Arc;

use crate::rules::python::DeprecatedCallbackRule;
use crate::rules::Rule;

/// Holds the rules an [`crate::Analyzer`] runs, in registration order.
///
/// Host frameworks that manage rule sets themselves can start from
/// [`RuleRegistry::new`] and register their own selection.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: Vec<Arc<dyn Rule>>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules registered.
    pub fn with_builtin_rules() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(DeprecatedCallbackRule::new()));
        registry
    }

    /// Register a rule. Later registrations run later.
    pub fn register(&mut self, rule: Arc<dyn Rule>) {
        self.rules.push(rule);
    }

    /// All registered rules, in registration order.
    pub fn all(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }

    /// Look up a rule by its stable ID.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Rule>> {
        self.rules.iter().find(|r| r.id() == id).cloned()
    }

    /// Build a registry containing only the rules with the given IDs.
    ///
    /// IDs not present in this registry are silently ignored.
    pub fn filter_by_ids(&self, ids: &[String]) -> RuleRegistry {
        let rules = self
            .rules
            .iter()
            .filter(|r| ids.iter().any(|id| id == r.id()))
            .cloned()
            .collect();
        RuleRegistry { rules }
    }
}
