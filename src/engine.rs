use tracing::debug;

use crate::error::{AnalysisError, ParseError};
use crate::parse::ast::{FileId, ParsedFile};
use crate::parse::python::parse_python_file;
use crate::rules::registry::RuleRegistry;
use crate::tree::annotate::annotate;
use crate::tree::SyntaxTree;
use crate::types::context::SourceFile;
use crate::types::diagnostic::Diagnostic;

/// Runs the registered rules over one file at a time.
///
/// Stateless between calls: each invocation lowers its own tree, builds its
/// own parent map, and returns an independent diagnostic list. Concurrent use
/// across independent files needs no synchronization.
#[derive(Debug, Default)]
pub struct Analyzer {
    registry: RuleRegistry,
}

impl Analyzer {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Convenience constructor with all built-in rules.
    pub fn with_builtin_rules() -> Self {
        Self::new(RuleRegistry::with_builtin_rules())
    }

    pub fn rules(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Parse and analyze a single source file.
    pub fn analyze_source(&self, sf: &SourceFile) -> Result<Vec<Diagnostic>, AnalysisError> {
        let parsed =
            parse_python_file(FileId(0), sf).map_err(|source| ParseError::File {
                file_path: sf.path.clone(),
                source,
            })?;
        self.analyze_parsed(&parsed)
    }

    /// Analyze an already-parsed file.
    ///
    /// Lowers the tree, records parent links, then runs every registered rule
    /// in order, concatenating their diagnostics.
    pub fn analyze_parsed(&self, parsed: &ParsedFile) -> Result<Vec<Diagnostic>, AnalysisError> {
        let tree = SyntaxTree::from_parsed(parsed);
        let parents = annotate(&tree);

        let mut diagnostics = Vec::new();
        for rule in self.registry.all() {
            diagnostics.extend(rule.check(&tree, &parents));
        }

        debug!(
            path = %tree.path(),
            rules = self.registry.all().len(),
            diagnostics = diagnostics.len(),
            "analyzed file"
        );
        Ok(diagnostics)
    }
}
