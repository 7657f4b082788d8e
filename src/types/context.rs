use serde::{Deserialize, Serialize};

/// A single source file handed to the analyzer.
///
/// The caller owns reading the file from disk (or wherever it lives);
/// the analyzer only ever sees path + content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path as the caller wants it reported in diagnostics.
    pub path: String,

    /// Full UTF-8 source text.
    pub content: String,
}
