use thiserror::Error;

/// Top-level error type exposed by the analyzer.
///
/// This is what bubbles out to host frameworks embedding the rule.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("parsing error: {0}")]
    Parse(#[from] ParseError),

    /// "Catch-all" for unexpected internal failures.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Errors that occur while parsing individual files.
///
/// The analysis core itself cannot fail: it performs no I/O and degrades
/// gracefully on unexpected node shapes. Parsing is the only fallible step.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse {file_path}: {source}")]
    File {
        file_path: String,
        #[source]
        source: anyhow::Error,
    },
}
