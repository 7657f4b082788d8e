use serde::{Deserialize, Serialize};

/// A single finding produced by a rule.
///
/// Immutable once created; the analyzer hands the ordered list straight back
/// to the caller. `rule_id` identifies the producing rule so host frameworks
/// can group, filter, or suppress by rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The ID of the rule that produced this.
    pub rule_id: String,

    /// Path of the file this was found in.
    pub file_path: String,

    /// Line number, 1-based (Python `ast` convention).
    pub line: u32,

    /// Column offset, 0-based (Python `ast` convention).
    pub column: u32,

    /// Human-readable message, prefixed with the rule's short code.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Diagnostic {
        Diagnostic {
            rule_id: "python.http.deprecated_callback".to_string(),
            file_path: "handler.py".to_string(),
            line: 4,
            column: 0,
            message: "NOC101 Callbacks are deprecated. Use coroutines instead of callbacks."
                .to_string(),
        }
    }

    #[test]
    fn diagnostic_equality() {
        assert_eq!(sample(), sample());

        let mut other = sample();
        other.line = 5;
        assert_ne!(sample(), other);
    }

    #[test]
    fn diagnostic_round_trips_through_json() {
        let diag = sample();
        let json = serde_json::to_string(&diag).unwrap();
        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(diag, back);
    }

    #[test]
    fn diagnostic_json_has_expected_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["line"], 4);
        assert_eq!(json["column"], 0);
        assert!(json["message"].as_str().unwrap().starts_with("NOC101"));
    }
}
