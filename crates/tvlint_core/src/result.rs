//! Analysis result types.

use serde::{Deserialize, Serialize};
use tvlint_rules::{Diagnostic, Edit, Highlight};

/// Output of one analysis pass.
///
/// Each list keeps the engine's rule order, and within one rule the order
/// the rule reported in. Nothing is deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Positioned messages.
    pub diagnostics: Vec<Diagnostic>,
    /// Spans to mark.
    pub highlights: Vec<Highlight>,
    /// Proposed, non-overlapping replacements.
    pub edits: Vec<Edit>,
}

impl AnalysisResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty() && self.highlights.is_empty() && self.edits.is_empty()
    }

    /// Returns the first diagnostic whose span contains `offset`.
    pub fn diagnostic_at(&self, offset: u32) -> Option<&Diagnostic> {
        self.diagnostics.iter().find(|d| d.span.contains(offset))
    }

    /// Returns true if any diagnostic has error severity.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == tvlint_rules::Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tvlint_ast::Span;
    use tvlint_rules::Severity;

    #[test]
    fn test_empty() {
        let result = AnalysisResult::new();
        assert!(result.is_empty());
        assert!(!result.has_errors());
        assert!(result.diagnostic_at(0).is_none());
    }

    #[test]
    fn test_diagnostic_at() {
        let result = AnalysisResult {
            diagnostics: vec![
                Diagnostic::new("a", "first", Span::new(0, 6)).with_severity(Severity::Warning),
                Diagnostic::new("b", "second", Span::new(4, 10)),
            ],
            ..Default::default()
        };

        assert_eq!(result.diagnostic_at(5).map(|d| d.rule_id.as_str()), Some("a"));
        assert_eq!(result.diagnostic_at(6).map(|d| d.rule_id.as_str()), Some("b"));
        assert!(result.diagnostic_at(10).is_none());
        assert!(result.has_errors());
    }

    #[test]
    fn test_highlight_only_is_not_empty() {
        let result = AnalysisResult {
            highlights: vec![Highlight::new("react-map-key", Span::new(6, 9))],
            ..Default::default()
        };
        assert!(!result.is_empty());
        assert!(!result.has_errors());
    }
}
