//! Diagnostic types for analysis results.

use serde::{Deserialize, Serialize};
use tvlint_ast::{Location, Span};

/// Severity level for diagnostics.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    #[default]
    Error,
    /// Warning - should be reviewed.
    Warning,
}

impl Severity {
    /// Parses a configured severity name. `"off"` and unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "error" => Some(Self::Error),
            "warning" | "warn" => Some(Self::Warning),
            _ => None,
        }
    }
}

/// A diagnostic message from a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The rule that generated this diagnostic.
    pub rule_id: String,

    /// The diagnostic message.
    pub message: String,

    /// Byte span in the source.
    pub span: Span,

    /// Line/column location, filled in by the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    ///
    /// The severity starts as `Error`; the engine sets the final value from
    /// the rule's default or the configured override.
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>, span: Span) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            span,
            loc: None,
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, loc: Location) -> Self {
        self.loc = Some(loc);
        self
    }
}

/// A span to mark visually, with or without an accompanying diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Highlight {
    /// The rule that requested the highlight.
    pub rule_id: String,

    /// Byte span in the source.
    pub span: Span,
}

impl Highlight {
    /// Creates a new highlight.
    pub fn new(rule_id: impl Into<String>, span: Span) -> Self {
        Self {
            rule_id: rule_id.into(),
            span,
        }
    }
}

/// A textual replacement of `text[span.start..span.end]` with `new_text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edit {
    /// The byte span to replace.
    pub span: Span,

    /// The replacement text.
    pub new_text: String,
}

impl Edit {
    /// Creates a new edit.
    pub fn new(span: Span, new_text: impl Into<String>) -> Self {
        Self {
            span,
            new_text: new_text.into(),
        }
    }

    /// Creates an edit that inserts text at an offset.
    pub fn insert(offset: u32, new_text: impl Into<String>) -> Self {
        Self::new(Span::new(offset, offset), new_text)
    }

    /// Creates an edit that deletes a span.
    pub fn delete(span: Span) -> Self {
        Self::new(span, String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tvlint_ast::Position;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new("no-any-type", "use of type 'any' is forbidden", Span::new(0, 3));

        assert_eq!(diag.rule_id, "no-any-type");
        assert_eq!(diag.severity, Severity::Error);
        assert!(diag.loc.is_none());
    }

    #[test]
    fn test_diagnostic_with_severity() {
        let diag = Diagnostic::new("switch-default", "msg", Span::new(0, 6))
            .with_severity(Severity::Warning);
        assert_eq!(diag.severity, Severity::Warning);
    }

    #[test]
    fn test_diagnostic_with_location() {
        let loc = Location::new(Position::new(0, 1), Position::new(0, 10));
        let diag = Diagnostic::new("rule", "message", Span::new(1, 10)).with_location(loc);

        assert_eq!(diag.loc, Some(loc));
    }

    #[test]
    fn test_severity_from_name() {
        assert_eq!(Severity::from_name("error"), Some(Severity::Error));
        assert_eq!(Severity::from_name("warning"), Some(Severity::Warning));
        assert_eq!(Severity::from_name("off"), None);
    }

    #[test]
    fn test_severity_serialization() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }

    #[test]
    fn test_edit_constructors() {
        let insert = Edit::insert(10, "./");
        assert_eq!(insert.span, Span::new(10, 10));

        let delete = Edit::delete(Span::new(5, 15));
        assert!(delete.new_text.is_empty());
    }

    #[test]
    fn test_diagnostic_deserialization_defaults_severity() {
        let json = r#"{
            "rule_id": "handler-naming",
            "message": "handler name must start with 'handle'",
            "span": { "start": 0, "end": 4 }
        }"#;

        let diag: Diagnostic = serde_json::from_str(json).unwrap();
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.span, Span::new(0, 4));
    }

    #[test]
    fn test_diagnostics_are_not_deduplicated_by_equality_of_span() {
        let a = Diagnostic::new("rule-a", "msg", Span::new(0, 4));
        let b = Diagnostic::new("rule-b", "msg", Span::new(0, 4));
        assert_ne!(a, b);
    }
}
