//! The rule abstraction.

use serde::de::DeserializeOwned;
use tvlint_ast::{SyntaxNode, SyntaxTree};
use tvlint_parser::FileKind;

use crate::{Diagnostic, Edit, Highlight, RuleError, Severity};

static NO_OPTIONS: serde_json::Value = serde_json::Value::Null;

/// Everything a rule may look at during one analysis pass.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    tree: &'a SyntaxTree<'a>,
    kind: FileKind,
    options: &'a serde_json::Value,
}

impl<'a> RuleContext<'a> {
    /// Creates a context without rule options.
    pub fn new(tree: &'a SyntaxTree<'a>, kind: FileKind) -> Self {
        Self {
            tree,
            kind,
            options: &NO_OPTIONS,
        }
    }

    /// Attaches rule options (a JSON object, or `null` for defaults).
    pub fn with_options(mut self, options: &'a serde_json::Value) -> Self {
        self.options = options;
        self
    }

    /// Root node of the tree.
    pub fn root(&self) -> SyntaxNode<'a> {
        self.tree.root()
    }

    /// The analyzed source text.
    pub fn source(&self) -> &'a str {
        self.tree.source()
    }

    /// The kind of file being analyzed.
    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Deserializes the rule's options, falling back to `T::default()` when
    /// none are configured.
    pub fn options<T>(&self, rule_id: &str) -> Result<T, RuleError>
    where
        T: DeserializeOwned + Default,
    {
        if self.options.is_null() {
            return Ok(T::default());
        }
        serde_json::from_value(self.options.clone())
            .map_err(|e| RuleError::invalid_options(rule_id, e.to_string()))
    }
}

/// What a rule produced for one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOutput {
    /// Positioned messages.
    pub diagnostics: Vec<Diagnostic>,
    /// Spans to mark.
    pub highlights: Vec<Highlight>,
    /// Proposed text replacements.
    pub edits: Vec<Edit>,
}

impl RuleOutput {
    /// Creates an empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the rule produced nothing.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty() && self.highlights.is_empty() && self.edits.is_empty()
    }
}

/// An independent analysis unit implementing one detection (and optionally
/// one fix) policy.
///
/// Rules are stateless: every call recomputes its result from the tree.
/// A node shape a rule does not expect is skipped, never reported as an
/// error.
pub trait Rule: Send + Sync {
    /// Stable identifier used in diagnostics and configuration.
    fn id(&self) -> &'static str;

    /// Severity the engine gives the rule's diagnostics unless configured
    /// otherwise.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// File kinds the rule runs on.
    fn file_kinds(&self) -> &'static [FileKind];

    /// Returns true if the rule runs on `kind`.
    fn applies_to(&self, kind: FileKind) -> bool {
        self.file_kinds().contains(&kind)
    }

    /// Analyzes one tree.
    fn check(&self, ctx: &RuleContext<'_>) -> Result<RuleOutput, RuleError>;
}
