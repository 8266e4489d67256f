//! switch-default rule: Every switch statement needs a `default` clause.

use tvlint_parser::FileKind;

use super::{TS_AND_TSX, for_each_node};
use crate::{Diagnostic, Rule, RuleContext, RuleError, RuleOutput, Severity};

const RULE_ID: &str = "switch-default";
const MESSAGE: &str = "switch statement is missing a default case";

/// Warns on switch statements without a `default` clause.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchDefaultRule;

impl Rule for SwitchDefaultRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn file_kinds(&self) -> &'static [FileKind] {
        TS_AND_TSX
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<RuleOutput, RuleError> {
        let mut output = RuleOutput::new();

        for_each_node(ctx.root(), |node| {
            if node.kind() != "switch_statement" {
                return;
            }
            let has_default = node
                .field("body")
                .is_some_and(|body| body.named_children().any(|c| c.kind() == "switch_default"));
            if has_default {
                return;
            }
            if let Some(keyword) = node.child_of_kind("switch") {
                output
                    .diagnostics
                    .push(Diagnostic::new(RULE_ID, MESSAGE, keyword.span()));
            }
        });

        Ok(output)
    }
}
