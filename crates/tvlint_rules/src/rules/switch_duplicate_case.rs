//! switch-duplicate-case rule: Disallow repeated case conditions.
//!
//! Conditions are compared by their source text, so `1` and `0x1` are
//! distinct. Every member of a duplicated group is reported, the first
//! occurrence included.

use std::collections::HashMap;

use tvlint_ast::SyntaxNode;
use tvlint_parser::FileKind;

use super::{TS_AND_TSX, for_each_node};
use crate::{Diagnostic, Rule, RuleContext, RuleError, RuleOutput, Severity};

const RULE_ID: &str = "switch-duplicate-case";

/// Warns on case clauses sharing a condition within one switch statement.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchDuplicateCaseRule;

impl Rule for SwitchDuplicateCaseRule {
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
            let Some(body) = node.field("body") else {
                return;
            };

            for group in group_conditions(body) {
                if group.len() < 2 {
                    continue;
                }
                for condition in group {
                    output.diagnostics.push(Diagnostic::new(
                        RULE_ID,
                        format!("duplicate case condition: '{}'", condition.text()),
                        condition.span(),
                    ));
                }
            }
        });

        Ok(output)
    }
}

/// Case conditions grouped by text, groups in order of first appearance.
fn group_conditions<'a>(body: SyntaxNode<'a>) -> Vec<Vec<SyntaxNode<'a>>> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<Vec<SyntaxNode<'a>>> = Vec::new();

    let conditions = body
        .named_children()
        .filter(|clause| clause.kind() == "switch_case")
        .filter_map(|clause| clause.field("value"));

    for condition in conditions {
        let slot = *index.entry(condition.text()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(condition);
    }

    groups
}
