//! Helpers shared by rule tests.

use tvlint_parser::{FileKind, Parser, parser_for};

use crate::{Rule, RuleContext, RuleOutput};

/// Parses `source` as `kind` and runs one rule on it.
pub fn run_rule(rule: &dyn Rule, source: &str, kind: FileKind) -> RuleOutput {
    run_rule_with_options(rule, source, kind, &serde_json::Value::Null)
}

/// Same as [`run_rule`], with explicit rule options.
pub fn run_rule_with_options(
    rule: &dyn Rule,
    source: &str,
    kind: FileKind,
    options: &serde_json::Value,
) -> RuleOutput {
    let tree = parser_for(kind)
        .parse(source)
        .unwrap_or_else(|e| panic!("failed to parse test source: {e}\n{source}"));
    let ctx = RuleContext::new(&tree, kind).with_options(options);
    rule.check(&ctx).expect("rule should not fail")
}

/// Source text covered by each diagnostic, in output order.
pub fn flagged<'s>(source: &'s str, output: &RuleOutput) -> Vec<&'s str> {
    output
        .diagnostics
        .iter()
        .map(|d| d.span.slice(source).unwrap_or_default())
        .collect()
}
