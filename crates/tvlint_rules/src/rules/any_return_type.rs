//! no-any-return-type rule: Disallow `any` as a declared return type.

use tvlint_parser::FileKind;

use super::{
    FUNCTION_DECLARATIONS, TS_ONLY, for_each_node, is_any_annotation, is_constructor_or_accessor,
};
use crate::{Diagnostic, Rule, RuleContext, RuleError, RuleOutput};

const RULE_ID: &str = "no-any-return-type";
const MESSAGE: &str = "return type 'any' is forbidden";

/// Overload and abstract signatures declare return types without a body.
const SIGNATURES: &[&str] = &["function_signature", "abstract_method_signature"];

/// Flags function and method declarations whose return type is exactly `any`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyReturnTypeRule;

impl Rule for AnyReturnTypeRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn file_kinds(&self) -> &'static [FileKind] {
        TS_ONLY
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<RuleOutput, RuleError> {
        let mut output = RuleOutput::new();

        for_each_node(ctx.root(), |node| {
            let kind = node.kind();
            if !FUNCTION_DECLARATIONS.contains(&kind) && !SIGNATURES.contains(&kind) {
                return;
            }
            if is_constructor_or_accessor(node) {
                return;
            }
            let returns_any = node.field("return_type").is_some_and(is_any_annotation);
            if let (true, Some(name)) = (returns_any, node.field("name")) {
                output
                    .diagnostics
                    .push(Diagnostic::new(RULE_ID, MESSAGE, name.span()));
            }
        });

        Ok(output)
    }
}
