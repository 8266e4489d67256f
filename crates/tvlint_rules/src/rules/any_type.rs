//! no-any-type rule: Disallow `any` annotations on parameters and variables.
//!
//! Compares the annotation text only, so `any[]`, `Array<any>` and aliases
//! of `any` are not reported.
//!
//! # Example
//!
//! ```ts
//! function f(value: any) {}   // flagged: `value: any`
//! let data: any = load();     // flagged: `any`
//! let list: any[] = [];       // not flagged
//! ```

use tvlint_parser::FileKind;

use super::{TS_ONLY, annotated_type, for_each_node};
use crate::{Diagnostic, Rule, RuleContext, RuleError, RuleOutput};

const RULE_ID: &str = "no-any-type";
const MESSAGE: &str = "use of type 'any' is forbidden";

/// Flags parameters and variable declarations annotated exactly `any`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyTypeRule;

impl Rule for AnyTypeRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn file_kinds(&self) -> &'static [FileKind] {
        TS_ONLY
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<RuleOutput, RuleError> {
        let mut output = RuleOutput::new();

        for_each_node(ctx.root(), |node| {
            let flagged = match node.kind() {
                // `x: any` reports the whole parameter.
                "required_parameter" | "optional_parameter" => node
                    .field("type")
                    .and_then(annotated_type)
                    .filter(|ty| ty.text() == "any")
                    .map(|_| node.span()),
                // `let x: any` and `catch (e: any)` report the type only.
                "variable_declarator" | "catch_clause" => node
                    .field("type")
                    .and_then(annotated_type)
                    .filter(|ty| ty.text() == "any")
                    .map(|ty| ty.span()),
                _ => None,
            };

            if let Some(span) = flagged {
                output
                    .diagnostics
                    .push(Diagnostic::new(RULE_ID, MESSAGE, span));
            }
        });

        Ok(output)
    }
}
