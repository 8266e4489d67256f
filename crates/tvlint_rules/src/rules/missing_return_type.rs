//! explicit-return-type rule: Require a return type on functions that return.
//!
//! A declaration is reported when it has no return type annotation and its
//! body contains a `return` statement. Constructors and accessors are not
//! checked.
//!
//! # Configuration
//!
//! | Option | Type | Default | Description |
//! |--------|------|---------|-------------|
//! | nested_functions | boolean | false | Also count `return`s inside nested functions, arrows and classes |

use serde::Deserialize;
use tvlint_ast::{SyntaxNode, any_node};
use tvlint_parser::FileKind;

use super::{
    FUNCTION_DECLARATIONS, TS_ONLY, for_each_node, is_constructor_or_accessor,
    is_function_boundary,
};
use crate::{Diagnostic, Rule, RuleContext, RuleError, RuleOutput};

const RULE_ID: &str = "explicit-return-type";
const MESSAGE: &str = "missing explicit return type";

/// Configuration for the explicit-return-type rule.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Config {
    /// Search for `return` through nested function scopes.
    nested_functions: bool,
}

/// Flags functions and methods that return a value without a declared type.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingReturnTypeRule;

impl Rule for MissingReturnTypeRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn file_kinds(&self) -> &'static [FileKind] {
        TS_ONLY
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<RuleOutput, RuleError> {
        let config: Config = ctx.options(RULE_ID)?;
        let mut output = RuleOutput::new();

        for_each_node(ctx.root(), |node| {
            if !FUNCTION_DECLARATIONS.contains(&node.kind()) || is_constructor_or_accessor(node) {
                return;
            }
            if node.field("return_type").is_some() {
                return;
            }
            let Some(name) = node.field("name") else {
                return;
            };
            if contains_return(node, config.nested_functions) {
                output
                    .diagnostics
                    .push(Diagnostic::new(RULE_ID, MESSAGE, name.span()));
            }
        });

        Ok(output)
    }
}

fn contains_return(declaration: SyntaxNode<'_>, nested_functions: bool) -> bool {
    let is_return = |n: SyntaxNode<'_>| n.kind() == "return_statement";

    if nested_functions {
        return any_node(declaration, is_return, |_| true);
    }
    let Some(body) = declaration.field("body") else {
        return false;
    };
    any_node(body, is_return, |n| !is_function_boundary(n))
}
