//! handler-naming rule: Handler-like names must start with `handle`.
//!
//! Any candidate identifier that contains `handle` (case-insensitive) but
//! does not start with it is reported, e.g. `onHandleClick` or
//! `clickHandler`. Candidates are taken from:
//!
//! - function names: declarations, overload signatures and named function
//!   expressions
//! - `const` binding names
//! - the called name of a call expression (`foo()` or `obj.foo()`)
//! - the constructed name of a `new` expression with arguments
//! - object properties whose value is a function expression
//! - method names, including interface and abstract method signatures
//!
//! Identifiers are read from the syntax tree, so comments and string
//! literals never match.

use tvlint_ast::{Span, SyntaxNode};
use tvlint_parser::FileKind;

use super::{TS_AND_TSX, for_each_node};
use crate::{Diagnostic, Rule, RuleContext, RuleError, RuleOutput};

const RULE_ID: &str = "handler-naming";
const MESSAGE: &str = "handler name must start with 'handle'";

/// Flags handler-like identifiers that do not start with `handle`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandlerNamingRule;

impl Rule for HandlerNamingRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn file_kinds(&self) -> &'static [FileKind] {
        TS_AND_TSX
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<RuleOutput, RuleError> {
        let mut output = RuleOutput::new();

        for_each_node(ctx.root(), |node| {
            let Some(ident) = candidate_identifier(node) else {
                return;
            };
            let (name, span) = strip_private_marker(ident);
            if is_misnamed_handler(name) {
                output
                    .diagnostics
                    .push(Diagnostic::new(RULE_ID, MESSAGE, span));
            }
        });

        Ok(output)
    }
}

/// The identifier `node` introduces or calls, if it has one of the checked shapes.
fn candidate_identifier<'a>(node: SyntaxNode<'a>) -> Option<SyntaxNode<'a>> {
    match node.kind() {
        "function_declaration"
        | "generator_function_declaration"
        | "function_signature"
        | "function_expression"
        | "function"
        | "generator_function"
        | "method_definition"
        | "method_signature"
        | "abstract_method_signature" => node.field("name"),
        "variable_declarator" => {
            let declaration = node.parent()?;
            let is_const = declaration.kind() == "lexical_declaration"
                && declaration.child_of_kind("const").is_some();
            node.field("name")
                .filter(|name| is_const && name.kind() == "identifier")
        }
        "call_expression" => called_name(node.field("function")?),
        "new_expression" => {
            node.field("arguments")?;
            called_name(node.field("constructor")?)
        }
        "pair" => {
            let value = node.field("value")?;
            if !matches!(value.kind(), "function_expression" | "function") {
                return None;
            }
            node.field("key")
                .filter(|key| key.kind() == "property_identifier")
        }
        _ => None,
    }
}

/// `foo` in `foo` or `obj.foo`.
fn called_name(callee: SyntaxNode<'_>) -> Option<SyntaxNode<'_>> {
    match callee.kind() {
        "identifier" => Some(callee),
        "member_expression" => callee.field("property"),
        _ => None,
    }
}

/// Drops the `#` of a private name from both the text and the span.
fn strip_private_marker(ident: SyntaxNode<'_>) -> (&str, Span) {
    let span = ident.span();
    match ident.text().strip_prefix('#') {
        Some(name) => (name, Span::new(span.start + 1, span.end)),
        None => (ident.text(), span),
    }
}

fn is_misnamed_handler(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.contains("handle") && !lower.starts_with("handle")
}
