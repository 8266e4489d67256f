//! Built-in rules.

mod any_return_type;
mod any_type;
mod handler_naming;
mod import_path;
mod missing_return_type;
mod react_map_key;
mod switch_default;
mod switch_duplicate_case;

pub use any_return_type::AnyReturnTypeRule;
pub use any_type::AnyTypeRule;
pub use handler_naming::HandlerNamingRule;
pub use import_path::ImportPathRule;
pub use missing_return_type::MissingReturnTypeRule;
pub use react_map_key::ReactMapKeyRule;
pub use switch_default::SwitchDefaultRule;
pub use switch_duplicate_case::SwitchDuplicateCaseRule;

use std::ops::ControlFlow;

use tvlint_ast::{SyntaxNode, VisitResult, Visitor, walk_tree};
use tvlint_parser::FileKind;

use crate::Rule;

pub(crate) const TS_ONLY: &[FileKind] = &[FileKind::Ts];
pub(crate) const TSX_ONLY: &[FileKind] = &[FileKind::Tsx];
pub(crate) const TS_AND_TSX: &[FileKind] = &[FileKind::Ts, FileKind::Tsx];

/// Declarations that carry a name, an optional return type and a body.
pub(crate) const FUNCTION_DECLARATIONS: &[&str] = &[
    "function_declaration",
    "generator_function_declaration",
    "method_definition",
];

/// Nodes that open a new function scope (or a class holding such scopes).
const FUNCTION_BOUNDARIES: &[&str] = &[
    "function_declaration",
    "generator_function_declaration",
    "function_expression",
    "function",
    "generator_function",
    "arrow_function",
    "method_definition",
    "class_declaration",
    "abstract_class_declaration",
    "class",
];

/// Every built-in rule in engine order.
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(AnyTypeRule),
        Box::new(MissingReturnTypeRule),
        Box::new(AnyReturnTypeRule),
        Box::new(ImportPathRule),
        Box::new(HandlerNamingRule),
        Box::new(ReactMapKeyRule),
        Box::new(SwitchDuplicateCaseRule),
        Box::new(SwitchDefaultRule),
    ]
}

/// Calls `f` for every node under `root`, in document order.
pub(crate) fn for_each_node<'a>(root: SyntaxNode<'a>, f: impl FnMut(SyntaxNode<'a>)) {
    struct EachNode<F>(F);

    impl<'a, F: FnMut(SyntaxNode<'a>)> Visitor<'a> for EachNode<F> {
        fn enter_node(&mut self, node: SyntaxNode<'a>) -> VisitResult {
            (self.0)(node);
            ControlFlow::Continue(())
        }
    }

    let _ = walk_tree(&mut EachNode(f), root);
}

/// The type inside a `: T` annotation.
///
/// Returns `None` for predicate (`x is T`) and assertion annotations.
pub(crate) fn annotated_type<'a>(annotation: SyntaxNode<'a>) -> Option<SyntaxNode<'a>> {
    if annotation.kind() != "type_annotation" {
        return None;
    }
    annotation.first_named_child()
}

/// Returns true if `annotation` is exactly `: any`.
pub(crate) fn is_any_annotation(annotation: SyntaxNode<'_>) -> bool {
    annotated_type(annotation).is_some_and(|ty| ty.text() == "any")
}

/// Returns true for a `constructor` or a `get`/`set` accessor.
///
/// These are method nodes, but the return-type rules only check ordinary
/// methods.
pub(crate) fn is_constructor_or_accessor(node: SyntaxNode<'_>) -> bool {
    if !matches!(node.kind(), "method_definition" | "abstract_method_signature") {
        return false;
    }
    node.field("name")
        .is_some_and(|name| name.text() == "constructor")
        || node.child_of_kind("get").is_some()
        || node.child_of_kind("set").is_some()
}

/// Returns true if the node starts a nested function scope.
pub(crate) fn is_function_boundary(node: SyntaxNode<'_>) -> bool {
    FUNCTION_BOUNDARIES.contains(&node.kind())
}

/// Strips one pair of matching quotes from a string literal.
pub(crate) fn unquote(literal: &str) -> Option<&str> {
    let bytes = literal.as_bytes();
    let (&first, &last) = (bytes.first()?, bytes.last()?);
    if literal.len() >= 2 && first == last && matches!(first, b'"' | b'\'') {
        Some(&literal[1..literal.len() - 1])
    } else {
        None
    }
}
