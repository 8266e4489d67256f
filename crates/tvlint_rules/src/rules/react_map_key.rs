//! react-map-key rule: JSX returned from `.map` callbacks needs a `key`.
//!
//! Reports through a highlight on the `map` token only; no diagnostic text
//! is produced.
//!
//! A callback's returned JSX is found in two ways:
//!
//! - block body: the last statement must be `return <jsx>`
//! - expression body (arrows): the body itself
//!
//! Callbacks that return something other than a JSX element are not
//! inspected. Fragments (`<>…</>`) cannot take a `key` and are skipped.

use tvlint_ast::SyntaxNode;
use tvlint_parser::FileKind;

use super::{TSX_ONLY, for_each_node};
use crate::{Highlight, Rule, RuleContext, RuleError, RuleOutput};

const RULE_ID: &str = "react-map-key";

/// Highlights `.map` calls whose JSX callbacks omit `key`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactMapKeyRule;

impl Rule for ReactMapKeyRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn file_kinds(&self) -> &'static [FileKind] {
        TSX_ONLY
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<RuleOutput, RuleError> {
        let mut output = RuleOutput::new();

        for_each_node(ctx.root(), |node| {
            if node.kind() != "call_expression" {
                return;
            }
            let Some(property) = map_property(node) else {
                return;
            };
            let Some(arguments) = node.field("arguments") else {
                return;
            };

            let returned: Vec<_> = arguments
                .named_children()
                .filter_map(returned_jsx)
                .collect();
            if !returned.is_empty() && !returned.iter().any(|jsx| has_key_attribute(*jsx)) {
                output
                    .highlights
                    .push(Highlight::new(RULE_ID, property.span()));
            }
        });

        Ok(output)
    }
}

/// The `map` token of an `<expr>.map(...)` call.
fn map_property<'a>(call: SyntaxNode<'a>) -> Option<SyntaxNode<'a>> {
    let callee = call.field("function")?;
    if callee.kind() != "member_expression" {
        return None;
    }
    callee.field("property").filter(|p| p.text() == "map")
}

/// The JSX element a callback returns, if it returns one.
fn returned_jsx<'a>(callback: SyntaxNode<'a>) -> Option<SyntaxNode<'a>> {
    if !matches!(
        callback.kind(),
        "arrow_function" | "function_expression" | "function"
    ) {
        return None;
    }
    let body = callback.field("body")?;
    let value = if body.kind() == "statement_block" {
        let last = body.last_named_child()?;
        if last.kind() != "return_statement" {
            return None;
        }
        last.first_named_child()?
    } else {
        body
    };

    let value = unwrap_parens(value);
    match value.kind() {
        "jsx_element" if !is_fragment(value) => Some(value),
        "jsx_self_closing_element" => Some(value),
        _ => None,
    }
}

/// `<>…</>`, whose opening tag has no name.
fn is_fragment(element: SyntaxNode<'_>) -> bool {
    element
        .field("open_tag")
        .is_some_and(|tag| tag.field("name").is_none())
}

fn unwrap_parens(mut node: SyntaxNode<'_>) -> SyntaxNode<'_> {
    while node.kind() == "parenthesized_expression" {
        match node.first_named_child() {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

/// Whether the element's own attribute list (not its children's) has `key`.
fn has_key_attribute(jsx: SyntaxNode<'_>) -> bool {
    let tag = if jsx.kind() == "jsx_element" {
        match jsx.field("open_tag") {
            Some(tag) => tag,
            None => return false,
        }
    } else {
        jsx
    };

    tag.named_children()
        .filter(|attr| attr.kind() == "jsx_attribute")
        .filter_map(|attr| attr.first_named_child())
        .any(|name| name.text() == "key")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::run_rule;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn highlighted(source: &str) -> Vec<&str> {
        let output = run_rule(&ReactMapKeyRule, source, FileKind::Tsx);
        assert!(output.diagnostics.is_empty());
        output
            .highlights
            .iter()
            .map(|h| h.span.slice(source).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_keyed_expression_body() {
        assert!(highlighted("items.map(i => <li key={i.id}>{i.name}</li>);").is_empty());
    }

    #[test]
    fn test_block_body_without_key() {
        let source = "items.map(i => { return <li>{i.name}</li>; });";
        let output = run_rule(&ReactMapKeyRule, source, FileKind::Tsx);

        assert_eq!(output.highlights.len(), 1);
        let span = output.highlights[0].span;
        assert_eq!(span.slice(source), Some("map"));
        assert_eq!(span.start, 6);
    }

    #[rstest]
    #[case("items.map(i => <li>{i}</li>);")]
    #[case("items.map(i => (<li>{i}</li>));")]
    #[case("items.map(i => <Item value={i} />);")]
    #[case("items.map(function (i) { return <li>{i}</li>; });")]
    #[case("items.map((i) => {\n  const label = i.name;\n  return (\n    <li>{label}</li>\n  );\n});")]
    fn test_missing_key(#[case] source: &str) {
        assert_eq!(highlighted(source), vec!["map"]);
    }

    #[rstest]
    #[case("items.map(i => <Item key={i} />);")]
    #[case("items.map(i => { return <li key={i}>{i}</li>; });")]
    #[case("items.map(i => i * 2);")]
    #[case("items.map(i => { if (i) { return <li>{i}</li>; } log(i); });")]
    #[case("items.forEach(i => <li>{i}</li>);")]
    #[case("items.map(render);")]
    #[case("items.map(i => <></>);")]
    #[case("items.map(i => { return <>{i}</>; });")]
    fn test_not_highlighted(#[case] source: &str) {
        assert!(highlighted(source).is_empty(), "{source}");
    }

    #[test]
    fn test_key_on_child_does_not_count() {
        let source = "items.map(i => <ul><li key={i}>{i}</li></ul>);";
        assert_eq!(highlighted(source), vec!["map"]);
    }

    #[test]
    fn test_nested_maps() {
        let source = "rows.map(r => <tr key={r.id}>{r.cells.map(c => <td>{c}</td>)}</tr>);";
        assert_eq!(highlighted(source), vec!["map"]);
        let output = run_rule(&ReactMapKeyRule, source, FileKind::Tsx);
        assert_eq!(output.highlights[0].span.start as usize, source.rfind("map").unwrap());
    }
}
