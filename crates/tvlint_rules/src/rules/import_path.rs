//! import-folder-path rule: Imports should reference folders, not files.
//!
//! Two independent checks run on every import specifier:
//!
//! - A relative specifier that ends in a file extension, has more than two
//!   `/`-separated segments and does not go through `/components/` is
//!   reported.
//! - A specifier starting with `../` gets an edit prefixing it with `./`.
//!   The rewrite is textual (`../x` becomes `./../x`); once applied, the
//!   specifier no longer starts with `../` and is left alone.
//!
//! Stylesheet imports (`.scss`) are skipped.

use tvlint_ast::{Span, SyntaxNode};
use tvlint_parser::FileKind;

use super::{TS_AND_TSX, for_each_node, unquote};
use crate::{Diagnostic, Edit, Rule, RuleContext, RuleError, RuleOutput};

const RULE_ID: &str = "import-folder-path";

/// Flags file imports and rewrites parent-relative specifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportPathRule;

impl Rule for ImportPathRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn file_kinds(&self) -> &'static [FileKind] {
        TS_AND_TSX
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<RuleOutput, RuleError> {
        let mut output = RuleOutput::new();

        for_each_node(ctx.root(), |node| {
            if node.kind() != "import_statement" {
                return;
            }
            if let Some(literal) = node.field("source") {
                check_specifier(literal, &mut output);
            }
        });

        Ok(output)
    }
}

fn check_specifier(literal: SyntaxNode<'_>, output: &mut RuleOutput) {
    let Some(path) = unquote(literal.text()) else {
        return;
    };
    if path.ends_with(".scss") {
        return;
    }
    let span = literal.span();

    if references_file(path) {
        let name_start = path.rfind('/').map_or(0, |i| i + 1) as u32;
        let flagged = Span::new(span.start + name_start, span.start + path.len() as u32 + 1);
        output.diagnostics.push(Diagnostic::new(
            RULE_ID,
            format!("import must reference a folder, not a file: {path}"),
            flagged,
        ));
    }

    if path.starts_with("../") {
        let inner = Span::new(span.start + 1, span.end - 1);
        output.edits.push(Edit::new(inner, format!("./{path}")));
    }
}

/// A relative, nested path ending in `.<letters>` outside `/components/`.
fn references_file(path: &str) -> bool {
    let relative = path.starts_with("./") || path.starts_with("../");
    relative
        && has_extension(path)
        && !path.contains("/components/")
        && path.split('/').count() > 2
}

fn has_extension(path: &str) -> bool {
    path.rsplit_once('.').is_some_and(|(_, ext)| {
        !ext.is_empty() && ext.bytes().all(|b| b.is_ascii_alphabetic())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{flagged, run_rule};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_parent_import_gets_prefix_edit() {
        let source = "import { helper } from \"../utils/helper\";";
        let output = run_rule(&ImportPathRule, source, FileKind::Ts);

        assert!(output.diagnostics.is_empty());
        assert_eq!(output.edits.len(), 1);
        let edit = &output.edits[0];
        assert_eq!(edit.new_text, "./../utils/helper");
        assert_eq!(edit.span.slice(source), Some("../utils/helper"));
    }

    #[test]
    fn test_components_import_is_ignored() {
        let source = "import Button from \"./components/Button\";";
        let output = run_rule(&ImportPathRule, source, FileKind::Tsx);
        assert!(output.is_empty());
    }

    #[test]
    fn test_file_import_reports_file_name_and_separator() {
        let source = "import { a } from './utils/helper.ts';";
        let output = run_rule(&ImportPathRule, source, FileKind::Ts);

        assert_eq!(flagged(source, &output), vec!["/helper.ts"]);
        assert_eq!(
            output.diagnostics[0].message,
            "import must reference a folder, not a file: ./utils/helper.ts"
        );
        assert!(output.edits.is_empty());
    }

    #[test]
    fn test_parent_file_import_gets_both() {
        let source = "import x from \"../lib/x.js\";";
        let output = run_rule(&ImportPathRule, source, FileKind::Ts);

        assert_eq!(flagged(source, &output), vec!["/x.js"]);
        assert_eq!(output.edits[0].new_text, "./../lib/x.js");
    }

    #[rstest]
    #[case("import './styles/main.scss';")]
    #[case("import s from '../styles/main.scss';")]
    #[case("import a from './helper.ts';")]
    #[case("import a from 'lib/deep/file.ts';")]
    #[case("import a from './components/deep/Button.tsx';")]
    #[case("import a from './utils/v2';")]
    #[case("import a from './utils/file.d2';")]
    fn test_no_diagnostic(#[case] source: &str) {
        let output = run_rule(&ImportPathRule, source, FileKind::Ts);
        assert!(output.diagnostics.is_empty(), "{source}");
    }

    #[test]
    fn test_prefixed_path_is_not_rewritten_again() {
        let source = "import { helper } from \"./../utils/helper\";";
        let output = run_rule(&ImportPathRule, source, FileKind::Ts);
        assert!(output.edits.is_empty());
    }

    #[test]
    fn test_multiple_imports_keep_order() {
        let source = "import a from '../a';\nimport b from '../b';";
        let output = run_rule(&ImportPathRule, source, FileKind::Ts);
        let texts: Vec<_> = output.edits.iter().map(|e| e.new_text.as_str()).collect();
        assert_eq!(texts, vec!["./../a", "./../b"]);
    }

    #[rstest]
    #[case("./a/b.ts", true)]
    #[case("./a/b.TSX", true)]
    #[case("./a/b", false)]
    #[case("./a/b.", false)]
    #[case("./a/b.d2", false)]
    #[case("../x", false)]
    fn test_has_extension(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(has_extension(path), expected);
    }
}
