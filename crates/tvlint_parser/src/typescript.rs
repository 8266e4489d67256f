//! TypeScript and TSX parser backed by tree-sitter.

use tvlint_ast::SyntaxTree;

use crate::{FileKind, ParseError, Parser};

/// Parser for `.ts` and `.tsx` sources.
///
/// Uses the `typescript` grammar for [`FileKind::Ts`] and the `tsx`
/// grammar (TypeScript plus JSX) for [`FileKind::Tsx`]. A fresh
/// tree-sitter parser is created per call, so the type is `Send + Sync`.
#[derive(Debug, Clone, Copy)]
pub struct TypeScriptParser {
    kind: FileKind,
}

impl TypeScriptParser {
    /// Creates a parser for the given file kind.
    pub fn new(kind: FileKind) -> Self {
        Self { kind }
    }

    /// The file kind this parser handles.
    pub fn kind(&self) -> FileKind {
        self.kind
    }

    fn language(&self) -> tree_sitter::Language {
        match self.kind {
            FileKind::Ts => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            FileKind::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

impl Parser for TypeScriptParser {
    fn name(&self) -> &str {
        match self.kind {
            FileKind::Ts => "typescript",
            FileKind::Tsx => "tsx",
        }
    }

    fn extensions(&self) -> &[&str] {
        match self.kind {
            FileKind::Ts => &["ts"],
            FileKind::Tsx => &["tsx"],
        }
    }

    fn parse<'src>(&self, source: &'src str) -> Result<SyntaxTree<'src>, ParseError> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.language())
            .map_err(|e| ParseError::language(e.to_string()))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::internal("parser produced no tree"))?;

        let tree = SyntaxTree::new(source, tree);
        if let Some(error) = tree.first_error() {
            let message = if error.raw().is_missing() {
                format!("missing `{}`", error.kind())
            } else {
                "unexpected syntax".to_string()
            };
            return Err(ParseError::invalid_source_at(
                message,
                error.span().start as usize,
            ));
        }
        if tree.has_errors() {
            return Err(ParseError::invalid_source("syntax error"));
        }

        Ok(tree)
    }
}
