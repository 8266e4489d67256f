//! Parser trait definition.

use tvlint_ast::SyntaxTree;

use crate::ParseError;

/// Trait for parsing source text into a [`SyntaxTree`].
///
/// The tree borrows the source, so it can only live as long as the text
/// it was parsed from.
///
/// # Example
///
/// ```rust,ignore
/// use tvlint_parser::{FileKind, Parser, TypeScriptParser};
///
/// let parser = TypeScriptParser::new(FileKind::Tsx);
/// let tree = parser.parse("const el = <div />;")?;
/// assert_eq!(tree.root().kind(), "program");
/// ```
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Returns the file extensions this parser handles.
    ///
    /// Extensions do not include the leading dot (e.g., `["tsx"]`).
    fn extensions(&self) -> &[&str];

    /// Parses the source text.
    ///
    /// Returns an error when no tree can be produced, or when the tree
    /// contains syntax errors.
    fn parse<'src>(&self, source: &'src str) -> Result<SyntaxTree<'src>, ParseError>;

    /// Returns true if this parser can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
