//! # tvlint_parser
//!
//! Parser abstraction layer for tvlint.
//!
//! This crate provides:
//! - A `Parser` trait producing [`tvlint_ast::SyntaxTree`]s
//! - [`FileKind`], which selects the grammar and the rule set
//! - [`TypeScriptParser`], built on tree-sitter's TypeScript and TSX grammars
//!
//! ## Example
//!
//! ```rust,ignore
//! use tvlint_parser::{FileKind, Parser, TypeScriptParser};
//!
//! let parser = TypeScriptParser::new(FileKind::Ts);
//! let tree = parser.parse("switch (x) { case 1: break; }")?;
//! ```

mod error;
mod file_kind;
mod traits;
mod typescript;

pub use error::ParseError;
pub use file_kind::FileKind;
pub use traits::Parser;
pub use typescript::TypeScriptParser;

/// Returns the parser for a file kind.
pub fn parser_for(kind: FileKind) -> TypeScriptParser {
    TypeScriptParser::new(kind)
}
