//! # tvlint_ast
//!
//! Syntax tree and source location types for tvlint.
//!
//! This crate provides:
//! - [`Span`], [`Position`] and [`Location`] for addressing source text
//! - [`LineIndex`], the byte offset ↔ line/column conversion shared by every rule
//! - [`SyntaxTree`] and [`SyntaxNode`], a read-only view over a parsed tree
//! - [`Visitor`] and [`walk_tree`] for traversal
//!
//! ## Architecture
//!
//! Nodes borrow both the parser's tree and the source text, so rules can
//! slice node text without copying. A `SyntaxTree` is built once per
//! analysis and dropped when the analysis finishes.

mod line_index;
mod span;
mod syntax;
pub mod visitor;

pub use line_index::LineIndex;
pub use span::{Location, Position, Span};
pub use syntax::{SyntaxNode, SyntaxTree};

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor, any_node, walk_children, walk_tree};
