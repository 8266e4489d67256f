//! Read-only view over a parsed syntax tree.
//!
//! Rules never touch the parser's tree directly. They see [`SyntaxNode`]s,
//! which pair a tree node with the source text it was parsed from and expose
//! exactly what analysis needs: kind, children, byte span and text.

use crate::{LineIndex, Span};

/// An immutable source text together with its parsed tree.
///
/// One `SyntaxTree` lives for a single analysis pass and is never mutated.
pub struct SyntaxTree<'src> {
    source: &'src str,
    tree: tree_sitter::Tree,
}

impl<'src> SyntaxTree<'src> {
    /// Wraps a tree that was produced from `source`.
    pub fn new(source: &'src str, tree: tree_sitter::Tree) -> Self {
        Self { source, tree }
    }

    /// Returns the root node.
    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode::new(self.tree.root_node(), self.source)
    }

    /// Returns the source text the tree was parsed from.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Builds a position index for the tree's source text.
    pub fn line_index(&self) -> LineIndex<'src> {
        LineIndex::new(self.source)
    }

    /// Returns true if the parser had to recover from syntax errors.
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Returns the first error or missing node, if any.
    pub fn first_error(&self) -> Option<SyntaxNode<'_>> {
        if !self.has_errors() {
            return None;
        }
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            if node.is_error() {
                return Some(node);
            }
            if !node.raw().has_error() {
                continue;
            }
            let mut children: Vec<_> = node.children().collect();
            children.reverse();
            stack.extend(children);
        }
        None
    }
}

impl std::fmt::Debug for SyntaxTree<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("len", &self.source.len())
            .field("root", &self.root().kind())
            .finish()
    }
}

/// A node in a [`SyntaxTree`].
#[derive(Clone, Copy)]
pub struct SyntaxNode<'a> {
    node: tree_sitter::Node<'a>,
    source: &'a str,
}

impl<'a> SyntaxNode<'a> {
    pub(crate) fn new(node: tree_sitter::Node<'a>, source: &'a str) -> Self {
        Self { node, source }
    }

    /// The grammar kind, e.g. `"switch_statement"` or `"switch"` for a keyword token.
    #[inline]
    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    /// Byte range of the node.
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.node.start_byte() as u32, self.node.end_byte() as u32)
    }

    /// Source text covered by the node.
    pub fn text(&self) -> &'a str {
        self.source
            .get(self.node.start_byte()..self.node.end_byte())
            .unwrap_or("")
    }

    /// Whether the node is a named grammar node rather than an anonymous token.
    #[inline]
    pub fn is_named(&self) -> bool {
        self.node.is_named()
    }

    /// Whether the node is a comment.
    #[inline]
    pub fn is_comment(&self) -> bool {
        matches!(self.node.kind(), "comment" | "html_comment")
    }

    /// Whether the node is an error or a node the parser had to invent.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.node.is_error() || self.node.is_missing()
    }

    /// All children, tokens included.
    pub fn children(&self) -> impl Iterator<Item = SyntaxNode<'a>> + use<'a> {
        let source = self.source;
        let mut cursor = self.node.walk();
        let nodes: Vec<_> = self.node.children(&mut cursor).collect();
        nodes.into_iter().map(move |n| SyntaxNode::new(n, source))
    }

    /// Named children, skipping anonymous tokens and comments.
    pub fn named_children(&self) -> impl Iterator<Item = SyntaxNode<'a>> + use<'a> {
        self.children()
            .filter(|child| child.is_named() && !child.is_comment())
    }

    /// First named, non-comment child.
    pub fn first_named_child(&self) -> Option<SyntaxNode<'a>> {
        self.named_children().next()
    }

    /// Last named, non-comment child.
    pub fn last_named_child(&self) -> Option<SyntaxNode<'a>> {
        self.named_children().last()
    }

    /// The child stored under a grammar field, e.g. `"name"` or `"body"`.
    pub fn field(&self, name: &str) -> Option<SyntaxNode<'a>> {
        self.node
            .child_by_field_name(name)
            .map(|n| SyntaxNode::new(n, self.source))
    }

    /// First child (named or not) of the given kind.
    pub fn child_of_kind(&self, kind: &str) -> Option<SyntaxNode<'a>> {
        self.children().find(|child| child.kind() == kind)
    }

    /// The enclosing node, if any.
    pub fn parent(&self) -> Option<SyntaxNode<'a>> {
        self.node.parent().map(|n| SyntaxNode::new(n, self.source))
    }

    /// The source text this node belongs to.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The underlying parser node.
    #[inline]
    pub fn raw(&self) -> tree_sitter::Node<'a> {
        self.node
    }
}

impl std::fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}..{}", self.kind(), self.span().start, self.span().end)
    }
}
