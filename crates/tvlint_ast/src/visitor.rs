//! Visitor pattern for syntax tree traversal.
//!
//! Traversal is iterative (driven by a tree cursor), so deeply nested
//! sources cannot overflow the stack.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::ops::ControlFlow;
//! use tvlint_ast::{SyntaxNode, VisitResult, Visitor, walk_tree};
//!
//! struct SwitchCounter(usize);
//!
//! impl<'a> Visitor<'a> for SwitchCounter {
//!     fn enter_node(&mut self, node: SyntaxNode<'a>) -> VisitResult {
//!         if node.kind() == "switch_statement" {
//!             self.0 += 1;
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let mut counter = SwitchCounter(0);
//! walk_tree(&mut counter, tree.root());
//! ```

use std::ops::ControlFlow;

use crate::SyntaxNode;

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - keep going
/// - `ControlFlow::Break(())` - stop the whole traversal
pub type VisitResult = ControlFlow<()>;

/// Visitor trait for read-only traversal of [`SyntaxNode`]s.
///
/// Every node is visited in document order, anonymous tokens included.
pub trait Visitor<'a> {
    /// Called when a node is reached, before its children.
    #[inline]
    fn enter_node(&mut self, _node: SyntaxNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after a node and all of its visited children.
    #[inline]
    fn exit_node(&mut self, _node: SyntaxNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Whether to descend into the children of `node`.
    ///
    /// Called after [`enter_node`](Self::enter_node). Returning `false` skips
    /// the subtree; `exit_node` is still called for `node`.
    #[inline]
    fn descend_into(&mut self, _node: SyntaxNode<'a>) -> bool {
        true
    }
}

/// Walks `root` and its descendants depth-first.
pub fn walk_tree<'a, V>(visitor: &mut V, root: SyntaxNode<'a>) -> VisitResult
where
    V: Visitor<'a> + ?Sized,
{
    let source = root.source();
    let mut cursor = root.raw().walk();

    loop {
        let node = SyntaxNode::new(cursor.node(), source);
        visitor.enter_node(node)?;

        if visitor.descend_into(node) && cursor.goto_first_child() {
            continue;
        }
        visitor.exit_node(node)?;

        // Climb until a sibling is found or the root has been exited.
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return ControlFlow::Continue(());
            }
            visitor.exit_node(SyntaxNode::new(cursor.node(), source))?;
        }
    }
}

/// Walks the strict descendants of `node`, skipping the node itself.
pub fn walk_children<'a, V>(visitor: &mut V, node: SyntaxNode<'a>) -> VisitResult
where
    V: Visitor<'a> + ?Sized,
{
    for child in node.children() {
        walk_tree(visitor, child)?;
    }
    ControlFlow::Continue(())
}

/// Returns true if any node under `root` (inclusive) satisfies `predicate`.
///
/// `descend` decides whether the children of a non-matching node are searched.
pub fn any_node<'a>(
    root: SyntaxNode<'a>,
    mut predicate: impl FnMut(SyntaxNode<'a>) -> bool,
    mut descend: impl FnMut(SyntaxNode<'a>) -> bool,
) -> bool {
    struct Finder<P, D> {
        predicate: P,
        descend: D,
        found: bool,
    }

    impl<'a, P, D> Visitor<'a> for Finder<P, D>
    where
        P: FnMut(SyntaxNode<'a>) -> bool,
        D: FnMut(SyntaxNode<'a>) -> bool,
    {
        fn enter_node(&mut self, node: SyntaxNode<'a>) -> VisitResult {
            if (self.predicate)(node) {
                self.found = true;
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        }

        fn descend_into(&mut self, node: SyntaxNode<'a>) -> bool {
            (self.descend)(node)
        }
    }

    let mut finder = Finder {
        predicate: &mut predicate,
        descend: &mut descend,
        found: false,
    };
    let _ = walk_tree(&mut finder, root);
    finder.found
}
