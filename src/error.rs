//! Errors reported when verifying a tree's structural invariants.
//!
//! None of the tree's regular operations fail. These errors only come out of
//! [`Tree::verify_order`][crate::Tree::verify_order] and
//! [`Tree::verify_balance`][crate::Tree::verify_balance].

use thiserror::Error;

/// A structural invariant that a [`Tree`][crate::Tree] does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The in-order value at `index` is not strictly less than the one after it.
    #[error("in-order values at position {index} and its successor are not strictly ascending")]
    OutOfOrder {
        /// Position in the in-order sequence of the first value of the offending pair.
        index: usize,
    },

    /// A node's subtrees differ in height by more than one.
    #[error("node at depth {depth} has subtree heights {left_height} and {right_height}")]
    Unbalanced {
        /// Depth of the offending node, the root having depth 0.
        depth: usize,
        /// Height of the left subtree (`-1` when absent).
        left_height: isize,
        /// Height of the right subtree (`-1` when absent).
        right_height: isize,
    },
}

/// Result type for invariant checks.
pub type Result<T, E = TreeError> = std::result::Result<T, E>;
