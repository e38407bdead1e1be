//! This crate exposes a Binary Search Tree (BST) that is built balanced and can be rebalanced on
//! demand, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value
//! and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). With clever construction the
//! height of a BST can be limited to `O(lg N)` where `N` is the number of nodes
//! in the tree. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! ## Balance
//!
//! A tree is balanced when, for every `Node`, the heights of its two subtrees differ by at most
//! one. [`Tree::from_values`] always builds a balanced tree by sorting its input and recursively
//! picking the middle value as the subtree root. [`Tree::insert`] and [`Tree::delete`] don't
//! restore balance so a tree can drift; [`Tree::is_balanced`] detects that and
//! [`Tree::rebalance`] rebuilds the tree from its sorted values.
//!
//! ## Features
//!
//! - `serde`: serializes a [`Tree`] as its sorted sequence of values and deserializes any
//!   sequence through [`Tree::from_values`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod node;
mod pretty;
pub mod traversal;
pub mod tree;


pub use error::{Result, TreeError};
pub use node::{height, Node};
pub use tree::Tree;
