//! The `Node` type and the algorithms that operate on owned subtrees.
//!
//! Every mutating algorithm here follows the same shape: it takes ownership of a subtree (a
//! [`Link`]), possibly replaces parts of it, and hands the (possibly new) subtree back to the
//! caller who re-attaches it. Because a `Node` exclusively owns its children there is never a
//! moment where a node is reachable from two parents.

use std::cmp::Ordering;

use crate::error::TreeError;

/// An owning, optional pointer to a child subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single element of a [`Tree`][crate::Tree]. A `Node` stores one value and owns up to two
/// children. Every value in the left subtree is less than this node's value and every value in
/// the right subtree is greater.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

/// Returns the height of the subtree rooted at `node`: the number of edges on the longest path
/// from `node` down to a leaf. An absent node has a height of `-1` so that a lone leaf has a
/// height of `0`.
///
/// # Examples
///
/// ```
/// use balanced_bst::{height, Tree};
///
/// let tree = Tree::from_values([2, 1, 3]);
///
/// assert_eq!(height::<i32>(None), -1);
/// assert_eq!(height(tree.root()), 1);
/// assert_eq!(height(tree.find(&1)), 0);
/// ```
pub fn height<T>(node: Option<&Node<T>>) -> isize {
    // Walks one level at a time so degenerate trees don't exhaust the stack.
    let mut level: Vec<&Node<T>> = node.into_iter().collect();
    let mut height = -1;
    while !level.is_empty() {
        height += 1;
        level = level
            .iter()
            .flat_map(|n| n.left().into_iter().chain(n.right()))
            .collect();
    }
    height
}

/// Clones the whole subtree bottom-up with explicit stacks instead of recursing per level.
impl<T> Clone for Node<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            left: Self::clone_link(self.left()),
            right: Self::clone_link(self.right()),
        }
    }
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The height of the subtree rooted at this node. See [`height`].
    pub fn height(&self) -> isize {
        height(Some(self))
    }

    /// Builds a height-balanced subtree out of the next `len` values of `values`, which must
    /// already be strictly ascending and hold at least `len` values.
    ///
    /// The middle value (the lower middle for an even `len`) becomes the subtree root, the values
    /// before it build the left subtree and the values after it build the right subtree. Because
    /// the values arrive in ascending order we can build the left subtree first and then simply
    /// take the next value as the root.
    pub(crate) fn build<I>(values: &mut I, len: usize) -> Link<T>
    where
        I: Iterator<Item = T>,
    {
        if len == 0 {
            return None;
        }

        let mid = len / 2;
        let left = Self::build(values, mid);
        let value = values.next();
        debug_assert!(value.is_some(), "fewer than `len` values to build from");
        let value = value?;
        let right = Self::build(values, len - mid - 1);

        Some(Box::new(Self { value, left, right }))
    }

    /// Inserts `value` into the subtree and returns the new subtree root along with whether a
    /// node was actually added. Equal values are ignored.
    pub(crate) fn insert(link: Link<T>, value: T) -> (Box<Self>, bool)
    where
        T: Ord,
    {
        let Some(mut node) = link else {
            return (Box::new(Self::new(value)), true);
        };

        let inserted = match value.cmp(&node.value) {
            Ordering::Less => {
                let (left, inserted) = Self::insert(node.left.take(), value);
                node.left = Some(left);
                inserted
            }
            Ordering::Equal => false,
            Ordering::Greater => {
                let (right, inserted) = Self::insert(node.right.take(), value);
                node.right = Some(right);
                inserted
            }
        };

        (node, inserted)
    }

    /// Deletes `value` from the subtree. Returns the new subtree root and the removed value, if
    /// the subtree contained it.
    ///
    /// A node with two children is not structurally removed. Instead the smallest value of its
    /// right subtree (its in-order successor) is taken out of that subtree and written over this
    /// node's value.
    pub(crate) fn delete(link: Link<T>, value: &T) -> (Link<T>, Option<T>)
    where
        T: Ord,
    {
        let Some(mut node) = link else {
            return (None, None);
        };

        match value.cmp(&node.value) {
            Ordering::Less => {
                let (left, removed) = Self::delete(node.left.take(), value);
                node.left = left;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = Self::delete(node.right.take(), value);
                node.right = right;
                (Some(node), removed)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => (right, Some(node.value)),
                (left, None) => (left, Some(node.value)),
                (Some(left), Some(right)) => {
                    let (right, successor) = Self::take_min(right);
                    let removed = std::mem::replace(&mut node.value, successor);
                    node.left = Some(left);
                    node.right = right;
                    (Some(node), Some(removed))
                }
            },
        }
    }

    /// Removes the smallest node of the subtree, returning what is left of the subtree and the
    /// removed value.
    fn take_min(mut node: Box<Self>) -> (Link<T>, T) {
        match node.left.take() {
            None => {
                let Self { value, right, .. } = *node;
                (right, value)
            }
            Some(left) => {
                let (left, min) = Self::take_min(left);
                node.left = left;
                (Some(node), min)
            }
        }
    }

    /// Finds the node holding `value` in this subtree.
    pub(crate) fn find(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        self.locate(value).map(|(node, _)| node)
    }

    /// Finds the node holding `value` along with the number of edges between it and this node.
    pub(crate) fn locate(&self, value: &T) -> Option<(&Self, usize)>
    where
        T: Ord,
    {
        let mut current = self;
        let mut depth = 0;
        loop {
            let next = match value.cmp(&current.value) {
                Ordering::Less => current.left(),
                Ordering::Equal => return Some((current, depth)),
                Ordering::Greater => current.right(),
            };
            current = next?;
            depth += 1;
        }
    }

    /// The leftmost (smallest) node of this subtree.
    pub(crate) fn min(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    /// The rightmost (largest) node of this subtree.
    pub(crate) fn max(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }

    /// Computes the height of this subtree bottom-up, failing at the first node (in post-order)
    /// whose children's heights differ by more than one.
    ///
    /// Uses an explicit post-order stack plus a stack of finished subtree heights, so it copes
    /// with trees as deep as `insert` can build.
    pub(crate) fn balanced_height(&self) -> Result<isize, TreeError> {
        // (node, depth, children already pushed)
        let mut stack = vec![(self, 0, false)];
        let mut heights: Vec<isize> = Vec::new();

        while let Some((node, depth, expanded)) = stack.pop() {
            if !expanded {
                stack.push((node, depth, true));
                stack.extend(node.right().map(|n| (n, depth + 1, false)));
                stack.extend(node.left().map(|n| (n, depth + 1, false)));
                continue;
            }

            // The left subtree finished first, so its height sits below the right one.
            let right_height = node.right().and_then(|_| heights.pop()).unwrap_or(-1);
            let left_height = node.left().and_then(|_| heights.pop()).unwrap_or(-1);

            if left_height.abs_diff(right_height) > 1 {
                return Err(TreeError::Unbalanced {
                    depth,
                    left_height,
                    right_height,
                });
            }
            heights.push(1 + left_height.max(right_height));
        }

        Ok(heights.pop().unwrap_or(-1))
    }

    fn clone_link(node: Option<&Self>) -> Link<T>
    where
        T: Clone,
    {
        let mut stack: Vec<(&Self, bool)> = node.map(|n| (n, false)).into_iter().collect();
        let mut built: Vec<Box<Self>> = Vec::new();

        while let Some((node, expanded)) = stack.pop() {
            if !expanded {
                stack.push((node, true));
                stack.extend(node.right().map(|n| (n, false)));
                stack.extend(node.left().map(|n| (n, false)));
                continue;
            }

            let right = node.right().and_then(|_| built.pop());
            let left = node.left().and_then(|_| built.pop());
            built.push(Box::new(Self {
                value: node.value.clone(),
                left,
                right,
            }));
        }

        built.pop()
    }

    /// Drops subtrees one node at a time rather than through `Box`'s recursive drop glue.
    pub(crate) fn dismantle<I>(nodes: I)
    where
        I: IntoIterator<Item = Box<Self>>,
    {
        let mut stack: Vec<Box<Self>> = nodes.into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
