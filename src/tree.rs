//! A Binary Search Tree that is built balanced and can be rebalanced on demand. Inserting and
//! deleting values does *not* restore balance automatically. Instead, [`Tree::is_balanced`]
//! reports when the shape has drifted and [`Tree::rebalance`] rebuilds it from scratch.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::from_values([1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
//!
//! // Duplicates are dropped and the values come back sorted.
//! assert_eq!(
//!     tree.in_order().copied().collect::<Vec<_>>(),
//!     [1, 3, 4, 5, 7, 8, 9, 23, 67, 324, 6345]
//! );
//! assert!(tree.is_balanced());
//!
//! // Piling values onto one side unbalances it...
//! for value in [6346, 6347, 6348] {
//!     tree.insert(value);
//! }
//! assert!(!tree.is_balanced());
//!
//! // ...until we rebalance.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! ```

use tracing::{debug, trace};

use crate::error::TreeError;
use crate::node::{self, Link, Node};

/// An ordered set of values stored in a binary tree. See the [module docs][self] for an overview.
#[derive(Debug)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.as_deref().map(|root| Box::new(root.clone())),
            len: self.len,
        }
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        Node::dismantle(self.root.take());
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a balanced tree out of values that are already strictly ascending.
    fn from_sorted(values: Vec<T>) -> Self {
        let len = values.len();
        let root = Node::build(&mut values.into_iter(), len);
        let tree = Self { root, len };
        debug!(len, height = tree.height(), "built balanced tree");

        tree
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub(crate) fn into_root(mut self) -> Link<T> {
        self.root.take()
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// The height of the whole tree. An empty tree has a height of `-1` and a tree with a single
    /// value has a height of `0`. Use [`height`][crate::height] for the height of any subtree.
    pub fn height(&self) -> isize {
        node::height(self.root())
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root().map(|root| root.min().value())
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root().map(|root| root.max().value())
    }

    /// Whether every node's subtrees differ in height by at most one. An empty tree is balanced.
    ///
    /// Heights are computed bottom-up in a single pass so this is `O(n)`.
    pub fn is_balanced(&self) -> bool {
        self.verify_balance().is_ok()
    }

    /// Like [`Tree::is_balanced`] but reports the first unbalanced node found in post-order.
    ///
    /// # Errors
    ///
    /// [`TreeError::Unbalanced`] if some node's subtree heights differ by more than one.
    pub fn verify_balance(&self) -> crate::Result<()> {
        match self.root() {
            Some(root) => root.balanced_height().map(|_| ()),
            None => Ok(()),
        }
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Builds a balanced tree from an arbitrary collection of values. Duplicates are dropped and
    /// the remaining values are sorted before the middle value of each range is picked as the
    /// subtree root.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_values([5, 5, 3, 3, 3, 1]);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(3));
    /// assert!(tree.is_balanced());
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();

        Self::from_sorted(values)
    }

    /// Inserts `value` into the tree. Inserting a value that is already present does nothing.
    /// The tree is not rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 1);
    /// assert!(tree.contains(&2));
    /// ```
    pub fn insert(&mut self, value: T) {
        let (root, inserted) = Node::insert(self.root.take(), value);
        self.root = Some(root);

        if inserted {
            self.len += 1;
        }
        trace!(len = self.len, inserted, "insert");
    }

    /// Deletes `value` from the tree. Deleting a value that isn't present does nothing. The tree
    /// is not rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::from_values([1, 2, 3]);
    /// tree.delete(&2);
    /// tree.delete(&42);
    ///
    /// assert_eq!(tree.in_order().collect::<Vec<_>>(), [&1, &3]);
    /// ```
    pub fn delete(&mut self, value: &T) {
        let (root, removed) = Node::delete(self.root.take(), value);
        self.root = root;

        let deleted = removed.is_some();
        if deleted {
            self.len -= 1;
        }
        trace!(len = self.len, deleted, "delete");
    }

    /// Finds the node holding `value`, if any.
    ///
    /// This takes `O(height)` which is only `O(lg N)` while the tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_values([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| *n.value()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let found = self.root().and_then(|root| root.find(value));
        if found.is_none() {
            trace!(len = self.len, "find missed");
        }

        found
    }

    /// Whether the tree holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// The number of edges between the root and `node`. The root has a depth of `0`. An absent
    /// node, or a node that doesn't belong to this tree, has a depth of `-1`.
    ///
    /// Nodes don't know their parents, so this searches down from the root for the node's value.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_values([1, 2, 3]);
    ///
    /// assert_eq!(tree.depth(tree.root()), 0);
    /// assert_eq!(tree.depth(tree.find(&3)), 1);
    /// assert_eq!(tree.depth(None), -1);
    ///
    /// // A node with an equal value from some other tree isn't ours.
    /// let other = Tree::from_values([3]);
    /// assert_eq!(tree.depth(other.root()), -1);
    /// ```
    pub fn depth(&self, node: Option<&Node<T>>) -> isize {
        let Some(node) = node else {
            return -1;
        };

        match self.root().and_then(|root| root.locate(node.value())) {
            Some((found, depth)) if std::ptr::eq(found, node) => depth as isize,
            _ => -1,
        }
    }

    /// The depth of the node holding `value`, if the tree holds it.
    pub fn depth_of(&self, value: &T) -> Option<usize> {
        self.root()
            .and_then(|root| root.locate(value))
            .map(|(_, depth)| depth)
    }

    /// Rebuilds the tree so that it is balanced again. The tree holds exactly the same values
    /// afterwards.
    pub fn rebalance(&mut self) {
        let before = self.height();
        let values: Vec<T> = std::mem::take(self).into_iter().collect();
        *self = Self::from_sorted(values);
        debug!(len = self.len, before, after = self.height(), "rebalanced tree");
    }

    /// Checks that the in-order sequence is strictly ascending, i.e. that every node is greater
    /// than its whole left subtree and less than its whole right subtree.
    ///
    /// # Errors
    ///
    /// [`TreeError::OutOfOrder`] with the position of the first pair that isn't ascending.
    pub fn verify_order(&self) -> crate::Result<()> {
        let pairs = self.in_order().zip(self.in_order().skip(1));
        match pairs.enumerate().find(|(_, (a, b))| a >= b) {
            Some((index, _)) => Err(TreeError::OutOfOrder { index }),
            None => Ok(()),
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Tree<T>
where
    T: serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.in_order())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Tree<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from_values)
    }
}
