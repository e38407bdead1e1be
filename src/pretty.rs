//! Renders a tree as a sideways ASCII diagram for debugging. The right subtree is drawn above
//! its parent and the left subtree below, so reading the diagram top to bottom visits the values
//! in descending order.
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let tree = Tree::from_values([1, 2, 3]);
//!
//! assert_eq!(tree.to_string(), "│   ┌── 3\n└── 2\n    └── 1\n");
//! ```

use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

impl<T> Node<T>
where
    T: fmt::Display,
{
    fn write_branch(&self, f: &mut fmt::Formatter<'_>, prefix: &str, is_left: bool) -> fmt::Result {
        if let Some(right) = self.right() {
            let prefix = format!("{prefix}{}", if is_left { "│   " } else { "    " });
            right.write_branch(f, &prefix, false)?;
        }

        let connector = if is_left { "└── " } else { "┌── " };
        writeln!(f, "{prefix}{connector}{}", self.value())?;

        if let Some(left) = self.left() {
            let prefix = format!("{prefix}{}", if is_left { "    " } else { "│   " });
            left.write_branch(f, &prefix, true)?;
        }

        Ok(())
    }
}

/// Draws the subtree rooted at this node.
impl<T> fmt::Display for Node<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_branch(f, "", true)
    }
}

/// Draws the whole tree. An empty tree draws nothing.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => fmt::Display::fmt(root, f),
            None => Ok(()),
        }
    }
}
