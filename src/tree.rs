//! A Binary Search Tree storing totally ordered values. Inserting,
//! searching, and removing all descend from the root comparing the value
//! against each node, so every operation takes `O(height)`. Duplicate
//! values are allowed and always land in the right subtree of the node
//! they equal.
//!
//! # Examples
//!
//! ```
//! use treegrid::tree::{Removal, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Removing reports whether anything came out.
//! assert_eq!(tree.remove(&1), Removal::Removed);
//! assert_eq!(tree.remove(&1), Removal::NotFound);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A Binary Search Tree. This can be used for inserting, searching for,
/// and removing values. Duplicate values are kept, each occupying its own
/// node in the right subtree of the node it equals.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // The derived drop recurses once per level, which a degenerate
        // chain can make arbitrarily deep.
        let mut stack = Vec::new();
        stack.extend(self.root.take().0);
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take().0);
            stack.extend(node.right.take().0);
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root.node()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: Link(None) }
    }

    /// Returns whether this tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.node().is_none()
    }

    /// Inserts the given value into the tree. Values compare against each
    /// node on the way down: smaller values descend left, anything else
    /// descends right, so inserting a duplicate grows the right subtree of
    /// the node it equals.
    ///
    /// # Examples
    ///
    /// ```
    /// use treegrid::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        self.root.insert(value);
    }

    /// Returns whether the given value exists in this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use treegrid::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.root.contains(value)
    }

    /// Removes one occurrence of the given value from the tree.
    ///
    /// The first node found by descending from the root is unlinked and its
    /// subtrees are spliced back together. A node with two children keeps
    /// both subtrees: it takes on the smallest value in its right subtree
    /// (its in-order successor) and that value is removed from the right
    /// subtree instead, which is why removal needs `T: Clone`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treegrid::tree::{Removal, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.remove(&1), Removal::Removed);
    /// assert_eq!(tree.remove(&1), Removal::NotFound);
    /// ```
    pub fn remove(&mut self, value: &T) -> Removal
    where
        T: Ord + Clone,
    {
        self.root.remove(value, Origin::Caller)
    }

    /// Returns the number of levels in this tree. An empty tree has height
    /// 0 and a tree holding only a root has height 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use treegrid::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Returns an iterator over the values of this tree in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use treegrid::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// assert!(tree.iter().eq(&[1, 2, 3]));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.node()
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over a [`Tree`]'s values in sorted order.
///
/// Visits the left subtree, then the node, then the right subtree, which by
/// the ordering invariant yields a non-decreasing sequence. Created by
/// [`Tree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose value and right subtree are still pending, deepest
    /// left-spine node on top.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        let mut iter = Iter { stack: Vec::new() };
        iter.descend(tree.root());
        iter
    }

    /// Pushes `node` and every node down its left spine.
    fn descend(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.node();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend(node.right.node());
        Some(&node.value)
    }
}

/// The outcome of [`Tree::remove`].
///
/// Removing a value the tree doesn't hold is not an error, but it also is
/// not a structural change, so the outcome has to be looked at.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Removal {
    /// A node holding the value was unlinked from the tree.
    Removed,
    /// The value wasn't found so nothing was removed.
    NotFound,
}

/// Where a removal descent started. Removing a node with two children
/// re-runs the descent against its right subtree to delete the promoted
/// successor's old node; that inner pass belongs to the tree, not the
/// caller, and must always find its value.
#[derive(Copy, Clone)]
enum Origin {
    /// The descent came from [`Tree::remove`].
    Caller,
    /// The descent is deleting a promoted successor's original node.
    Successor,
}

/// An owned child slot. The tree root and every `Node` child are `Link`s,
/// so the descent logic is written once against the slot.
#[derive(Clone)]
struct Link<T>(Option<Box<Node<T>>>);

impl<T> Link<T> {
    fn node(&self) -> Option<&Node<T>> {
        self.0.as_deref()
    }

    fn node_mut(&mut self) -> Option<&mut Node<T>> {
        self.0.as_deref_mut()
    }

    fn take(&mut self) -> Self {
        Link(self.0.take())
    }

    fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        match self.node_mut() {
            Some(node) => node.insert(value),
            None => self.0 = Some(Box::new(Node::new(value))),
        }
    }

    fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.node().map_or(false, |node| node.contains(value))
    }

    fn height(&self) -> usize {
        self.node().map_or(0, |node| node.height())
    }

    /// The smallest value in this subtree, found by walking left.
    fn min(&self) -> Option<&T> {
        let mut node = self.node()?;
        while let Some(left) = node.left.node() {
            node = left;
        }
        Some(&node.value)
    }

    fn remove(&mut self, value: &T, origin: Origin) -> Removal
    where
        T: Ord + Clone,
    {
        match self.node_mut() {
            None => {
                // A successor descent looks for a value that was just read
                // out of this subtree.
                debug_assert!(matches!(origin, Origin::Caller));
                return Removal::NotFound;
            }
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => return node.left.remove(value, origin),
                Ordering::Greater => return node.right.remove(value, origin),
                Ordering::Equal => {}
            },
        }

        self.unlink();
        Removal::Removed
    }

    /// Detaches this link's node, splicing its subtrees back into the tree.
    fn unlink(&mut self)
    where
        T: Ord + Clone,
    {
        let mut node = self.take().0.expect("Unlinking implies a node");
        match (node.left.take(), node.right.take()) {
            (Link(None), Link(None)) => {}
            (Link(None), right) => *self = right,
            (left, Link(None)) => *self = left,

            // With two children the node keeps both subtrees. It takes on
            // the smallest value of its right subtree (its in-order
            // successor) and that value is removed from the right subtree
            // instead. The successor has no left child, so the inner
            // removal never lands back in this arm.
            (left, right) => {
                node.left = left;
                node.right = right;

                let successor = node
                    .right
                    .min()
                    .cloned()
                    .expect("Two children implies a right subtree");
                let spliced = node.right.remove(&successor, Origin::Successor);
                debug_assert!(matches!(spliced, Removal::Removed));

                node.value = successor;
                self.0 = Some(node);
            }
        }
    }
}

/// A value plus owned child slots. The subtree behind `left` holds values
/// strictly less than `value`; the subtree behind `right` holds values
/// greater than or equal to it.
#[derive(Clone)]
pub(crate) struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left.node())
            .field("right", &self.right.node())
            .finish()
    }
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: Link(None),
            right: Link(None),
        }
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.node()
    }

    fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left.insert(value),
            // Duplicates sort into the right subtree.
            Ordering::Equal | Ordering::Greater => self.right.insert(value),
        }

        if cfg!(debug_assertions) {
            if let Some(left) = self.left.node() {
                assert!(left.value < self.value);
            }
            if let Some(right) = self.right.node() {
                assert!(right.value >= self.value);
            }
        }
    }

    fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left.contains(value),
            Ordering::Equal => true,
            Ordering::Greater => self.right.contains(value),
        }
    }

    fn height(&self) -> usize {
        1 + self.left.height().max(self.right.height())
    }
}
