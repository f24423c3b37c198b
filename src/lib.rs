//! An ordered Binary Search Tree (BST) paired with a deterministic
//! two-dimensional layout of its shape, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Inserting a value that
//!    is already present puts the new node in the right subtree.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree.
//!
//! ## Layout grid
//!
//! [`Tree::render`] projects the tree onto a [`Grid`] with one row per
//! level and `2^height - 1` columns. The root sits at the middle column and
//! each child sits one row down, half the remaining distance to the left or
//! right of its parent, so no two subtrees ever overlap. Every grid
//! position records whether a value lives there, whether a present node is
//! missing that child, or whether the walk never reached it, which is
//! enough for a caller to lay the tree out as text.
//!
//! [`Tree::render`]: tree::Tree::render
//! [`Grid`]: grid::Grid

#![deny(missing_docs)]

pub mod grid;
pub mod tree;
