//! This crate exposes a self-balancing Binary Search Tree (an AVL tree)
//! storing a set of ordered keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## AVL Tree
//!
//! An AVL tree additionally keeps, for every `Node`, the heights of its two subtrees within
//! one of each other. Every insert and delete restores this after changing the tree by
//! rotating subtrees on the way back up to the root, which limits the height to `O(lg N)`
//! where `N` is the number of keys.
//!
//! ```
//! use avl_tree::Tree;
//!
//! let tree: Tree<_> = (1..=7).collect();
//!
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.to_string(), "1 2 3 4 5 6 7");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod node;
mod traverse;
pub mod tree;


pub use tree::Tree;
