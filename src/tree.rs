//! A self-balancing BST storing a set of keys. Inserting and deleting modify the tree in place
//! and report whether anything changed.
//!
//! # Examples
//!
//! ```
//! use avl_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Keys are unique so inserting the same key again is rejected.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting reports whether the key was there.
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use std::fmt;

use crate::node::{self, Link};
use crate::traverse;

/// A self-balancing Binary Search Tree (specifically, an AVL tree). This can be used for
/// inserting, finding, and deleting keys and for listing them in the usual traversal orders.
#[derive(Clone)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

/// Writes the keys in ascending order separated by single spaces.
///
/// ```
/// use avl_tree::Tree;
///
/// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
/// assert_eq!(tree.to_string(), "1 2 3");
/// assert_eq!(Tree::<i32>::new().to_string(), "");
/// ```
impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = self.in_order().into_iter();
        if let Some(first) = keys.next() {
            write!(f, "{}", first)?;
            for key in keys {
                write!(f, " {}", key)?;
            }
        }
        Ok(())
    }
}

/// Two trees are equal when they hold the same keys, whatever their shapes.
impl<K> PartialEq for Tree<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.in_order() == other.in_order()
    }
}

impl<K> Eq for Tree<K> where K: Eq {}

/// Inserts the keys in iteration order. Keys seen before are skipped.
impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of levels in the tree: 0 when empty, 1 for a lone root.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::Tree;
    ///
    /// let tree: Tree<_> = (0..1000).collect();
    /// assert_eq!(tree.height(), 10);
    /// ```
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Potentially finds the stored key equal to `key`. If no node has the corresponding key,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        self.root.as_ref().and_then(|n| n.find(key))
    }

    /// Whether the tree holds `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Inserts `key` into the tree, returning `true` if it wasn't already there. Inserting a key
    /// that is already present leaves the tree untouched and returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        if self.contains(&key) {
            log::debug!("insert rejected, key already present");
            return false;
        }

        self.root = Some(node::insert(self.root.take(), key));
        self.len += 1;
        true
    }

    /// Deletes `key` from the tree, returning `true` if it was there. If the tree does not
    /// contain the key, nothing happens and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    ///
    /// assert!(tree.remove(&4));
    /// assert!(!tree.remove(&4));
    /// assert_eq!(tree.to_string(), "1 2 3 5 6 7");
    /// ```
    pub fn remove(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        if !self.contains(key) {
            log::debug!("remove missed, key not present");
            return false;
        }

        self.root = node::remove(self.root.take(), key);
        self.len -= 1;
        true
    }

    /// Drops every key, leaving an empty tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// The smallest key, or `None` if the tree is empty.
    pub fn minimum(&self) -> Option<&K> {
        self.root.as_ref().map(|n| n.leftmost())
    }

    /// The largest key, or `None` if the tree is empty.
    pub fn maximum(&self) -> Option<&K> {
        self.root.as_ref().map(|n| n.rightmost())
    }

    /// The key at position `index` in ascending order, or `None` if `index` is out of bounds.
    ///
    /// This walks the whole tree on every call (`O(n)`). Callers indexing repeatedly should
    /// keep the result of [`Tree::in_order`] instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::Tree;
    ///
    /// let tree: Tree<_> = [30, 10, 20].into_iter().collect();
    ///
    /// assert_eq!(tree.get(0), Some(&10));
    /// assert_eq!(tree.get(2), Some(&30));
    /// assert_eq!(tree.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&K> {
        if index >= self.len {
            return None;
        }
        self.in_order().get(index).copied()
    }

    /// Keys in pre-order: each node before its left then right subtree.
    pub fn pre_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        traverse::pre_order(&self.root, &mut keys);
        keys
    }

    /// Keys in in-order which, for a BST, is ascending order.
    pub fn in_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        traverse::in_order(&self.root, &mut keys);
        keys
    }

    /// Keys in post-order: each node after its left then right subtree.
    pub fn post_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        traverse::post_order(&self.root, &mut keys);
        keys
    }

    /// Keys level by level from the root down, each level from left to right.
    pub fn level_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        traverse::level_order(&self.root, &mut keys);
        keys
    }

    /// Whether every node's subtrees differ in height by at most one. This always holds for a
    /// `Tree`; it is exposed so callers can check it themselves.
    pub fn is_balanced(&self) -> bool {
        node::is_balanced(&self.root)
    }
}
