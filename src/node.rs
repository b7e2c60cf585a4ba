//! The `Node` type behind [`Tree`][crate::Tree] along with the rotations and the recursive
//! insert and delete that keep every subtree balanced.
//!
//! Every mutating function here takes ownership of a subtree root and hands back the (possibly
//! new) root of the same subtree for the caller to relink. There are no parent pointers so a
//! node is only ever reachable through exactly one `Box`.

use std::cmp::Ordering;
use std::fmt;

/// A possibly empty subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

#[cfg(test)]
thread_local! {
    /// How many rebalancing rotations (single or double) have been applied on this thread.
    pub(crate) static ROTATIONS: std::cell::Cell<usize> = std::cell::Cell::new(0);
}

/// Gets the height of a subtree. An empty subtree has a height of 0.
pub(crate) fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

/// A `Node` has a key that is used for searching/sorting and up to two children.
#[derive(Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("height", &self.height)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// The difference in height between the right and left subtrees. See [the Wikipedia
    /// page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    fn balance_factor(&self) -> isize {
        height(&self.right) as isize - height(&self.left) as isize
    }

    pub(crate) fn find(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left.as_ref().and_then(|n| n.find(key)),
            Ordering::Equal => Some(&self.key),
            Ordering::Greater => self.right.as_ref().and_then(|n| n.find(key)),
        }
    }

    /// The smallest key in this subtree.
    pub(crate) fn leftmost(&self) -> &K {
        let mut node = self;
        while let Some(left) = &node.left {
            node = left;
        }
        &node.key
    }

    /// The largest key in this subtree.
    pub(crate) fn rightmost(&self) -> &K {
        let mut node = self;
        while let Some(right) = &node.right {
            node = right;
        }
        &node.key
    }

    /// In debug builds, assert that `self` is ordered against its children, that its cached
    /// height is correct and that it is balanced.
    fn check_invariants(&self)
    where
        K: Ord,
    {
        if cfg!(debug_assertions) {
            if let Some(left) = &self.left {
                assert!(self.key > left.key);
            }
            if let Some(right) = &self.right {
                assert!(self.key < right.key);
            }
            assert_eq!(self.height, height(&self.left).max(height(&self.right)) + 1);
            assert!(self.balance_factor().abs() <= 1);
        }
    }
}

/// Whether every node in the subtree has children whose heights differ by at most one.
pub(crate) fn is_balanced<K>(link: &Link<K>) -> bool {
    match link {
        None => true,
        Some(node) => {
            node.balance_factor().abs() <= 1 && is_balanced(&node.left) && is_balanced(&node.right)
        }
    }
}

/// The four ways of restoring balance to a subtree whose children differ in height by two. See
/// [the Wikipedia page][wiki] for the terminology.
///
/// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rotation {
    /// The left child's left subtree is too tall.
    LeftLeft,
    /// The right child's right subtree is too tall.
    RightRight,
    /// The left child's right subtree is too tall.
    LeftRight,
    /// The right child's left subtree is too tall.
    RightLeft,
}

impl Rotation {
    /// Applies this rotation to the subtree rooted at `root` and returns the new subtree root.
    fn apply<K>(self, mut root: Box<Node<K>>) -> Box<Node<K>> {
        let new_root = match self {
            Self::LeftLeft => rotate_right(root),
            Self::RightRight => rotate_left(root),
            Self::LeftRight => {
                root.left = root.left.take().map(rotate_left);
                rotate_right(root)
            }
            Self::RightLeft => {
                root.right = root.right.take().map(rotate_right);
                rotate_left(root)
            }
        };

        #[cfg(test)]
        ROTATIONS.with(|count| count.set(count.get() + 1));
        log::trace!("{:?} rotation, subtree height is now {}", self, new_root.height);

        new_root
    }
}

/// Rotate `old_root` to the right. This moves the left child up vertically and `old_root` down
/// vertically. Only the heights of those two nodes change. A node without a left child is
/// returned as is.
///
/// # Diagram
///
/// ```text
///      old_root               new_root
///       /     \               /     \
///   new_root   z   rotate -> x    old_root
///    /   \                          /  \
///   x     y                        y    z
/// ```
fn rotate_right<K>(mut old_root: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut new_root) = old_root.left.take() else {
        return old_root;
    };

    old_root.left = new_root.right.take();
    old_root.fix_height();

    new_root.right = Some(old_root);
    new_root.fix_height();
    new_root
}

/// Mirror image of [`rotate_right`]: the right child moves up and `old_root` becomes its left
/// child, adopting the right child's old left subtree.
fn rotate_left<K>(mut old_root: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut new_root) = old_root.right.take() else {
        return old_root;
    };

    old_root.right = new_root.left.take();
    old_root.fix_height();

    new_root.left = Some(old_root);
    new_root.fix_height();
    new_root
}

/// Inserts `key` into the subtree rooted at `link` and returns the new, balanced, subtree root.
/// If the subtree already holds an equal key, nothing changes and `key` is dropped.
pub(crate) fn insert<K>(link: Link<K>, key: K) -> Box<Node<K>>
where
    K: Ord,
{
    let mut node = match link {
        Some(node) => node,
        None => return Node::new_boxed(key),
    };

    match key.cmp(&node.key) {
        Ordering::Less => {
            // A zig-zag is decided against the child as it is now. If that child gets replaced
            // by a rotation below us then our left height didn't grow and we stay balanced.
            let zig_zag = node.left.as_ref().map_or(false, |left| key > left.key);
            node.left = Some(insert(node.left.take(), key));
            if node.balance_factor() == -2 {
                let rotation = if zig_zag {
                    Rotation::LeftRight
                } else {
                    Rotation::LeftLeft
                };
                node = rotation.apply(node);
            }
        }
        Ordering::Equal => return node,
        Ordering::Greater => {
            let zig_zag = node.right.as_ref().map_or(false, |right| key < right.key);
            node.right = Some(insert(node.right.take(), key));
            if node.balance_factor() == 2 {
                let rotation = if zig_zag {
                    Rotation::RightLeft
                } else {
                    Rotation::RightRight
                };
                node = rotation.apply(node);
            }
        }
    }

    node.fix_height();
    node.check_invariants();
    node
}

/// Removes `key` from the subtree rooted at `link` and returns the new, balanced, subtree root.
/// A missing key leaves the subtree as it was.
pub(crate) fn remove<K>(link: Link<K>, key: &K) -> Link<K>
where
    K: Ord,
{
    let mut node = link?;

    match key.cmp(&node.key) {
        Ordering::Less => node.left = remove(node.left.take(), key),
        Ordering::Greater => node.right = remove(node.right.take(), key),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return None,
            (Some(child), None) | (None, Some(child)) => return Some(child),

            // The replacement key comes from the taller subtree, the right one on a tie. It is
            // moved into this node and its own node is dropped instead.
            (Some(left), Some(right)) => {
                if left.height > right.height {
                    let (predecessor, new_left) = remove_max(left);
                    node.key = predecessor;
                    node.left = new_left;
                    node.right = Some(right);
                } else {
                    let (successor, new_right) = remove_min(right);
                    node.key = successor;
                    node.left = Some(left);
                    node.right = new_right;
                }
            }
        },
    }

    Some(rebalance(node))
}

/// Detaches the largest key of the subtree rooted at `node`. Returns that key and what is left of
/// the subtree, rebalanced on the way back up.
fn remove_max<K>(mut node: Box<Node<K>>) -> (K, Link<K>)
where
    K: Ord,
{
    match node.right.take() {
        None => {
            let Node { key, left, .. } = *node;
            (key, left)
        }
        Some(right) => {
            let (max, new_right) = remove_max(right);
            node.right = new_right;
            (max, Some(rebalance(node)))
        }
    }
}

/// Mirror image of [`remove_max`].
fn remove_min<K>(mut node: Box<Node<K>>) -> (K, Link<K>)
where
    K: Ord,
{
    match node.left.take() {
        None => {
            let Node { key, right, .. } = *node;
            (key, right)
        }
        Some(left) => {
            let (min, new_left) = remove_min(left);
            node.left = new_left;
            (min, Some(rebalance(node)))
        }
    }
}

/// Balances `node` after one of its subtrees shrank. There is no inserted key to orient against
/// so the taller child's own subtrees decide between a single and a double rotation; ties take
/// the single rotation.
fn rebalance<K>(node: Box<Node<K>>) -> Box<Node<K>>
where
    K: Ord,
{
    let rotation = match (node.balance_factor(), &node.left, &node.right) {
        (-2, Some(left), _) if height(&left.right) > height(&left.left) => {
            Some(Rotation::LeftRight)
        }
        (-2, _, _) => Some(Rotation::LeftLeft),
        (2, _, Some(right)) if height(&right.left) > height(&right.right) => {
            Some(Rotation::RightLeft)
        }
        (2, _, _) => Some(Rotation::RightRight),
        _ => None,
    };

    let mut node = match rotation {
        Some(rotation) => rotation.apply(node),
        None => node,
    };
    node.fix_height();
    node.check_invariants();
    node
}
