//! Collects the keys of a subtree in the classic visit orders.

use std::collections::VecDeque;

use crate::node::{Link, Node};

/// Node, then left subtree, then right subtree.
pub(crate) fn pre_order<'a, K>(link: &'a Link<K>, keys: &mut Vec<&'a K>) {
    if let Some(node) = link {
        keys.push(&node.key);
        pre_order(&node.left, keys);
        pre_order(&node.right, keys);
    }
}

/// Left subtree, then node, then right subtree. This yields the keys in ascending order.
pub(crate) fn in_order<'a, K>(link: &'a Link<K>, keys: &mut Vec<&'a K>) {
    if let Some(node) = link {
        in_order(&node.left, keys);
        keys.push(&node.key);
        in_order(&node.right, keys);
    }
}

pub(crate) fn post_order<'a, K>(link: &'a Link<K>, keys: &mut Vec<&'a K>) {
    if let Some(node) = link {
        post_order(&node.left, keys);
        post_order(&node.right, keys);
        keys.push(&node.key);
    }
}

/// Breadth first, root first and each level left to right.
pub(crate) fn level_order<'a, K>(link: &'a Link<K>, keys: &mut Vec<&'a K>) {
    let mut queue: VecDeque<&'a Node<K>> = link.as_deref().into_iter().collect();
    while let Some(node) = queue.pop_front() {
        keys.push(&node.key);
        queue.extend(node.left.as_deref());
        queue.extend(node.right.as_deref());
    }
}
