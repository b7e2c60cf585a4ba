use avl_tree::Tree;

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

#[quickcheck]
fn round_trip_is_sorted_and_deduplicated(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let expected: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    tree.len() == expected.len() && tree.in_order().into_iter().eq(expected.iter())
}

#[quickcheck]
fn insertion_order_does_not_matter(xs: Vec<i8>) -> bool {
    let forwards: Tree<_> = xs.iter().copied().collect();
    let backwards: Tree<_> = xs.iter().rev().copied().collect();

    forwards == backwards && forwards.to_string() == backwards.to_string()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let mut model: BTreeSet<_> = xs.into_iter().collect();

    let reported_alike = deletes
        .iter()
        .all(|delete| tree.remove(delete) == model.remove(delete));

    reported_alike
        && tree.is_balanced()
        && tree.len() == model.len()
        && deletes.iter().all(|x| !tree.contains(x))
        && model.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn height_stays_logarithmic(xs: Vec<u16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    // An AVL tree with n keys is never taller than 1.44 * lg(n + 2).
    let bound = 1.45 * ((tree.len() + 2) as f64).log2();
    tree.is_balanced() && (tree.height() as f64) <= bound
}

#[quickcheck]
fn extremes_and_indexing(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let sorted = tree.in_order();

    tree.minimum() == sorted.first().copied()
        && tree.maximum() == sorted.last().copied()
        && (0..=sorted.len()).all(|i| tree.get(i) == sorted.get(i).copied())
}

#[quickcheck]
fn clone_matches_and_is_independent(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut copy = tree.clone();

    let same_shape = copy.level_order() == tree.level_order() && copy.height() == tree.height();
    copy.clear();

    same_shape && copy.is_empty() && tree.len() == xs.iter().collect::<HashSet<_>>().len()
}
