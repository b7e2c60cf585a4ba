use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use avl_tree::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: u32) -> usize {
    2usize.pow(num_levels) - 1
}

/// Builds a tree by inserting keys in ascending order. Without self-balancing this would be a
/// linked list, so it exercises a rotation on most inserts.
fn get_ascending_tree(num_levels: u32) -> Tree<i32> {
    (0..num_nodes_in_full_tree(num_levels) as i32).collect()
}

/// Builds a tree by inserting keys so that, even without any self-balancing, the resultant tree
/// would be full. No insert has to rotate.
fn get_balanced_tree(num_levels: u32) -> Tree<i32> {
    let xs = (0..num_nodes_in_full_tree(num_levels) as i32).collect::<Vec<_>>();
    let mut tree = Tree::new();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a tree.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// insertion orders before finishing the group. Each iteration gets its own clone of the tree
/// so mutations don't leak between iterations and cloning isn't timed.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let largest_key_in_tree = num_nodes_in_full_tree(num_levels) as i32 - 1;
        let tree_tests = [
            ("ascending", get_ascending_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_key_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_key_in_tree));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _key = black_box(tree.find(&i));
    });
    bench_helper(c, "remove", |tree, i| {
        tree.remove(&i);
    });
    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "find-miss", |tree, i| {
        let _key = black_box(tree.find(&(i + 1)));
    });
    bench_helper(c, "remove-miss", |tree, i| {
        tree.remove(&(i + 1));
    });

    bench_helper(c, "in-order", |tree, _| {
        black_box(tree.in_order());
    });
    bench_helper(c, "get-middle", |tree, i| {
        let _key = black_box(tree.get(i as usize / 2));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
