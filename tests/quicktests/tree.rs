use treegrid::grid::Cell;
use treegrid::tree::{Removal, Tree};

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a vector.
/// This way we can ensure that after a random smattering of inserts
/// and removes we hold the same multiset of values.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, model: &mut Vec<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(value) => {
                tree.insert(value.clone());
                model.push(value.clone());
            }
            Op::Remove(value) => {
                let expected = match model.iter().position(|x| x == value) {
                    Some(position) => {
                        model.remove(position);
                        Removal::Removed
                    }
                    None => Removal::NotFound,
                };
                assert_eq!(tree.remove(value), expected);
            }
        }
    }
}

/// Builds a tree holding at most the first ten values. Rendering allocates
/// `2^height` columns, so the properties that render keep trees shallow.
fn small_tree(mut xs: Vec<i8>) -> (Tree<i8>, Vec<i8>) {
    xs.truncate(10);

    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    (tree, xs)
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);

    model.sort();
    tree.iter().eq(model.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - each
        // removal takes out at most one occurrence.
        let outcome = tree.remove(delete);
        match still_present.iter().position(|x| x == delete) {
            Some(position) => {
                still_present.swap_remove(position);
                if outcome != Removal::Removed {
                    return false;
                }
            }
            None => {
                if outcome != Removal::NotFound {
                    return false;
                }
            }
        }
    }

    still_present.sort();
    tree.iter().eq(still_present.iter())
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let mut sorted = xs;
    sorted.sort();
    tree.iter().eq(sorted.iter())
}

#[quickcheck]
fn render_dimensions_follow_height(xs: Vec<i8>) -> bool {
    let (tree, _) = small_tree(xs);

    let grid = tree.render();
    let height = tree.height();
    grid.rows() == height && grid.columns() == (1 << height) - 1
}

#[quickcheck]
fn render_columns_match_in_order(xs: Vec<i8>) -> bool {
    let (tree, mut xs) = small_tree(xs);

    // Each node's column is its in-order rank, so reading the value cells
    // left to right recovers sorted order.
    let mut cells: Vec<(usize, i8)> = tree
        .render()
        .iter()
        .filter_map(|(_, column, cell)| match cell {
            Cell::Value(value) => Some((column, **value)),
            Cell::Absent | Cell::Unused => None,
        })
        .collect();
    cells.sort_by_key(|(column, _)| *column);

    let values: Vec<i8> = cells.into_iter().map(|(_, value)| value).collect();
    xs.sort();
    values == xs
}
