use balanced_bst::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and rebalances we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Delete(v) => {
                bst.delete(v);
                set.remove(v);
            }
            Op::Rebalance => bst.rebalance(),
        }
    }
}

/// Whether the values come out strictly ascending.
fn strictly_ascending<'a>(values: impl Iterator<Item = &'a i8> + Clone) -> bool {
    values.clone().zip(values.skip(1)).all(|(a, b)| a < b)
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    strictly_ascending(tree.in_order())
        && tree.len() == set.len()
        && set.iter().all(|v| tree.find(v).map(|n| n.value()) == Some(v))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.iter().copied());

    xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.iter().copied());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    strictly_ascending(tree.in_order())
        && deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn construct_is_balanced_and_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let expected: BTreeSet<i8> = xs.into_iter().collect();

    tree.is_balanced() && tree.in_order().eq(expected.iter())
}

#[quickcheck]
fn rebalance_restores_balance(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs);
    let before: Vec<i8> = tree.in_order().copied().collect();

    tree.rebalance();
    tree.is_balanced() && tree.in_order().copied().eq(before)
}

#[quickcheck]
fn inserting_a_duplicate_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree = Tree::from_values(xs.iter().copied());
    let before: Vec<i8> = tree.pre_order().copied().collect();

    for x in &xs {
        tree.insert(*x);
    }
    tree.pre_order().copied().eq(before)
}

#[quickcheck]
fn traversals_visit_every_value_once(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs);
    let in_order: Vec<&i8> = tree.in_order().collect();
    let mut level_order: Vec<&i8> = tree.level_order().collect();
    let mut pre_order: Vec<&i8> = tree.pre_order().collect();
    let mut post_order: Vec<&i8> = tree.post_order().collect();

    level_order.sort();
    pre_order.sort();
    post_order.sort();
    level_order == in_order && pre_order == in_order && post_order == in_order
}

#[quickcheck]
fn root_has_depth_zero_and_leaves_have_height_zero(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.iter().copied());
    let root_depth = if xs.is_empty() { -1 } else { 0 };

    tree.depth(tree.root()) == root_depth
        && xs.iter().all(|x| {
            let node = tree.find(x);
            let depth = tree.depth(node);
            depth >= 0
                && depth <= tree.height()
                && node.is_some_and(|n| !n.is_leaf() || n.height() == 0)
        })
}
