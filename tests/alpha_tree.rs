use alpha_tree::{AlphaTree, DEFAULT_ALPHA};
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// Generates key values in a range that ensures duplicates.
fn key_strategy() -> impl Strategy<Value = i64> {
    -500i64..500i64
}

// ─── Construction ────────────────────────────────────────────────────────────

#[test]
fn new_uses_default_alpha() {
    let tree: AlphaTree<i32> = AlphaTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!((tree.alpha() - DEFAULT_ALPHA).abs() < f64::EPSILON);
}

#[test]
fn default_matches_new() {
    let tree: AlphaTree<i32> = AlphaTree::default();
    assert!(tree.is_empty());
    assert!((tree.alpha() - DEFAULT_ALPHA).abs() < f64::EPSILON);
}

#[test]
fn with_alpha_is_not_validated() {
    // Out-of-range factors are accepted; they only change balance behavior.
    let mut tree = AlphaTree::with_alpha(1.5);
    for key in 0..100 {
        tree.insert(key);
    }
    assert_eq!(tree.len(), 100);
    assert!((tree.alpha() - 1.5).abs() < f64::EPSILON);
}

#[test]
fn with_capacity_preallocates() {
    let tree: AlphaTree<i64> = AlphaTree::with_capacity(64);
    assert!(tree.is_empty());
    assert!(tree.capacity() >= 64);
}

// ─── Insertion and bookkeeping ───────────────────────────────────────────────

#[test]
fn insert_counts_duplicates() {
    let mut tree = AlphaTree::new();
    tree.insert(7);
    tree.insert(7);
    tree.insert(7);
    assert_eq!(tree.len(), 3);
    assert!(!tree.is_empty());
}

#[test]
fn ascending_insert_stress() {
    // Worst case for a plain BST; must complete without deep recursion or
    // pathological slowdown thanks to triggered rebuilds.
    let mut tree = AlphaTree::new();
    for key in 0..50_000i64 {
        tree.insert(key);
    }
    assert_eq!(tree.len(), 50_000);
}

#[test]
fn clear_keeps_the_tree_usable() {
    let mut tree: AlphaTree<i64> = (0..1_000).collect();
    assert_eq!(tree.len(), 1_000);

    tree.clear();
    assert!(tree.is_empty());

    tree.insert(1);
    assert_eq!(tree.len(), 1);
}

#[test]
fn from_array_and_extend() {
    let mut tree = AlphaTree::from([5, 3, 8, 1, 4]);
    assert_eq!(tree.len(), 5);

    tree.extend([7, 9, 2, 6]);
    assert_eq!(tree.len(), 9);
}

#[test]
fn clone_is_independent() {
    let mut tree: AlphaTree<i64> = (0..100).collect();
    let mut copy = tree.clone();

    copy.insert(100);
    assert_eq!(tree.len(), 100);
    assert_eq!(copy.len(), 101);

    tree.clear();
    assert_eq!(copy.len(), 101);
}

#[test]
fn debug_is_shape_free() {
    let tree: AlphaTree<i64> = (0..10).collect();
    let output = format!("{tree:?}");
    assert!(output.contains("alpha"));
    assert!(output.contains("len: 10"));
    // No iteration API, so no key may leak through Debug.
    assert!(!output.contains('9'));
}

// ─── Randomized bookkeeping ──────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum TreeOp {
    Insert(i64),
    Clear,
}

fn tree_op_strategy() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        50 => key_strategy().prop_map(TreeOp::Insert),
        1 => Just(TreeOp::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random operation sequence and checks len/is_empty
    /// bookkeeping against a trivial counter model.
    #[test]
    fn len_tracks_operations(ops in proptest::collection::vec(tree_op_strategy(), TEST_SIZE)) {
        let mut tree: AlphaTree<i64> = AlphaTree::new();
        let mut model: usize = 0;

        for op in &ops {
            match op {
                TreeOp::Insert(key) => {
                    tree.insert(*key);
                    model += 1;
                }
                TreeOp::Clear => {
                    tree.clear();
                    model = 0;
                }
            }
            prop_assert_eq!(tree.len(), model, "len mismatch after {:?}", op);
            prop_assert_eq!(tree.is_empty(), model == 0);
        }
    }

    /// Collecting from an iterator inserts every key exactly once.
    #[test]
    fn collect_matches_source_length(keys in proptest::collection::vec(key_strategy(), 0..TEST_SIZE)) {
        let tree: AlphaTree<i64> = keys.iter().copied().collect();
        prop_assert_eq!(tree.len(), keys.len());
    }
}
