use core::fmt;

use crate::raw::RawAlphaTree;

mod capacity;

/// The default balance factor used by [`AlphaTree::new`].
///
/// Close enough to 0.5 that rebuilds restore near-perfect balance, with just
/// enough slack that a run of inserts into the same region does not trigger a
/// rebuild on every step.
pub const DEFAULT_ALPHA: f64 = 0.52;

/// A weight-balanced binary search tree with amortized partial rebuilding.
///
/// `AlphaTree` keeps its keys in sorted order and bounds its height by a
/// balance factor α: for every node, neither child subtree may hold more than
/// α times the nodes of the node's own subtree. When an insertion breaks that
/// bound, the topmost offending subtree is flattened into its sorted node
/// sequence and relinked as a minimum-height tree, with no rotations and no
/// new allocations beyond the inserted node itself. With `0.5 < α < 1` the height
/// stays within `log(n) / log(1/α)` levels, so insertion is amortized
/// O(log n).
///
/// Keys must implement [`Ord`]. Duplicate keys are kept: an equal key always
/// descends to the right, so duplicates form a stable run in insertion order.
/// It is a logic error for a key to be modified in such a way that its
/// ordering relative to any other key changes while it is in the tree.
///
/// This core is deliberately insertion-only. There is no `get`, `contains`,
/// `remove`, or iteration API; a consumer that needs queries should pair the
/// tree with a separate lookup structure.
///
/// # Examples
///
/// ```
/// use alpha_tree::AlphaTree;
///
/// let mut tree = AlphaTree::new();
///
/// // A worst case for a plain BST: strictly increasing keys.
/// for key in 0..1_000 {
///     tree.insert(key);
/// }
///
/// // Periodic rebuilds keep the height logarithmic anyway.
/// assert_eq!(tree.len(), 1_000);
/// ```
///
/// A custom balance factor trades rebuild frequency for height:
///
/// ```
/// use alpha_tree::AlphaTree;
///
/// // α near 1 almost never rebuilds; α near 0.5 stays near-perfectly flat.
/// let mut relaxed = AlphaTree::with_alpha(0.9);
/// relaxed.insert("a");
/// assert_eq!(relaxed.alpha(), 0.9);
/// ```
pub struct AlphaTree<K> {
    raw: RawAlphaTree<K>,
}

impl<K> AlphaTree<K> {
    /// Creates an empty tree with the default balance factor
    /// ([`DEFAULT_ALPHA`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_tree::{AlphaTree, DEFAULT_ALPHA};
    ///
    /// let tree: AlphaTree<i32> = AlphaTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.alpha(), DEFAULT_ALPHA);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self::with_alpha(DEFAULT_ALPHA)
    }

    /// Creates an empty tree with the given balance factor.
    ///
    /// The factor is not validated. Meaningful amortized behavior requires
    /// `0.5 < alpha < 1`: values at or below 0.5 can make the balance
    /// predicate unsatisfiable and rebuild constantly, while values at or
    /// above 1 never rebuild and degenerate to an unbalanced BST.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_tree::AlphaTree;
    ///
    /// let mut tree = AlphaTree::with_alpha(0.6);
    /// tree.insert(1);
    /// assert_eq!(tree.alpha(), 0.6);
    /// ```
    #[must_use]
    pub const fn with_alpha(alpha: f64) -> Self {
        AlphaTree {
            raw: RawAlphaTree::new(alpha),
        }
    }

    /// Returns the tree's balance factor.
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.raw.alpha()
    }

    /// Returns the number of keys in the tree, including duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_tree::AlphaTree;
    ///
    /// let mut tree = AlphaTree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    /// assert_eq!(tree.len(), 2);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no keys.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Drops every key, keeping the balance factor and allocated capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_tree::AlphaTree;
    ///
    /// let mut tree = AlphaTree::new();
    /// tree.insert(1);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }
}

impl<K: Ord> AlphaTree<K> {
    /// Inserts a key into the tree.
    ///
    /// Duplicates are kept. A single insertion walks one root-to-leaf path;
    /// if the walk finds a node whose child subtree outgrew the α bound, the
    /// topmost such subtree is rebuilt to minimum height before returning.
    /// Whether a rebuild occurred is not observable to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_tree::AlphaTree;
    ///
    /// let mut tree = AlphaTree::new();
    /// tree.insert("pivot");
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) {
        self.raw.insert(key);
    }
}

impl<K> Default for AlphaTree<K> {
    /// Creates an empty tree with the default balance factor.
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone> Clone for AlphaTree<K> {
    fn clone(&self) -> Self {
        AlphaTree {
            raw: self.raw.clone(),
        }
    }
}

impl<K> fmt::Debug for AlphaTree<K> {
    // No iteration API exists, so the contents stay opaque here too.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaTree")
            .field("alpha", &self.alpha())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<K: Ord> Extend<K> for AlphaTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for AlphaTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = AlphaTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for AlphaTree<K> {
    /// Builds a tree with the default balance factor from an array of keys.
    ///
    /// ```
    /// use alpha_tree::AlphaTree;
    ///
    /// let tree = AlphaTree::from([3, 1, 2]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}
