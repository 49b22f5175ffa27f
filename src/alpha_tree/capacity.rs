use super::{AlphaTree, DEFAULT_ALPHA};
use crate::raw::RawAlphaTree;

impl<K> AlphaTree<K> {
    /// Creates an empty tree with the default balance factor and node
    /// storage for at least `capacity` keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_tree::AlphaTree;
    ///
    /// let tree: AlphaTree<i32> = AlphaTree::with_capacity(32);
    /// assert!(tree.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AlphaTree {
            raw: RawAlphaTree::with_capacity(DEFAULT_ALPHA, capacity),
        }
    }

    /// Returns the number of keys the tree can hold without reallocating its
    /// node storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_tree::AlphaTree;
    ///
    /// let tree: AlphaTree<i32> = AlphaTree::with_capacity(32);
    /// assert_eq!(tree.capacity(), 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
