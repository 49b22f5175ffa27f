use super::handle::Handle;

/// A single tree node: one inserted key plus its cached descendant count and
/// child links.
///
/// `count` is the number of *descendants*, so the subtree rooted at this node
/// holds `count + 1` nodes. The count is maintained incrementally during
/// insertion and recomputed wholesale when a subtree is rebuilt.
#[derive(Clone)]
pub(crate) struct Node<K> {
    key: K,
    count: usize,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<K> Node<K> {
    /// Creates a new childless node for a freshly inserted key.
    pub(crate) const fn new(key: K) -> Self {
        Self {
            key,
            count: 0,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    /// Number of descendant nodes (excluding this node itself).
    #[inline]
    pub(crate) const fn count(&self) -> usize {
        self.count
    }

    /// Records that one more node now lives somewhere below this one.
    #[inline]
    pub(crate) const fn add_descendant(&mut self) {
        self.count += 1;
    }

    pub(crate) const fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    pub(crate) const fn set_left(&mut self, left: Option<Handle>) {
        self.left = left;
    }

    pub(crate) const fn set_right(&mut self, right: Option<Handle>) {
        self.right = right;
    }
}
