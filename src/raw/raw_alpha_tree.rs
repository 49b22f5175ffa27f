use alloc::vec;
use alloc::vec::Vec;

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;

/// Work stack for the flattener: (subtree root, base index of its slice).
type FlattenStack = SmallVec<[(Handle, usize); 32]>;

/// The core weight-balanced tree backing `AlphaTree`.
///
/// Nodes live in an arena and reference their children by [`Handle`], so the
/// whole structure is freed by arena teardown rather than by walking the
/// tree. Rebalancing never allocates: it flattens the offending subtree into
/// a scratch buffer of handles and relinks the same nodes.
#[derive(Clone)]
pub(crate) struct RawAlphaTree<K> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Balance factor: the largest fraction of a subtree's nodes that any
    /// single child subtree may hold. Fixed at construction, not validated.
    alpha: f64,
    /// Total number of inserted keys.
    len: usize,
}

impl<K> RawAlphaTree<K> {
    /// Creates a new, empty tree with the given balance factor.
    pub(crate) const fn new(alpha: f64) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            alpha,
            len: 0,
        }
    }

    /// Creates a new tree with node storage for at least `capacity` keys.
    pub(crate) fn with_capacity(alpha: f64, capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            alpha,
            len: 0,
        }
    }

    /// Returns the number of keys in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no keys.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the tree's balance factor.
    pub(crate) const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the node capacity of the tree.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Drops every node, leaving an empty tree with the same balance factor.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Number of nodes in the subtree rooted at `node`; zero when absent.
    #[inline]
    fn subtree_size(&self, node: Option<Handle>) -> usize {
        node.map_or(0, |handle| self.nodes.get(handle).count() + 1)
    }

    /// The α-weight predicate: neither child subtree may hold more than
    /// `alpha` times the nodes of the subtree rooted at `handle`.
    ///
    /// Pure and O(1); reads only cached counts. The caller must have already
    /// brought `handle`'s own count up to date.
    #[allow(clippy::cast_precision_loss)]
    fn is_balanced(&self, handle: Handle) -> bool {
        let node = self.nodes.get(handle);
        let bound = (node.count() + 1) as f64 * self.alpha;
        self.subtree_size(node.left()) as f64 <= bound && self.subtree_size(node.right()) as f64 <= bound
    }
}

impl<K: Ord> RawAlphaTree<K> {
    /// Inserts a key, restoring the α-weight invariant if the descent broke it.
    ///
    /// The descent increments the cached count of every node on the path to
    /// the new leaf and evaluates the balance predicate at each node it moves
    /// through. Only the *first* (topmost) node that fails the predicate is
    /// remembered; after the leaf is attached, that subtree is rebuilt and
    /// spliced back into the parent recorded at check time. Equal keys
    /// descend right, so duplicates form a stable insertion-ordered run.
    pub(crate) fn insert(&mut self, key: K) {
        self.len += 1;

        let Some(root) = self.root else {
            let leaf = self.nodes.alloc(Node::new(key));
            self.root = Some(leaf);
            return;
        };

        // The root gains a descendant no matter where the key lands.
        self.nodes.get_mut(root).add_descendant();

        let mut cur = root;
        let mut parent: Option<Handle> = None;
        // Topmost node whose α bound broke, with its parent at check time.
        let mut rebuild: Option<(Handle, Option<Handle>)> = None;

        loop {
            let node = self.nodes.get(cur);
            let goes_left = key < *node.key();
            let next = if goes_left { node.left() } else { node.right() };

            let Some(next) = next else {
                let leaf = self.nodes.alloc(Node::new(key));
                let node = self.nodes.get_mut(cur);
                if goes_left {
                    node.set_left(Some(leaf));
                } else {
                    node.set_right(Some(leaf));
                }
                break;
            };

            // The chosen child subtree is about to gain the new key; bump its
            // count before judging `cur` so the check sees post-insert sizes.
            self.nodes.get_mut(next).add_descendant();
            if rebuild.is_none() && !self.is_balanced(cur) {
                rebuild = Some((cur, parent));
            }

            parent = Some(cur);
            cur = next;
        }

        if let Some((subtree, subtree_parent)) = rebuild {
            let replacement = self.rebuild(subtree);
            self.splice(subtree, subtree_parent, replacement);
        }
    }

    /// Rebuilds the subtree rooted at `subtree` into minimum height, reusing
    /// the existing nodes, and returns the handle of the new subtree root.
    fn rebuild(&mut self, subtree: Handle) -> Handle {
        let size = self.nodes.get(subtree).count() + 1;
        if size <= 1 {
            return subtree;
        }

        let mut slots: Vec<Option<Handle>> = vec![None; size];
        self.flatten_into(subtree, &mut slots);

        self.build_balanced(&slots)
            .expect("`RawAlphaTree::rebuild()` - flattened a non-empty subtree into nothing!")
    }

    /// Writes every node of the subtree into `slots` in ascending key order.
    ///
    /// Destinations come from the cached counts alone: within its slice of
    /// `slots`, a node lands at an offset equal to the size of its left
    /// subtree. No keys are compared. Runs in O(n) with an explicit stack, so
    /// a deep unbalanced subtree cannot exhaust the call stack.
    fn flatten_into(&self, subtree: Handle, slots: &mut [Option<Handle>]) {
        let mut stack = FlattenStack::new();
        stack.push((subtree, 0));

        while let Some((handle, base)) = stack.pop() {
            let node = self.nodes.get(handle);
            let slot = base + self.subtree_size(node.left());

            debug_assert!(
                slots[slot].is_none(),
                "`RawAlphaTree::flatten_into()` - slot {slot} written twice; cached counts are stale!"
            );
            slots[slot] = Some(handle);

            if let Some(left) = node.left() {
                stack.push((left, base));
            }
            if let Some(right) = node.right() {
                stack.push((right, slot + 1));
            }
        }
    }

    /// Relinks `slots` (node handles in ascending key order) into a
    /// minimum-height subtree and returns its root; `None` for an empty
    /// slice. Each node's count is recomputed from its slice length.
    ///
    /// Recursion depth is logarithmic in the slice length by construction.
    fn build_balanced(&mut self, slots: &[Option<Handle>]) -> Option<Handle> {
        if slots.is_empty() {
            return None;
        }

        let mid = slots.len() / 2;
        let root = slots[mid].expect("`RawAlphaTree::build_balanced()` - missing node in flattened slot!");

        let left = self.build_balanced(&slots[..mid]);
        let right = self.build_balanced(&slots[mid + 1..]);

        let node = self.nodes.get_mut(root);
        node.set_count(slots.len() - 1);
        node.set_left(left);
        node.set_right(right);
        Some(root)
    }

    /// Replaces the child slot that pointed at `old` with `new`: `parent`'s
    /// link, or the root slot when `parent` is `None`.
    fn splice(&mut self, old: Handle, parent: Option<Handle>, new: Handle) {
        match parent {
            Some(parent) => {
                let node = self.nodes.get_mut(parent);
                if node.left() == Some(old) {
                    node.set_left(Some(new));
                } else {
                    debug_assert!(
                        node.right() == Some(old),
                        "`RawAlphaTree::splice()` - recorded parent does not link to the rebuilt subtree!"
                    );
                    node.set_right(Some(new));
                }
            }
            None => self.root = Some(new),
        }
    }
}
