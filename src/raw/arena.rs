use alloc::vec::Vec;

use super::handle::Handle;

/// Slab that owns every node of a tree.
///
/// This arena is allocate-only: the tree has no single-key removal, and a
/// rebuild relinks existing nodes in place rather than replacing them. All
/// nodes are released at once by [`Arena::clear`] or by dropping the arena,
/// so destruction never recurses through the tree structure.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<T>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        // Strict less-than so the new slot's index stays within Handle::MAX.
        assert!(
            self.slots.len() < Handle::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Handle::MAX
        );
        self.slots.push(element);
        Handle::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        &self.slots[handle.to_index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        &mut self.slots[handle.to_index()]
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}
