//! Fixed-capacity entity pools.
//!
//! A pool owns all entity memory for the session. Spawning claims the
//! first inactive slot and mutates it in place; entities release their
//! slot by clearing their own active flag. A full pool drops the spawn —
//! never queues, never retries, never grows. That bound is the backstop
//! against runaway spawn storms and must hold for every pool.

/// A pool slot. Entities flip `active` themselves; the pool only scans it.
pub trait Slot {
    fn active(&self) -> bool;
    fn deactivate(&mut self);
}

/// Fixed-capacity pool over one entity type.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T: Slot + Default> Pool<T> {
    /// Allocate every slot up front. No allocation happens after this.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| T::default()).collect(),
        }
    }
}

impl<T: Slot> Pool<T> {
    /// Claim the first inactive slot, if any.
    ///
    /// Linear scan: capacities are small enough that a free list would buy
    /// nothing. The caller spawns into the returned slot; `None` means the
    /// spawn is dropped.
    pub fn acquire(&mut self) -> Option<&mut T> {
        self.slots.iter_mut().find(|slot| !slot.active())
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.active()).count()
    }

    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Iterate active slots only.
    pub fn iter_active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|slot| slot.active())
    }

    /// Deactivate every slot (session reset).
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.deactivate();
        }
    }
}
