use std::fmt::Debug;
use std::hash::Hash;

/// Identities of vertices.
///
/// Any type that can be compared, hashed and cloned will do.
pub trait Vertex: Clone + Eq + Ord + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Ord + Hash + Debug {}

/// Index of a row (and the same column) in an adjacency matrix.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct SlotId(usize);

/// A factory to hand out [SlotId]s in increasing order, up to a fixed capacity.
///
/// Slots are never handed out twice.
#[derive(Debug, Clone)]
pub struct SlotIdFactory {
    next: usize,
    capacity: usize,
}

impl SlotIdFactory {
    pub fn new(capacity: usize) -> Self {
        Self { next: 0, capacity }
    }

    /// Returns `None` once `capacity` slots have been issued.
    pub fn one_more(&mut self) -> Option<SlotId> {
        if self.next >= self.capacity {
            return None;
        }
        let cur = self.next;
        self.next += 1;
        Some(SlotId(cur))
    }

    pub fn issued(&self) -> usize {
        self.next
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.next
    }
}

impl SlotId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}
