//! Node IDs and child ranges for the flat tree arena.
//!
//! Nodes are `NodeId(u32)` indices instead of boxed children, and a node's
//! ordered children live in one shared list addressed by a `ChildRange`.

use std::fmt;

/// Index into a tree's node arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a new `NodeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Range of children in the flattened child list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ChildRange {
    pub start: u32,
    pub len: u32,
}

impl ChildRange {
    /// Empty range.
    pub const EMPTY: ChildRange = ChildRange { start: 0, len: 0 };

    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        ChildRange { start, len }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the number of children.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Slice bounds into the child list.
    #[inline]
    pub(crate) fn as_range(self) -> std::ops::Range<usize> {
        let start = self.start as usize;
        start..start + self.len()
    }
}

impl fmt::Debug for ChildRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChildRange({}..{})",
            self.start,
            u64::from(self.start) + u64::from(self.len)
        )
    }
}
