//! Fixed-width vertex sets backed by a bitset.

use fixedbitset::FixedBitSet;

use crate::graph::VertexId;

/// A set of vertices over a fixed universe 0..capacity.
///
/// All set operations the search performs (intersection emptiness, smallest
/// common element, union with a single vertex) are O(capacity / word_size).
#[derive(Clone, PartialEq, Eq)]
pub struct VertexSet {
    bits: FixedBitSet,
}

impl VertexSet {
    /// Create an empty set over a universe of `capacity` vertices.
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// Create a one-element set.
    pub fn singleton(capacity: usize, vertex: VertexId) -> Self {
        let mut set = Self::new(capacity);
        set.insert(vertex);
        set
    }

    /// The size of the universe this set ranges over.
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Number of vertices in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.bits.contains(vertex.index())
    }

    pub fn insert(&mut self, vertex: VertexId) {
        self.bits.insert(vertex.index());
    }

    pub fn remove(&mut self, vertex: VertexId) {
        self.bits.set(vertex.index(), false);
    }

    /// True if `self` and `other` share no vertex.
    pub fn is_disjoint(&self, other: &VertexSet) -> bool {
        self.bits.is_disjoint(&other.bits)
    }

    /// The smallest vertex present in both sets, if any.
    ///
    /// This is the deterministic choice the tree descent relies on.
    pub fn intersection_first(&self, other: &VertexSet) -> Option<VertexId> {
        self.bits
            .ones()
            .find(|&index| other.bits.contains(index))
            .map(VertexId::new)
    }

    /// Add every vertex of `other` to `self`.
    pub fn union_with(&mut self, other: &VertexSet) {
        self.bits.union_with(&other.bits);
    }

    /// The vertices present in both sets.
    pub fn intersection(&self, other: &VertexSet) -> VertexSet {
        let mut bits = self.bits.clone();
        bits.intersect_with(&other.bits);
        Self { bits }
    }

    /// Iterate the vertices in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.bits.ones().map(VertexId::new)
    }
}

impl std::fmt::Debug for VertexSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter().map(VertexId::as_u32)).finish()
    }
}

impl FromIterator<VertexId> for VertexSet {
    /// Collect vertices into a set sized to fit the largest id.
    ///
    /// Mostly useful in tests; algorithm code sizes sets to the graph.
    fn from_iter<I: IntoIterator<Item = VertexId>>(iter: I) -> Self {
        let vertices: Vec<VertexId> = iter.into_iter().collect();
        let capacity = vertices
            .iter()
            .map(|v| v.index() + 1)
            .max()
            .unwrap_or(0);
        let mut set = Self::new(capacity);
        for vertex in vertices {
            set.insert(vertex);
        }
        set
    }
}
