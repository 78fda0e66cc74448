//! # Adjacency Index
//!
//! Vertex → set of outgoing edges. Sets hold edge indices, not destination
//! vertices, so parallel edges between the same pair of vertices stay
//! distinct. `BTreeMap`/`BTreeSet` give a deterministic, ascending order.

use crate::{EdgeIndex, VertexIndex};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    /// source vertex -> outgoing edges
    outgoing: BTreeMap<VertexIndex, BTreeSet<EdgeIndex>>,
}

impl AdjacencyIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `edge` as outgoing from `src`.
    /// Returns `false` if it was already recorded (no-op).
    pub fn insert(&mut self, src: VertexIndex, edge: EdgeIndex) -> bool {
        self.outgoing.entry(src).or_default().insert(edge)
    }

    /// Outgoing edges of `src`, or `None` if it has none.
    #[must_use]
    pub fn outgoing(&self, src: VertexIndex) -> Option<&BTreeSet<EdgeIndex>> {
        self.outgoing.get(&src)
    }

    #[must_use]
    pub fn out_degree(&self, src: VertexIndex) -> usize {
        self.outgoing.get(&src).map_or(0, BTreeSet::len)
    }

    /// Total number of recorded edges across all vertices.
    #[must_use]
    pub fn total(&self) -> usize {
        self.outgoing.values().map(BTreeSet::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_vertex_has_no_outgoing() {
        let index = AdjacencyIndex::new();
        assert!(index.outgoing(VertexIndex(0)).is_none());
        assert_eq!(index.out_degree(VertexIndex(0)), 0);
    }

    #[test]
    fn duplicate_insert_is_noop() {
        let mut index = AdjacencyIndex::new();
        assert!(index.insert(VertexIndex(0), EdgeIndex(0)));
        assert!(!index.insert(VertexIndex(0), EdgeIndex(0)));
        assert_eq!(index.total(), 1);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut index = AdjacencyIndex::new();
        index.insert(VertexIndex(0), EdgeIndex(0));
        index.insert(VertexIndex(0), EdgeIndex(1));

        assert_eq!(index.out_degree(VertexIndex(0)), 2);
    }

    #[test]
    fn outgoing_is_ascending() {
        let mut index = AdjacencyIndex::new();
        index.insert(VertexIndex(2), EdgeIndex(5));
        index.insert(VertexIndex(2), EdgeIndex(1));
        index.insert(VertexIndex(2), EdgeIndex(3));

        let edges: Vec<_> = index
            .outgoing(VertexIndex(2))
            .into_iter()
            .flatten()
            .copied()
            .collect();
        assert_eq!(edges, vec![EdgeIndex(1), EdgeIndex(3), EdgeIndex(5)]);
    }
}
