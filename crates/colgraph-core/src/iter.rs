//! # Iterators
//!
//! Lazy, restartable sequences of handles.
//!
//! A range object (`Vertices`, `Edges`, `Neighbors`) holds only the graph
//! and the span it covers. Each call to `iter()` starts a fresh cursor, and
//! each step builds a new handle from the current index; nothing is cached.
//!
//! Cursor equality compares the current position only. Two cursors taken
//! from different ranges can compare equal, so only compare cursors that
//! came from the same range.

use crate::graph::GraphDb;
use crate::handle::{Edge, Vertex};
use crate::schema::Schema;
use crate::{EdgeIndex, VertexIndex};
use std::collections::{BTreeSet, btree_set};
use std::iter::FusedIterator;

// =============================================================================
// VERTICES
// =============================================================================

/// Vertices with dense index in `[start, end)`.
pub struct Vertices<'g, S: Schema> {
    db: &'g GraphDb<S>,
    start: usize,
    end: usize,
}

impl<'g, S: Schema> Vertices<'g, S> {
    pub(crate) fn new(db: &'g GraphDb<S>, start: usize, end: usize) -> Self {
        Self { db, start, end }
    }

    /// Start a new traversal.
    #[must_use]
    pub fn iter(&self) -> VertexIter<'g, S> {
        self.begin()
    }

    /// Cursor at the first vertex.
    #[must_use]
    pub fn begin(&self) -> VertexIter<'g, S> {
        VertexIter {
            db: self.db,
            pos: self.start,
            end: self.end,
        }
    }

    /// Cursor one past the last vertex.
    #[must_use]
    pub fn end(&self) -> VertexIter<'g, S> {
        VertexIter {
            db: self.db,
            pos: self.end,
            end: self.end,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<S: Schema> Clone for Vertices<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Schema> Copy for Vertices<'_, S> {}

impl<'g, S: Schema> IntoIterator for Vertices<'g, S> {
    type Item = Vertex<'g, S>;
    type IntoIter = VertexIter<'g, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

impl<'g, S: Schema> IntoIterator for &Vertices<'g, S> {
    type Item = Vertex<'g, S>;
    type IntoIter = VertexIter<'g, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

/// Cursor over a vertex range.
pub struct VertexIter<'g, S: Schema> {
    db: &'g GraphDb<S>,
    pos: usize,
    end: usize,
}

impl<'g, S: Schema> Iterator for VertexIter<'g, S> {
    type Item = Vertex<'g, S>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.end {
            return None;
        }
        let vertex = Vertex::new(self.db, VertexIndex(self.pos));
        self.pos += 1;
        Some(vertex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

impl<S: Schema> DoubleEndedIterator for VertexIter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.pos >= self.end {
            return None;
        }
        self.end -= 1;
        Some(Vertex::new(self.db, VertexIndex(self.end)))
    }
}

impl<S: Schema> ExactSizeIterator for VertexIter<'_, S> {}

impl<S: Schema> FusedIterator for VertexIter<'_, S> {}

impl<S: Schema> Clone for VertexIter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            db: self.db,
            pos: self.pos,
            end: self.end,
        }
    }
}

impl<S: Schema> PartialEq for VertexIter<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

// =============================================================================
// EDGES
// =============================================================================

/// Edges with dense index in `[start, end)`.
pub struct Edges<'g, S: Schema> {
    db: &'g GraphDb<S>,
    start: usize,
    end: usize,
}

impl<'g, S: Schema> Edges<'g, S> {
    pub(crate) fn new(db: &'g GraphDb<S>, start: usize, end: usize) -> Self {
        Self { db, start, end }
    }

    /// Start a new traversal.
    #[must_use]
    pub fn iter(&self) -> EdgeIter<'g, S> {
        self.begin()
    }

    /// Cursor at the first edge.
    #[must_use]
    pub fn begin(&self) -> EdgeIter<'g, S> {
        EdgeIter {
            db: self.db,
            pos: self.start,
            end: self.end,
        }
    }

    /// Cursor one past the last edge.
    #[must_use]
    pub fn end(&self) -> EdgeIter<'g, S> {
        EdgeIter {
            db: self.db,
            pos: self.end,
            end: self.end,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<S: Schema> Clone for Edges<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Schema> Copy for Edges<'_, S> {}

impl<'g, S: Schema> IntoIterator for Edges<'g, S> {
    type Item = Edge<'g, S>;
    type IntoIter = EdgeIter<'g, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

impl<'g, S: Schema> IntoIterator for &Edges<'g, S> {
    type Item = Edge<'g, S>;
    type IntoIter = EdgeIter<'g, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

/// Cursor over an edge range. Endpoints come from the graph's endpoint
/// table as each handle is built.
pub struct EdgeIter<'g, S: Schema> {
    db: &'g GraphDb<S>,
    pos: usize,
    end: usize,
}

impl<'g, S: Schema> Iterator for EdgeIter<'g, S> {
    type Item = Edge<'g, S>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.end {
            return None;
        }
        let edge = self.db.edge_at(EdgeIndex(self.pos));
        self.pos += 1;
        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

impl<S: Schema> DoubleEndedIterator for EdgeIter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.pos >= self.end {
            return None;
        }
        self.end -= 1;
        Some(self.db.edge_at(EdgeIndex(self.end)))
    }
}

impl<S: Schema> ExactSizeIterator for EdgeIter<'_, S> {}

impl<S: Schema> FusedIterator for EdgeIter<'_, S> {}

impl<S: Schema> Clone for EdgeIter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            db: self.db,
            pos: self.pos,
            end: self.end,
        }
    }
}

impl<S: Schema> PartialEq for EdgeIter<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

// =============================================================================
// NEIGHBORS
// =============================================================================

/// Outgoing edges of one vertex, in ascending edge index order.
pub struct Neighbors<'g, S: Schema> {
    db: &'g GraphDb<S>,
    edges: Option<&'g BTreeSet<EdgeIndex>>,
}

impl<'g, S: Schema> Neighbors<'g, S> {
    pub(crate) fn new(db: &'g GraphDb<S>, edges: Option<&'g BTreeSet<EdgeIndex>>) -> Self {
        Self { db, edges }
    }

    /// Start a new traversal.
    #[must_use]
    pub fn iter(&self) -> NeighborIter<'g, S> {
        self.begin()
    }

    /// Cursor at the first outgoing edge.
    #[must_use]
    pub fn begin(&self) -> NeighborIter<'g, S> {
        NeighborIter {
            db: self.db,
            inner: self.edges.map(BTreeSet::iter),
            pos: 0,
        }
    }

    /// Cursor one past the last outgoing edge. It yields nothing.
    #[must_use]
    pub fn end(&self) -> NeighborIter<'g, S> {
        NeighborIter {
            db: self.db,
            inner: None,
            pos: self.len(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.map_or(0, BTreeSet::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: Schema> Clone for Neighbors<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Schema> Copy for Neighbors<'_, S> {}

impl<'g, S: Schema> IntoIterator for Neighbors<'g, S> {
    type Item = Edge<'g, S>;
    type IntoIter = NeighborIter<'g, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'g, S: Schema> IntoIterator for &Neighbors<'g, S> {
    type Item = Edge<'g, S>;
    type IntoIter = NeighborIter<'g, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over a vertex's outgoing edges.
pub struct NeighborIter<'g, S: Schema> {
    db: &'g GraphDb<S>,
    inner: Option<btree_set::Iter<'g, EdgeIndex>>,
    pos: usize,
}

impl<'g, S: Schema> Iterator for NeighborIter<'g, S> {
    type Item = Edge<'g, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = *self.inner.as_mut()?.next()?;
        self.pos += 1;
        Some(self.db.edge_at(edge))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<S: Schema> ExactSizeIterator for NeighborIter<'_, S> {}

impl<S: Schema> FusedIterator for NeighborIter<'_, S> {}

impl<S: Schema> Clone for NeighborIter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            db: self.db,
            inner: self.inner.clone(),
            pos: self.pos,
        }
    }
}

impl<S: Schema> PartialEq for NeighborIter<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct TestSchema;

    impl Schema for TestSchema {
        type VertexId = u32;
        type VertexProps = ();
        type EdgeId = u32;
        type EdgeProps = (u8,);
    }

    fn chain(len: u32) -> GraphDb<TestSchema> {
        let mut db = GraphDb::new();
        let mut prev = None;
        for id in 0..len {
            let v = db.add_vertex(id);
            if let Some(p) = prev {
                db.add_edge(id, p, v).expect("edge");
            }
            prev = Some(v);
        }
        db
    }

    #[test]
    fn vertices_ascending_and_complete() {
        let db = chain(4);
        let ids: Vec<u32> = db.get_vertices().iter().map(|v| *v.id()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(db.get_vertices().len(), 4);
    }

    #[test]
    fn ranges_are_restartable() {
        let db = chain(3);
        let vertices = db.get_vertices();

        let first: Vec<_> = vertices.iter().map(|v| v.index()).collect();
        let second: Vec<_> = vertices.into_iter().map(|v| v.index()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn edge_ranges_are_restartable() {
        let db = chain(4);
        let edges = db.get_edges();

        let first: Vec<_> = edges.iter().map(|e| e.index()).collect();
        let second: Vec<_> = edges.iter().map(|e| e.index()).collect();
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn neighbor_ranges_are_restartable() {
        let mut db = chain(3);
        db.add_edge(100u32, VertexIndex(0), VertexIndex(2)).expect("edge");
        let v = db.vertex(VertexIndex(0)).expect("vertex");
        let neighbors = v.neighbors();

        let first: Vec<u32> = neighbors.iter().map(|e| *e.id()).collect();
        let second: Vec<u32> = (&neighbors).into_iter().map(|e| *e.id()).collect();
        assert_eq!(first, vec![1, 100]);
        assert_eq!(first, second);
    }

    #[test]
    fn neighbor_begin_advanced_to_end_equals_end() {
        let mut db = chain(3);
        db.add_edge(100u32, VertexIndex(0), VertexIndex(2)).expect("edge");
        let v = db.vertex(VertexIndex(0)).expect("vertex");
        let neighbors = v.neighbors();

        let mut cursor = neighbors.begin();
        let mut steps = 0;
        while cursor != neighbors.end() {
            cursor.next();
            steps += 1;
        }
        assert_eq!(steps, 2);
        assert!(cursor.next().is_none());
        assert!(neighbors.end().next().is_none());

        let tail = db.vertex(VertexIndex(2)).expect("vertex");
        assert!(tail.neighbors().begin() == tail.neighbors().end());
    }

    #[test]
    fn begin_advanced_to_end_equals_end() {
        let db = chain(3);
        let vertices = db.get_vertices();

        let mut cursor = vertices.begin();
        let mut steps = 0;
        while cursor != vertices.end() {
            cursor.next();
            steps += 1;
        }
        assert_eq!(steps, 3);
        assert!(cursor.next().is_none());
    }

    #[test]
    fn edges_carry_endpoints_from_table() {
        let db = chain(3);
        let endpoints: Vec<_> = db.get_edges().iter().map(|e| e.endpoints()).collect();
        assert_eq!(
            endpoints,
            vec![
                (VertexIndex(0), VertexIndex(1)),
                (VertexIndex(1), VertexIndex(2)),
            ]
        );
    }

    #[test]
    fn iterators_run_backwards() {
        let db = chain(3);
        let ids: Vec<u32> = db.get_vertices().iter().rev().map(|v| *v.id()).collect();
        assert_eq!(ids, vec![2, 1, 0]);

        let last = db.get_edges().iter().next_back().map(|e| *e.id());
        assert_eq!(last, Some(2));
    }

    #[test]
    fn iterators_report_exact_size() {
        let db = chain(5);
        let mut edges = db.get_edges().iter();
        assert_eq!(edges.len(), 4);
        edges.next();
        assert_eq!(edges.len(), 3);
    }

    #[test]
    fn empty_graph_yields_nothing() {
        let db = GraphDb::<TestSchema>::new();
        assert!(db.get_vertices().is_empty());
        assert!(db.get_edges().iter().next().is_none());
        assert!(db.get_vertices().begin() == db.get_vertices().end());
    }

    #[test]
    fn neighbors_follow_adjacency() {
        let mut db = chain(3);
        let hub = VertexIndex(0);
        db.add_edge(100u32, hub, VertexIndex(2)).expect("edge");

        let v = db.vertex(hub).expect("vertex");
        let ids: Vec<u32> = v.neighbors().iter().map(|e| *e.id()).collect();
        assert_eq!(ids, vec![1, 100]);
        assert_eq!(v.neighbors().len(), 2);

        let tail = db.vertex(VertexIndex(2)).expect("vertex");
        assert!(tail.neighbors().is_empty());
        assert_eq!(tail.neighbors().iter().count(), 0);
    }

    #[test]
    fn neighbor_edges_expose_properties() {
        let mut db = GraphDb::<TestSchema>::new();
        let a = db.add_vertex(1u32);
        let b = db.add_vertex(2u32);
        db.add_edge_with(7u32, a, b, (9,)).expect("edge");

        let v = db.vertex(a).expect("vertex");
        for edge in v.neighbors() {
            assert_eq!(*edge.property::<0>(), 9);
            assert_eq!(*edge.dst().id(), 2);
        }
    }
}
