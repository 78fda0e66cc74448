//! # Identity Tables
//!
//! Append-only maps from dense index to user-facing data: the user id of a
//! vertex or edge, and the two endpoints of an edge.

use crate::{EdgeIndex, VertexIndex};

/// Dense index → user id. There is no reverse lookup.
#[derive(Debug, Clone)]
pub struct IdentityTable<T> {
    ids: Vec<T>,
}

impl<T> IdentityTable<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { ids: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
        }
    }

    /// Append an id. Returns the index it was assigned (the previous length).
    pub fn push(&mut self, id: T) -> usize {
        let index = self.ids.len();
        self.ids.push(id);
        index
    }

    /// Id stored at `index`. The caller guarantees `index < len()`.
    #[must_use]
    pub fn get(&self, index: usize) -> &T {
        &self.ids[index]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.ids.iter()
    }
}

impl<T> Default for IdentityTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Edge dense index → (source, destination) vertex dense indices.
///
/// Kept as two parallel columns so the source and destination tables can be
/// scanned independently.
#[derive(Debug, Clone, Default)]
pub struct EndpointTable {
    sources: Vec<VertexIndex>,
    destinations: Vec<VertexIndex>,
}

impl EndpointTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sources: Vec::with_capacity(capacity),
            destinations: Vec::with_capacity(capacity),
        }
    }

    /// Record the endpoints of the next edge. Returns its index.
    pub fn push(&mut self, src: VertexIndex, dst: VertexIndex) -> EdgeIndex {
        let index = EdgeIndex(self.sources.len());
        self.sources.push(src);
        self.destinations.push(dst);
        index
    }

    #[must_use]
    pub fn source(&self, edge: EdgeIndex) -> VertexIndex {
        self.sources[edge.0]
    }

    #[must_use]
    pub fn destination(&self, edge: EdgeIndex) -> VertexIndex {
        self.destinations[edge.0]
    }

    /// `(source, destination)` of an edge.
    #[must_use]
    pub fn endpoints(&self, edge: EdgeIndex) -> (VertexIndex, VertexIndex) {
        (self.source(edge), self.destination(edge))
    }

    /// Length of the source table.
    #[must_use]
    pub fn sources_len(&self) -> usize {
        self.sources.len()
    }

    /// Length of the destination table.
    #[must_use]
    pub fn destinations_len(&self) -> usize {
        self.destinations.len()
    }
}
