//! # Graph Engine
//!
//! The schema-typed graph database for colgraph.
//!
//! `GraphDb<S>` owns every table: the vertex and edge identity tables, the
//! vertex and edge column stores, the edge endpoint table and the adjacency
//! index. Mutations append to all of them in lock-step, so for every entity
//! kind the id table, every property column and (for edges) both endpoint
//! tables always have the same length.

use crate::config::GraphConfig;
use crate::handle::{Edge, EdgeMut, Vertex, VertexMut};
use crate::iter::{Edges, Vertices};
use crate::schema::{Schema, Slot};
use crate::storage::{AdjacencyIndex, ColumnStore, EndpointTable, IdentityTable};
use crate::{EdgeIndex, GraphError, VertexIndex};
use std::fmt;

// =============================================================================
// GRAPH DATABASE
// =============================================================================

/// In-memory property graph parameterized by a [`Schema`].
///
/// Vertices and edges are append-only. The dense indices returned by
/// [`add_vertex`](Self::add_vertex) and [`add_edge`](Self::add_edge) are
/// permanent handles; pass them back to [`vertex`](Self::vertex),
/// [`edge`](Self::edge) and friends to read or write the entity.
///
/// ```
/// use colgraph_core::{GraphDb, Schema};
///
/// struct Roads;
///
/// impl Schema for Roads {
///     type VertexId = String;
///     type VertexProps = (u32,);
///     type EdgeId = String;
///     type EdgeProps = (i64, String);
/// }
///
/// let mut db = GraphDb::<Roads>::new();
/// let a = db.add_vertex("a");
/// let b = db.add_vertex_with("b", (120,));
/// let road = db.add_edge_with("a-b", a, b, (7, "toll".to_string()))?;
///
/// let edge = db.edge(road)?;
/// assert_eq!(edge.src().id(), "a");
/// assert_eq!(*edge.property::<0>(), 7);
/// # Ok::<(), colgraph_core::GraphError>(())
/// ```
pub struct GraphDb<S: Schema> {
    pub(crate) vertex_ids: IdentityTable<S::VertexId>,
    pub(crate) vertex_props: ColumnStore<S::VertexProps>,
    pub(crate) edge_ids: IdentityTable<S::EdgeId>,
    pub(crate) edge_props: ColumnStore<S::EdgeProps>,
    pub(crate) endpoints: EndpointTable,
    pub(crate) adjacency: AdjacencyIndex,
}

impl<S: Schema> GraphDb<S> {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vertex_ids: IdentityTable::new(),
            vertex_props: ColumnStore::new(),
            edge_ids: IdentityTable::new(),
            edge_props: ColumnStore::new(),
            endpoints: EndpointTable::new(),
            adjacency: AdjacencyIndex::new(),
        }
    }

    /// Create a new empty graph with storage reserved per `config`.
    #[must_use]
    pub fn with_config(config: &GraphConfig) -> Self {
        tracing::debug!(
            vertex_capacity = config.vertex_capacity,
            edge_capacity = config.edge_capacity,
            "reserving graph storage"
        );
        Self {
            vertex_ids: IdentityTable::with_capacity(config.vertex_capacity),
            vertex_props: ColumnStore::with_capacity(config.vertex_capacity),
            edge_ids: IdentityTable::with_capacity(config.edge_capacity),
            edge_props: ColumnStore::with_capacity(config.edge_capacity),
            endpoints: EndpointTable::with_capacity(config.edge_capacity),
            adjacency: AdjacencyIndex::new(),
        }
    }

    /// Get the total number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_ids.len()
    }

    /// Get the total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_ids.len()
    }

    /// Check if the graph has no vertices (and therefore no edges).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_ids.is_empty()
    }

    #[must_use]
    pub fn contains_vertex(&self, index: VertexIndex) -> bool {
        index.0 < self.vertex_count()
    }

    #[must_use]
    pub fn contains_edge(&self, index: EdgeIndex) -> bool {
        index.0 < self.edge_count()
    }

    // -------------------------------------------------------------------------
    // MUTATION
    // -------------------------------------------------------------------------

    /// Add a vertex with default property values.
    pub fn add_vertex(&mut self, id: impl Into<S::VertexId>) -> VertexIndex {
        self.vertex_props.append_defaults();
        self.push_vertex_id(id.into())
    }

    /// Add a vertex with explicit property values.
    pub fn add_vertex_with(
        &mut self,
        id: impl Into<S::VertexId>,
        props: S::VertexProps,
    ) -> VertexIndex {
        self.vertex_props.append_values(props);
        self.push_vertex_id(id.into())
    }

    fn push_vertex_id(&mut self, id: S::VertexId) -> VertexIndex {
        let index = VertexIndex(self.vertex_ids.push(id));
        tracing::trace!(vertex = %index, id = ?self.vertex_ids.get(index.0), "vertex added");
        index
    }

    /// Add an edge from `src` to `dst` with default property values.
    ///
    /// Fails with [`GraphError::VertexOutOfRange`] if either endpoint is not
    /// a vertex of this graph. Nothing is modified on failure.
    pub fn add_edge(
        &mut self,
        id: impl Into<S::EdgeId>,
        src: VertexIndex,
        dst: VertexIndex,
    ) -> Result<EdgeIndex, GraphError> {
        self.check_endpoints(src, dst)?;
        self.edge_props.append_defaults();
        Ok(self.push_edge(id.into(), src, dst))
    }

    /// Add an edge from `src` to `dst` with explicit property values.
    ///
    /// Same failure behaviour as [`add_edge`](Self::add_edge).
    pub fn add_edge_with(
        &mut self,
        id: impl Into<S::EdgeId>,
        src: VertexIndex,
        dst: VertexIndex,
        props: S::EdgeProps,
    ) -> Result<EdgeIndex, GraphError> {
        self.check_endpoints(src, dst)?;
        self.edge_props.append_values(props);
        Ok(self.push_edge(id.into(), src, dst))
    }

    fn check_endpoints(&self, src: VertexIndex, dst: VertexIndex) -> Result<(), GraphError> {
        for endpoint in [src, dst] {
            if !self.contains_vertex(endpoint) {
                tracing::warn!(
                    vertex = %endpoint,
                    vertex_count = self.vertex_count(),
                    "edge endpoint out of range"
                );
                return Err(GraphError::VertexOutOfRange {
                    index: endpoint,
                    vertex_count: self.vertex_count(),
                });
            }
        }
        Ok(())
    }

    /// Append id, endpoints and adjacency for an edge whose properties were
    /// already appended. Endpoints must have been checked.
    fn push_edge(&mut self, id: S::EdgeId, src: VertexIndex, dst: VertexIndex) -> EdgeIndex {
        let index = EdgeIndex(self.edge_ids.push(id));
        let recorded = self.endpoints.push(src, dst);
        debug_assert_eq!(index, recorded);
        self.adjacency.insert(src, index);
        tracing::trace!(
            edge = %index,
            id = ?self.edge_ids.get(index.0),
            src = %src,
            dst = %dst,
            "edge added"
        );
        index
    }

    // -------------------------------------------------------------------------
    // LOOKUP
    // -------------------------------------------------------------------------

    /// Read view of a vertex.
    pub fn vertex(&self, index: VertexIndex) -> Result<Vertex<'_, S>, GraphError> {
        self.check_vertex(index)?;
        Ok(Vertex::new(self, index))
    }

    /// Write view of a vertex.
    pub fn vertex_mut(&mut self, index: VertexIndex) -> Result<VertexMut<'_, S>, GraphError> {
        self.check_vertex(index)?;
        Ok(VertexMut::new(self, index))
    }

    /// Read view of an edge.
    pub fn edge(&self, index: EdgeIndex) -> Result<Edge<'_, S>, GraphError> {
        self.check_edge(index)?;
        Ok(self.edge_at(index))
    }

    /// Write view of an edge.
    pub fn edge_mut(&mut self, index: EdgeIndex) -> Result<EdgeMut<'_, S>, GraphError> {
        self.check_edge(index)?;
        let (src, dst) = self.endpoints.endpoints(index);
        Ok(EdgeMut::new(self, index, src, dst))
    }

    /// Edge view with endpoints read from the endpoint table.
    /// The caller guarantees `index` exists.
    pub(crate) fn edge_at(&self, index: EdgeIndex) -> Edge<'_, S> {
        let (src, dst) = self.endpoints.endpoints(index);
        Edge::new(self, index, src, dst)
    }

    fn check_vertex(&self, index: VertexIndex) -> Result<(), GraphError> {
        if self.contains_vertex(index) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                index,
                vertex_count: self.vertex_count(),
            })
        }
    }

    fn check_edge(&self, index: EdgeIndex) -> Result<(), GraphError> {
        if self.contains_edge(index) {
            Ok(())
        } else {
            Err(GraphError::EdgeOutOfRange {
                index,
                edge_count: self.edge_count(),
            })
        }
    }

    // -------------------------------------------------------------------------
    // ITERATION
    // -------------------------------------------------------------------------

    /// All vertices present now, in ascending index order.
    pub fn get_vertices(&self) -> Vertices<'_, S> {
        Vertices::new(self, 0, self.vertex_count())
    }

    /// All edges present now, in ascending index order.
    pub fn get_edges(&self) -> Edges<'_, S> {
        Edges::new(self, 0, self.edge_count())
    }

    // -------------------------------------------------------------------------
    // COLUMNS
    // -------------------------------------------------------------------------

    /// Vertex property column `I`, indexed by vertex dense index.
    #[must_use]
    pub fn vertex_column<const I: usize>(&self) -> &[<S::VertexProps as Slot<I>>::Value]
    where
        S::VertexProps: Slot<I>,
    {
        self.vertex_props.column::<I>()
    }

    /// Edge property column `I`, indexed by edge dense index.
    #[must_use]
    pub fn edge_column<const I: usize>(&self) -> &[<S::EdgeProps as Slot<I>>::Value]
    where
        S::EdgeProps: Slot<I>,
    {
        self.edge_props.column::<I>()
    }

    /// Vertex ids in dense index order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = &S::VertexId> + '_ {
        self.vertex_ids.iter()
    }

    /// Edge ids in dense index order.
    pub fn edge_ids(&self) -> impl Iterator<Item = &S::EdgeId> + '_ {
        self.edge_ids.iter()
    }

    /// Lengths of every vertex property column, in slot order.
    #[must_use]
    pub fn vertex_column_lens(&self) -> Vec<usize> {
        self.vertex_props.column_lens()
    }

    /// Lengths of every edge property column, in slot order.
    #[must_use]
    pub fn edge_column_lens(&self) -> Vec<usize> {
        self.edge_props.column_lens()
    }

    /// Verify that every table agrees with the entity counts.
    ///
    /// Returns the first disagreement found. A graph built only through the
    /// public API always passes.
    pub fn check_alignment(&self) -> Result<(), GraphError> {
        let vertices = self.vertex_count();
        let edges = self.edge_count();

        let mut tables: Vec<(&'static str, usize, usize)> = vec![
            ("vertex_props", vertices, self.vertex_props.len()),
            ("edge_props", edges, self.edge_props.len()),
            ("edge_sources", edges, self.endpoints.sources_len()),
            ("edge_destinations", edges, self.endpoints.destinations_len()),
            ("adjacency", edges, self.adjacency.total()),
        ];
        tables.extend(
            self.vertex_props
                .column_lens()
                .into_iter()
                .map(|len| ("vertex_column", vertices, len)),
        );
        tables.extend(
            self.edge_props
                .column_lens()
                .into_iter()
                .map(|len| ("edge_column", edges, len)),
        );

        for (table, expected, actual) in tables {
            if expected != actual {
                return Err(GraphError::Misaligned {
                    table,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

impl<S: Schema> Default for GraphDb<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Schema> fmt::Debug for GraphDb<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphDb")
            .field("vertex_count", &self.vertex_count())
            .field("edge_count", &self.edge_count())
            .field("vertex_props", &self.vertex_props)
            .field("edge_props", &self.edge_props)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
