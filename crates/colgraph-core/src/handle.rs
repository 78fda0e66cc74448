//! # Entity Handles
//!
//! Views pairing a graph with a dense index. `Vertex` and `Edge` borrow the
//! graph shared and are `Copy`; `VertexMut` and `EdgeMut` borrow it
//! exclusively and add the property setters.
//!
//! Handles own nothing. Every read goes straight to the graph's tables at
//! the handle's index, and every write lands in the graph's columns.
//!
//! Property slots are const generics checked against the schema:
//!
//! ```
//! use colgraph_core::{GraphDb, Schema};
//!
//! struct People;
//!
//! impl Schema for People {
//!     type VertexId = u32;
//!     type VertexProps = (String, u8);
//!     type EdgeId = u32;
//!     type EdgeProps = ();
//! }
//!
//! let mut db = GraphDb::<People>::new();
//! let ada = db.add_vertex(1u32);
//!
//! let mut view = db.vertex_mut(ada)?;
//! view.set_property::<0>("Ada".to_string());
//! view.set_property::<1>(36);
//!
//! assert_eq!(db.vertex(ada)?.properties(), ("Ada".to_string(), 36));
//! # Ok::<(), colgraph_core::GraphError>(())
//! ```

use crate::graph::GraphDb;
use crate::iter::Neighbors;
use crate::schema::{Schema, Slot};
use crate::{EdgeIndex, VertexIndex};
use std::fmt;

// =============================================================================
// VERTEX
// =============================================================================

/// Read view of a vertex.
pub struct Vertex<'g, S: Schema> {
    db: &'g GraphDb<S>,
    index: VertexIndex,
}

impl<'g, S: Schema> Vertex<'g, S> {
    pub(crate) fn new(db: &'g GraphDb<S>, index: VertexIndex) -> Self {
        Self { db, index }
    }

    /// Dense index of this vertex.
    #[must_use]
    pub fn index(&self) -> VertexIndex {
        self.index
    }

    /// User id of this vertex.
    #[must_use]
    pub fn id(&self) -> &'g S::VertexId {
        self.db.vertex_ids.get(self.index.0)
    }

    /// Value of property slot `I`.
    #[must_use]
    pub fn property<const I: usize>(&self) -> &'g <S::VertexProps as Slot<I>>::Value
    where
        S::VertexProps: Slot<I>,
    {
        self.db.vertex_props.get::<I>(self.index.0)
    }

    /// Every property value, as a tuple.
    #[must_use]
    pub fn properties(&self) -> S::VertexProps {
        self.db.vertex_props.get_all(self.index.0)
    }

    /// Outgoing edges of this vertex.
    #[must_use]
    pub fn neighbors(&self) -> Neighbors<'g, S> {
        Neighbors::new(self.db, self.db.adjacency.outgoing(self.index))
    }

    /// Number of outgoing edges.
    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.db.adjacency.out_degree(self.index)
    }
}

impl<S: Schema> Clone for Vertex<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Schema> Copy for Vertex<'_, S> {}

impl<S: Schema> fmt::Debug for Vertex<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("index", &self.index)
            .field("id", self.id())
            .finish()
    }
}

/// Write view of a vertex.
pub struct VertexMut<'g, S: Schema> {
    db: &'g mut GraphDb<S>,
    index: VertexIndex,
}

impl<'g, S: Schema> VertexMut<'g, S> {
    pub(crate) fn new(db: &'g mut GraphDb<S>, index: VertexIndex) -> Self {
        Self { db, index }
    }

    #[must_use]
    pub fn index(&self) -> VertexIndex {
        self.index
    }

    #[must_use]
    pub fn id(&self) -> &S::VertexId {
        self.db.vertex_ids.get(self.index.0)
    }

    #[must_use]
    pub fn property<const I: usize>(&self) -> &<S::VertexProps as Slot<I>>::Value
    where
        S::VertexProps: Slot<I>,
    {
        self.db.vertex_props.get::<I>(self.index.0)
    }

    /// Mutable access to property slot `I`.
    pub fn property_mut<const I: usize>(&mut self) -> &mut <S::VertexProps as Slot<I>>::Value
    where
        S::VertexProps: Slot<I>,
    {
        self.db.vertex_props.get_mut::<I>(self.index.0)
    }

    #[must_use]
    pub fn properties(&self) -> S::VertexProps {
        self.db.vertex_props.get_all(self.index.0)
    }

    /// Overwrite property slot `I`.
    pub fn set_property<const I: usize>(&mut self, value: <S::VertexProps as Slot<I>>::Value)
    where
        S::VertexProps: Slot<I>,
    {
        self.db.vertex_props.set::<I>(self.index.0, value);
    }

    /// Overwrite every property.
    pub fn set_properties(&mut self, props: S::VertexProps) {
        self.db.vertex_props.set_all(self.index.0, props);
    }

    /// Downgrade to a read view.
    #[must_use]
    pub fn as_vertex(&self) -> Vertex<'_, S> {
        Vertex::new(self.db, self.index)
    }
}

impl<S: Schema> fmt::Debug for VertexMut<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexMut")
            .field("index", &self.index)
            .field("id", self.id())
            .finish()
    }
}

// =============================================================================
// EDGE
// =============================================================================

/// Read view of an edge.
///
/// Source and destination are captured when the view is built. Endpoints
/// never change after creation, so they always agree with the graph.
pub struct Edge<'g, S: Schema> {
    db: &'g GraphDb<S>,
    index: EdgeIndex,
    src: VertexIndex,
    dst: VertexIndex,
}

impl<'g, S: Schema> Edge<'g, S> {
    pub(crate) fn new(
        db: &'g GraphDb<S>,
        index: EdgeIndex,
        src: VertexIndex,
        dst: VertexIndex,
    ) -> Self {
        Self {
            db,
            index,
            src,
            dst,
        }
    }

    /// Dense index of this edge.
    #[must_use]
    pub fn index(&self) -> EdgeIndex {
        self.index
    }

    /// User id of this edge.
    #[must_use]
    pub fn id(&self) -> &'g S::EdgeId {
        self.db.edge_ids.get(self.index.0)
    }

    /// Value of property slot `I`.
    #[must_use]
    pub fn property<const I: usize>(&self) -> &'g <S::EdgeProps as Slot<I>>::Value
    where
        S::EdgeProps: Slot<I>,
    {
        self.db.edge_props.get::<I>(self.index.0)
    }

    /// Every property value, as a tuple.
    #[must_use]
    pub fn properties(&self) -> S::EdgeProps {
        self.db.edge_props.get_all(self.index.0)
    }

    /// Source vertex.
    #[must_use]
    pub fn src(&self) -> Vertex<'g, S> {
        Vertex::new(self.db, self.src)
    }

    /// Destination vertex.
    #[must_use]
    pub fn dst(&self) -> Vertex<'g, S> {
        Vertex::new(self.db, self.dst)
    }

    /// `(source, destination)` dense indices.
    #[must_use]
    pub fn endpoints(&self) -> (VertexIndex, VertexIndex) {
        (self.src, self.dst)
    }
}

impl<S: Schema> Clone for Edge<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Schema> Copy for Edge<'_, S> {}

impl<S: Schema> fmt::Debug for Edge<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("index", &self.index)
            .field("id", self.id())
            .field("src", &self.src)
            .field("dst", &self.dst)
            .finish()
    }
}

/// Write view of an edge.
pub struct EdgeMut<'g, S: Schema> {
    db: &'g mut GraphDb<S>,
    index: EdgeIndex,
    src: VertexIndex,
    dst: VertexIndex,
}

impl<'g, S: Schema> EdgeMut<'g, S> {
    pub(crate) fn new(
        db: &'g mut GraphDb<S>,
        index: EdgeIndex,
        src: VertexIndex,
        dst: VertexIndex,
    ) -> Self {
        Self {
            db,
            index,
            src,
            dst,
        }
    }

    #[must_use]
    pub fn index(&self) -> EdgeIndex {
        self.index
    }

    #[must_use]
    pub fn id(&self) -> &S::EdgeId {
        self.db.edge_ids.get(self.index.0)
    }

    #[must_use]
    pub fn property<const I: usize>(&self) -> &<S::EdgeProps as Slot<I>>::Value
    where
        S::EdgeProps: Slot<I>,
    {
        self.db.edge_props.get::<I>(self.index.0)
    }

    /// Mutable access to property slot `I`.
    pub fn property_mut<const I: usize>(&mut self) -> &mut <S::EdgeProps as Slot<I>>::Value
    where
        S::EdgeProps: Slot<I>,
    {
        self.db.edge_props.get_mut::<I>(self.index.0)
    }

    #[must_use]
    pub fn properties(&self) -> S::EdgeProps {
        self.db.edge_props.get_all(self.index.0)
    }

    /// Overwrite property slot `I`.
    pub fn set_property<const I: usize>(&mut self, value: <S::EdgeProps as Slot<I>>::Value)
    where
        S::EdgeProps: Slot<I>,
    {
        self.db.edge_props.set::<I>(self.index.0, value);
    }

    /// Overwrite every property.
    pub fn set_properties(&mut self, props: S::EdgeProps) {
        self.db.edge_props.set_all(self.index.0, props);
    }

    #[must_use]
    pub fn src_index(&self) -> VertexIndex {
        self.src
    }

    #[must_use]
    pub fn dst_index(&self) -> VertexIndex {
        self.dst
    }

    /// Downgrade to a read view.
    #[must_use]
    pub fn as_edge(&self) -> Edge<'_, S> {
        Edge::new(self.db, self.index, self.src, self.dst)
    }
}

impl<S: Schema> fmt::Debug for EdgeMut<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeMut")
            .field("index", &self.index)
            .field("id", self.id())
            .field("src", &self.src)
            .field("dst", &self.dst)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
