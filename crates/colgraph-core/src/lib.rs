//! # colgraph-core
//!
//! The schema-typed property graph engine for colgraph - THE LOGIC.
//!
//! A [`GraphDb`] stores vertices and edges whose property types are fixed
//! by a [`Schema`]. Properties live in columns (one `Vec` per declared
//! property), identities in side tables, and outgoing edges in an adjacency
//! index. Everything is append-only: the dense index an entity receives at
//! creation is its permanent handle.
//!
//! ## Architecture
//!
//! ```text
//!   Schema (types only)
//!      │
//!      ▼
//!   GraphDb ──owns──► IdentityTable ×2   EndpointTable
//!      │              ColumnStore   ×2   AdjacencyIndex
//!      │
//!      ├── add_vertex / add_edge ──► VertexIndex / EdgeIndex
//!      ├── vertex / edge / *_mut ──► Vertex, Edge, VertexMut, EdgeMut
//!      └── get_vertices / get_edges / Vertex::neighbors ──► iterators
//! ```
//!
//! ## Constraints
//!
//! The core:
//! - Has NO async, NO network, NO disk persistence
//! - Never deletes or renumbers an entity
//! - Rejects property arity/type mismatches at compile time
//! - Reports its only runtime failure (an unknown vertex) as `GraphError`

// =============================================================================
// MODULES
// =============================================================================

pub mod config;
pub mod graph;
pub mod handle;
pub mod iter;
pub mod schema;
pub mod storage;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{EdgeIndex, GraphError, VertexIndex};

// =============================================================================
// RE-EXPORTS: Graph Engine
// =============================================================================

pub use config::GraphConfig;
pub use graph::GraphDb;
pub use handle::{Edge, EdgeMut, Vertex, VertexMut};
pub use iter::{EdgeIter, Edges, NeighborIter, Neighbors, VertexIter, Vertices};
pub use schema::{PropertyRow, Schema, Slot};
pub use storage::{AdjacencyIndex, ColumnStore, EndpointTable, IdentityTable};
