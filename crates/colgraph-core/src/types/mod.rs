//! # Core Type Definitions
//!
//! This module contains the identifier and error types shared by every
//! colgraph component:
//! - Dense identifiers (`VertexIndex`, `EdgeIndex`)
//! - Error types (`GraphError`)
//!
//! ## Dual Identity
//!
//! Every vertex and edge has two identities. The user id is whatever the
//! caller supplied and lives in an identity table. The dense index is the
//! position the graph assigned at creation time; all storage access goes
//! through it. The two are never conflated: the core offers no lookup from
//! user id to dense index.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// DENSE IDENTIFIERS
// =============================================================================

/// Dense position of a vertex, assigned in insertion order starting at 0.
///
/// A `VertexIndex` stays valid for the lifetime of the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexIndex(pub usize);

/// Dense position of an edge, assigned in insertion order starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeIndex(pub usize);

impl VertexIndex {
    /// Get the raw position.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl EdgeIndex {
    /// Get the raw position.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl fmt::Display for EdgeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the colgraph core.
///
/// Property arity and type mismatches are compile errors and never appear
/// here. The only recoverable failure of the mutation API is an edge
/// endpoint that does not name an existing vertex.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex index does not name an existing vertex.
    #[error("Vertex out of range: {index} (vertex count {vertex_count})")]
    VertexOutOfRange {
        index: VertexIndex,
        vertex_count: usize,
    },

    /// An edge index does not name an existing edge.
    #[error("Edge out of range: {index} (edge count {edge_count})")]
    EdgeOutOfRange { index: EdgeIndex, edge_count: usize },

    /// A table or column length disagrees with the entity count.
    #[error("Misaligned storage: {table} has length {actual}, expected {expected}")]
    Misaligned {
        table: &'static str,
        expected: usize,
        actual: usize,
    },
}

// =============================================================================
// TESTS
// =============================================================================
