//! # Graph Configuration
//!
//! Sizing hints for a new graph. Every field has a default, so a partial
//! table (or none at all) deserializes.

use serde::{Deserialize, Serialize};

/// Default number of vertex rows reserved up front.
pub const DEFAULT_VERTEX_CAPACITY: usize = 0;

/// Default number of edge rows reserved up front.
pub const DEFAULT_EDGE_CAPACITY: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Rows reserved in the vertex id table and every vertex column.
    pub vertex_capacity: usize,
    /// Rows reserved in the edge id table, endpoint tables and every edge column.
    pub edge_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            vertex_capacity: DEFAULT_VERTEX_CAPACITY,
            edge_capacity: DEFAULT_EDGE_CAPACITY,
        }
    }
}

impl GraphConfig {
    #[must_use]
    pub fn new(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            vertex_capacity,
            edge_capacity,
        }
    }
}
