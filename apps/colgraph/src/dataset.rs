//! # Dataset Loading
//!
//! A dataset is a TOML file with an optional `[config]` table and arrays of
//! `[[vertices]]` and `[[edges]]`:
//!
//! ```toml
//! [config]
//! vertex_capacity = 16
//!
//! [[vertices]]
//! id = "a"
//! label = "start"
//!
//! [[vertices]]
//! id = "b"
//!
//! [[edges]]
//! id = "e1"
//! src = "a"
//! dst = "b"
//! weight = 1
//! label = "x"
//! ```
//!
//! Edges refer to vertices by user id. The graph core has no user-id index,
//! so the loader keeps its own.

use crate::error::CliError;
use colgraph_core::{GraphConfig, GraphDb, Schema, VertexIndex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Maximum dataset file size (100 MB).
///
/// This prevents memory exhaustion from accidental large files.
pub const MAX_DATASET_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Maximum rows a dataset's `[config]` table may reserve per entity kind.
pub const MAX_DATASET_CAPACITY: usize = 1 << 24;

// =============================================================================
// SCHEMA
// =============================================================================

/// Schema of graphs built from datasets.
///
/// - Vertex: id `String`, properties `(label,)`
/// - Edge: id `String`, properties `(weight, label)`
pub struct DatasetSchema;

impl Schema for DatasetSchema {
    type VertexId = String;
    type VertexProps = (String,);
    type EdgeId = String;
    type EdgeProps = (i64, String);
}

pub type DatasetGraph = GraphDb<DatasetSchema>;

/// Vertex property slot holding the label.
pub const VERTEX_LABEL: usize = 0;
/// Edge property slot holding the weight.
pub const EDGE_WEIGHT: usize = 0;
/// Edge property slot holding the label.
pub const EDGE_LABEL: usize = 1;

// =============================================================================
// FILE LAYOUT
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub config: GraphConfig,
    #[serde(default)]
    pub vertices: Vec<VertexRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id: String,
    pub src: String,
    pub dst: String,
    #[serde(default)]
    pub weight: i64,
    #[serde(default)]
    pub label: String,
}

impl Dataset {
    /// Parse a dataset from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a dataset file.
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let size = std::fs::metadata(path)?.len();
        if size > MAX_DATASET_FILE_SIZE {
            return Err(CliError::FileTooLarge {
                size,
                max: MAX_DATASET_FILE_SIZE,
            });
        }
        let text = std::fs::read_to_string(path)?;
        tracing::info!("Loading dataset from {:?} ({} bytes)", path, size);
        Self::from_toml_str(&text)
    }

    /// Build a graph from the records, in file order.
    pub fn build(&self) -> Result<LoadedGraph, CliError> {
        self.check_capacity()?;
        let mut db = DatasetGraph::with_config(&self.config);
        let mut lookup = BTreeMap::new();

        for record in &self.vertices {
            if lookup.contains_key(&record.id) {
                return Err(CliError::DuplicateVertex(record.id.clone()));
            }
            let index = db.add_vertex_with(&record.id, (record.label.clone(),));
            lookup.insert(record.id.clone(), index);
        }

        let resolve = |id: &str| {
            lookup
                .get(id)
                .copied()
                .ok_or_else(|| CliError::UnknownVertex(id.to_string()))
        };

        for record in &self.edges {
            let src = resolve(&record.src)?;
            let dst = resolve(&record.dst)?;
            db.add_edge_with(
                &record.id,
                src,
                dst,
                (record.weight, record.label.clone()),
            )?;
        }

        tracing::info!(
            vertices = db.vertex_count(),
            edges = db.edge_count(),
            "dataset loaded"
        );
        Ok(LoadedGraph { db, lookup })
    }

    /// Reject `[config]` capacities above [`MAX_DATASET_CAPACITY`].
    fn check_capacity(&self) -> Result<(), CliError> {
        for (field, requested) in [
            ("vertex_capacity", self.config.vertex_capacity),
            ("edge_capacity", self.config.edge_capacity),
        ] {
            if requested > MAX_DATASET_CAPACITY {
                return Err(CliError::CapacityTooLarge {
                    field,
                    requested,
                    max: MAX_DATASET_CAPACITY,
                });
            }
        }
        Ok(())
    }
}

// =============================================================================
// LOADED GRAPH
// =============================================================================

/// A dataset graph plus the loader's user id → dense index map.
#[derive(Debug)]
pub struct LoadedGraph {
    pub db: DatasetGraph,
    lookup: BTreeMap<String, VertexIndex>,
}

impl LoadedGraph {
    /// Dense index of the vertex with user id `id`.
    pub fn vertex_index(&self, id: &str) -> Result<VertexIndex, CliError> {
        self.lookup
            .get(id)
            .copied()
            .ok_or_else(|| CliError::UnknownVertex(id.to_string()))
    }
}
