//! # CLI Command Implementations
//!
//! Each command loads the dataset, builds a report and prints it either as
//! plain text or, with `--json-mode`, as pretty JSON.

use crate::dataset::{
    Dataset, DatasetSchema, EDGE_LABEL, EDGE_WEIGHT, LoadedGraph, VERTEX_LABEL,
};
use crate::error::CliError;
use colgraph_core::Edge;
use serde::Serialize;
use std::path::Path;

/// Load and build the dataset at `path`.
pub fn load_graph(path: &Path) -> Result<LoadedGraph, CliError> {
    Dataset::from_path(path)?.build()
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

// =============================================================================
// REPORTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub vertices: usize,
    pub edges: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    pub vertices: usize,
    pub edges: usize,
    pub vertex_column_lens: Vec<usize>,
    pub edge_column_lens: Vec<usize>,
    pub max_out_degree: usize,
    pub aligned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexRow {
    pub index: usize,
    pub id: String,
    pub label: String,
    pub out_degree: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRow {
    pub index: usize,
    pub id: String,
    pub src: String,
    pub dst: String,
    pub weight: i64,
    pub label: String,
}

impl From<Edge<'_, DatasetSchema>> for EdgeRow {
    fn from(edge: Edge<'_, DatasetSchema>) -> Self {
        Self {
            index: edge.index().get(),
            id: edge.id().clone(),
            src: edge.src().id().clone(),
            dst: edge.dst().id().clone(),
            weight: *edge.property::<EDGE_WEIGHT>(),
            label: edge.property::<EDGE_LABEL>().clone(),
        }
    }
}

pub fn load_report(graph: &LoadedGraph) -> LoadReport {
    LoadReport {
        vertices: graph.db.vertex_count(),
        edges: graph.db.edge_count(),
    }
}

pub fn stats_report(graph: &LoadedGraph) -> StatsReport {
    let db = &graph.db;
    let alignment = db.check_alignment();
    let max_out_degree = db
        .get_vertices()
        .iter()
        .map(|v| v.out_degree())
        .max()
        .unwrap_or(0);

    StatsReport {
        vertices: db.vertex_count(),
        edges: db.edge_count(),
        vertex_column_lens: db.vertex_column_lens(),
        edge_column_lens: db.edge_column_lens(),
        max_out_degree,
        aligned: alignment.is_ok(),
        alignment_error: alignment.err().map(|e| e.to_string()),
    }
}

pub fn vertex_rows(graph: &LoadedGraph) -> Vec<VertexRow> {
    graph
        .db
        .get_vertices()
        .iter()
        .map(|v| VertexRow {
            index: v.index().get(),
            id: v.id().clone(),
            label: v.property::<VERTEX_LABEL>().clone(),
            out_degree: v.out_degree(),
        })
        .collect()
}

pub fn edge_rows(graph: &LoadedGraph) -> Vec<EdgeRow> {
    graph.db.get_edges().iter().map(EdgeRow::from).collect()
}

/// Outgoing edges of the vertex whose user id is `vertex`.
pub fn neighbor_rows(graph: &LoadedGraph, vertex: &str) -> Result<Vec<EdgeRow>, CliError> {
    let index = graph.vertex_index(vertex)?;
    let source = graph.db.vertex(index)?;
    Ok(source.neighbors().iter().map(EdgeRow::from).collect())
}

// =============================================================================
// LOAD COMMAND
// =============================================================================

pub fn cmd_load(file: &Path, json_mode: bool) -> Result<(), CliError> {
    let report = load_report(&load_graph(file)?);

    if json_mode {
        print_json(&report);
        return Ok(());
    }

    println!("Loaded {:?}", file);
    println!("  Vertices: {}", report.vertices);
    println!("  Edges:    {}", report.edges);
    Ok(())
}

// =============================================================================
// STATS COMMAND
// =============================================================================

pub fn cmd_stats(file: &Path, json_mode: bool) -> Result<(), CliError> {
    let report = stats_report(&load_graph(file)?);

    if json_mode {
        print_json(&report);
        return Ok(());
    }

    println!("colgraph Statistics");
    println!("===================");
    println!("Dataset:        {:?}", file);
    println!();
    println!("Vertices:       {}", report.vertices);
    println!("Edges:          {}", report.edges);
    println!("Vertex columns: {:?}", report.vertex_column_lens);
    println!("Edge columns:   {:?}", report.edge_column_lens);
    println!("Max out-degree: {}", report.max_out_degree);
    match &report.alignment_error {
        None => println!("Alignment:      ok"),
        Some(err) => println!("Alignment:      FAILED ({})", err),
    }
    Ok(())
}

// =============================================================================
// LISTING COMMANDS
// =============================================================================

pub fn cmd_vertices(file: &Path, json_mode: bool) -> Result<(), CliError> {
    let rows = vertex_rows(&load_graph(file)?);

    if json_mode {
        print_json(&rows);
        return Ok(());
    }

    println!("{} vertices", rows.len());
    for row in &rows {
        println!(
            "  [{}] {} label={:?} out_degree={}",
            row.index, row.id, row.label, row.out_degree
        );
    }
    Ok(())
}

pub fn cmd_edges(file: &Path, json_mode: bool) -> Result<(), CliError> {
    let rows = edge_rows(&load_graph(file)?);

    if json_mode {
        print_json(&rows);
        return Ok(());
    }

    println!("{} edges", rows.len());
    print_edge_rows(&rows);
    Ok(())
}

pub fn cmd_neighbors(file: &Path, vertex: &str, json_mode: bool) -> Result<(), CliError> {
    let rows = neighbor_rows(&load_graph(file)?, vertex)?;

    if json_mode {
        print_json(&serde_json::json!({
            "vertex": vertex,
            "neighbors": rows,
        }));
        return Ok(());
    }

    println!("{} outgoing edges from {}", rows.len(), vertex);
    print_edge_rows(&rows);
    Ok(())
}

fn print_edge_rows(rows: &[EdgeRow]) {
    for row in rows {
        println!(
            "  [{}] {}: {} -> {} weight={} label={:?}",
            row.index, row.id, row.src, row.dst, row.weight, row.label
        );
    }
}
