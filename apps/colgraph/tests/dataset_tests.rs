//! # Dataset File Tests
//!
//! Load datasets from disk and run the command reports against them.

use colgraph::CliError;
use colgraph::cli::{edge_rows, load_graph, load_report, neighbor_rows, stats_report};
use colgraph::dataset::{Dataset, EDGE_LABEL, EDGE_WEIGHT};
use std::path::Path;
use tempfile::tempdir;

const SCENARIO: &str = r#"
[config]
vertex_capacity = 8
edge_capacity = 8

[[vertices]]
id = "a"

[[vertices]]
id = "b"

[[vertices]]
id = "c"

[[edges]]
id = "e1"
src = "a"
dst = "b"
weight = 1
label = "x"
"#;

fn write_dataset(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).expect("write dataset");
    path
}

#[test]
fn scenario_loads_from_file() {
    let temp = tempdir().expect("temp dir");
    let path = write_dataset(temp.path(), "scenario.toml", SCENARIO);

    let graph = load_graph(&path).expect("load");
    let report = load_report(&graph);
    assert_eq!(report.vertices, 3);
    assert_eq!(report.edges, 1);

    let a = graph.vertex_index("a").expect("a");
    let neighbors: Vec<_> = graph
        .db
        .vertex(a)
        .expect("vertex")
        .neighbors()
        .iter()
        .map(|e| {
            (
                e.id().clone(),
                *e.property::<EDGE_WEIGHT>(),
                e.property::<EDGE_LABEL>().clone(),
            )
        })
        .collect();
    assert_eq!(neighbors, vec![("e1".to_string(), 1, "x".to_string())]);

    assert!(neighbor_rows(&graph, "b").expect("b").is_empty());
}

#[test]
fn stats_from_file_are_aligned() {
    let temp = tempdir().expect("temp dir");
    let path = write_dataset(temp.path(), "stats.toml", SCENARIO);

    let report = stats_report(&load_graph(&path).expect("load"));
    assert!(report.aligned);
    assert_eq!(report.vertex_column_lens, vec![3]);
    assert_eq!(report.edge_column_lens, vec![1, 1]);
    assert_eq!(report.max_out_degree, 1);
}

#[test]
fn edges_list_resolves_user_ids() {
    let temp = tempdir().expect("temp dir");
    let path = write_dataset(temp.path(), "edges.toml", SCENARIO);

    let rows = edge_rows(&load_graph(&path).expect("load"));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].src, "a");
    assert_eq!(rows[0].dst, "b");
}

#[test]
fn missing_file_is_io_error() {
    let temp = tempdir().expect("temp dir");
    let result = Dataset::from_path(&temp.path().join("absent.toml"));
    assert!(matches!(result, Err(CliError::Io(_))));
}

#[test]
fn invalid_toml_is_parse_error() {
    let temp = tempdir().expect("temp dir");
    let path = write_dataset(temp.path(), "bad.toml", "[[vertices]\nid = ");

    assert!(matches!(load_graph(&path), Err(CliError::Parse(_))));
}

#[test]
fn dangling_edge_is_rejected() {
    let temp = tempdir().expect("temp dir");
    let path = write_dataset(
        temp.path(),
        "dangling.toml",
        "[[vertices]]\nid = \"a\"\n\n[[edges]]\nid = \"e\"\nsrc = \"nowhere\"\ndst = \"a\"\n",
    );

    let result = load_graph(&path);
    assert!(matches!(result, Err(CliError::UnknownVertex(id)) if id == "nowhere"));
}

#[test]
fn unknown_neighbor_query_is_rejected() {
    let temp = tempdir().expect("temp dir");
    let path = write_dataset(temp.path(), "scenario.toml", SCENARIO);
    let graph = load_graph(&path).expect("load");

    assert!(matches!(
        neighbor_rows(&graph, "z"),
        Err(CliError::UnknownVertex(_))
    ));
}

#[test]
fn huge_config_capacity_is_rejected() {
    let temp = tempdir().expect("temp dir");
    let path = write_dataset(
        temp.path(),
        "huge.toml",
        "[config]\nvertex_capacity = 9223372036854775807\n",
    );

    assert!(matches!(
        load_graph(&path),
        Err(CliError::CapacityTooLarge { field: "vertex_capacity", .. })
    ));
}
