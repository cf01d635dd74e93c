//! Phase 4 tests: edge-list ingestion, CLI integration and end-to-end flows.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

use weighted_graph::format::{parse_edge_list, EdgeListReader};
use weighted_graph::graph::VisitOrder;
use weighted_graph::types::GraphError;

// ==================== CLI Helpers ====================

/// Locate the `wgraph` binary built alongside test binaries.
fn wgraph_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove "deps"
    path.push("wgraph");
    path
}

/// Run the `wgraph` CLI with the given arguments and return the output.
fn run_wgraph(args: &[&str]) -> Output {
    Command::new(wgraph_bin())
        .args(args)
        .output()
        .expect("Failed to run wgraph")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "wgraph failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Write an edge list to a temp file.
fn edge_file(contents: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(contents.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

const TRIANGLE: &str = "# triangle\nA B 1\nB C 2\nA C 4\n";
const SPLIT: &str = "A B 1\nC\n";

// ==================== Edge List Ingestion ====================

#[test]
fn test_read_edge_list_from_file() {
    let tmp = edge_file(TRIANGLE);
    let graph = EdgeListReader::read_from_file(tmp.path()).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.weight_between("A", "C").unwrap(), 4);
}

#[test]
fn test_read_edge_list_from_reader() {
    let mut cursor = std::io::Cursor::new(SPLIT.as_bytes());
    let graph = EdgeListReader::read_from(&mut cursor).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert!(graph.contains_node("C"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = EdgeListReader::read_from_file(std::path::Path::new("/nonexistent/graph.txt"))
        .unwrap_err();
    assert!(matches!(err, GraphError::Io(_)));
}

#[test]
fn test_end_to_end_parse_traverse_solve() {
    let mut graph = parse_edge_list(TRIANGLE).unwrap();

    let mut order = VisitOrder::new();
    graph.depth_first_search("A", &mut order);
    assert_eq!(order.names.len(), 3);

    let costs = graph.dijkstra("A").unwrap();
    assert_eq!(costs.cost(graph.id_of("C").unwrap()), Some(3));

    let tree = graph.prim_jarnik().unwrap();
    assert_eq!(tree.total_weight(), 3);
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_info() {
    let tmp = edge_file(TRIANGLE);
    let output = run_wgraph(&["info", tmp.path().to_str().unwrap()]);
    assert_success(&output);

    let out = stdout_str(&output);
    assert!(out.contains("Nodes: 3"));
    assert!(out.contains("Edges: 3"));
    assert!(out.contains("Total weight: 7"));
}

#[test]
fn test_cli_bfs_json() {
    let tmp = edge_file(TRIANGLE);
    let output = run_wgraph(&["--format", "json", "bfs", tmp.path().to_str().unwrap(), "A"]);
    assert_success(&output);

    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["algorithm"], "bfs");
    let visited = value["visited"].as_array().unwrap();
    assert_eq!(visited.len(), 3);
    assert_eq!(visited[0], "A");
}

#[test]
fn test_cli_dfs_unknown_start() {
    let tmp = edge_file(TRIANGLE);
    let output = run_wgraph(&["dfs", tmp.path().to_str().unwrap(), "Z"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_cli_dijkstra_json() {
    let tmp = edge_file(TRIANGLE);
    let output = run_wgraph(&["--format", "json", "dijkstra", tmp.path().to_str().unwrap(), "A"]);
    assert_success(&output);

    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["costs"]["A"], 0);
    assert_eq!(value["costs"]["B"], 1);
    assert_eq!(value["costs"]["C"], 3);
    assert!(value["unreachable"].as_array().unwrap().is_empty());
}

#[test]
fn test_cli_dijkstra_lists_unreachable() {
    let tmp = edge_file(SPLIT);
    let output = run_wgraph(&["dijkstra", tmp.path().to_str().unwrap(), "A"]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("Unreachable: C"));

    let output = run_wgraph(&["dijkstra", tmp.path().to_str().unwrap(), "A", "--require-all"]);
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_cli_mst() {
    let tmp = edge_file(TRIANGLE);
    let output = run_wgraph(&["--format", "json", "mst", tmp.path().to_str().unwrap()]);
    assert_success(&output);

    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["nodes"], 3);
    assert_eq!(value["total_weight"], 3);
    assert_eq!(value["edges"].as_array().unwrap().len(), 2);
}

#[test]
fn test_cli_mst_disconnected() {
    let tmp = edge_file(SPLIT);
    let output = run_wgraph(&["mst", tmp.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(5));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not connected"));
}

#[test]
fn test_cli_parse_error_exit_code() {
    let tmp = edge_file("A B heavy\n");
    let output = run_wgraph(&["info", tmp.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}
