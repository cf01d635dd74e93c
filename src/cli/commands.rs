//! CLI command implementations.

use std::path::Path;

use crate::format::EdgeListReader;
use crate::graph::{Graph, VisitOrder};
use crate::types::{GraphError, GraphResult, Node, NodeId};

/// Traversal discipline for the `bfs` and `dfs` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    /// Breadth-first.
    Breadth,
    /// Depth-first.
    Depth,
}

impl TraversalKind {
    fn name(self) -> &'static str {
        match self {
            Self::Breadth => "bfs",
            Self::Depth => "dfs",
        }
    }
}

fn resolve(graph: &Graph, name: &str) -> GraphResult<NodeId> {
    graph
        .id_of(name)
        .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))
}

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Display node and edge counts of an edge-list file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let isolated = graph.nodes().iter().filter(|n| n.degree() == 0).count();

    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "isolated": isolated,
            "total_weight": graph.total_weight(),
        }));
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("Isolated nodes: {}", isolated);
        println!("Total weight: {}", graph.total_weight());
    }
    Ok(())
}

/// Traverse from `start` and print the visit order.
pub fn cmd_traverse(path: &Path, start: &str, kind: TraversalKind, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let start_id = resolve(&graph, start)?;

    let mut order = VisitOrder::new();
    match kind {
        TraversalKind::Breadth => graph.bfs_from(start_id, &mut order)?,
        TraversalKind::Depth => graph.dfs_from(start_id, &mut order)?,
    };

    if json {
        print_json(&serde_json::json!({
            "algorithm": kind.name(),
            "start": start,
            "visited": order.names,
        }));
    } else {
        println!("{} from {} ({} nodes):", kind.name().to_uppercase(), start, order.names.len());
        for (i, name) in order.names.iter().enumerate() {
            println!("  {:>4}. {}", i + 1, name);
        }
    }
    Ok(())
}

/// Print shortest-path costs from `start`.
///
/// With `require_all`, unreachable nodes turn into an error after printing.
pub fn cmd_dijkstra(path: &Path, start: &str, require_all: bool, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let result = graph.dijkstra(start)?;

    let unreachable: Vec<&str> = result
        .unreachable
        .iter()
        .filter_map(|&id| graph.name_of(id))
        .collect();

    if json {
        let costs: serde_json::Map<String, serde_json::Value> = result
            .named_costs(&graph)
            .into_iter()
            .map(|(name, cost)| (name.to_string(), serde_json::json!(cost)))
            .collect();
        print_json(&serde_json::json!({
            "start": start,
            "costs": costs,
            "unreachable": unreachable,
        }));
    } else {
        println!("Shortest paths from {}:", start);
        for (name, cost) in result.named_costs(&graph) {
            println!("  {:<20} {}", name, cost);
        }
        if !unreachable.is_empty() {
            println!("Unreachable: {}", unreachable.join(", "));
        }
    }

    if require_all {
        result.into_complete(&graph)?;
    }
    Ok(())
}

/// Print the minimum spanning tree's edges and total weight.
pub fn cmd_mst(path: &Path, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let tree = graph.prim_jarnik()?;

    let name = |id: NodeId| tree.node(id).map(Node::name).unwrap_or_default();
    let edges: Vec<(&str, &str, u32)> = tree
        .edges()
        .iter()
        .map(|e| (name(e.source), name(e.dest), e.weight))
        .collect();

    if json {
        let edges: Vec<serde_json::Value> = edges
            .iter()
            .map(|(a, b, w)| serde_json::json!({"a": a, "b": b, "weight": w}))
            .collect();
        print_json(&serde_json::json!({
            "nodes": tree.node_count(),
            "edges": edges,
            "total_weight": tree.total_weight(),
        }));
    } else {
        println!("Minimum spanning tree ({} nodes):", tree.node_count());
        for (a, b, w) in &edges {
            println!("  {} - {} ({})", a, b, w);
        }
        println!("Total weight: {}", tree.total_weight());
    }
    Ok(())
}
