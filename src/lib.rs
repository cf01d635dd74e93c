//! Weighted graph — in-memory undirected weighted graphs with classic algorithms.
//!
//! Nodes are created lazily by name and owned by their [`Graph`]. On top of
//! that the crate provides visitor-driven BFS/DFS, Dijkstra shortest paths and
//! Prim-Jarnik minimum spanning trees.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{parse_edge_list, EdgeListReader};
pub use graph::{
    bfs, dfs, dijkstra, from_edges, prim_jarnik, Graph, GraphBuilder, NodeVisitor, ShortestPaths,
    VisitOrder,
};
pub use types::{Cost, Edge, GraphError, GraphResult, Node, NodeId, Path, Weight};
