//! In-memory graph operations — the core data structure and its algorithms.

pub mod builder;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;
pub mod weighted_graph;

pub use builder::{from_edges, GraphBuilder};
pub use shortest_path::{dijkstra, ShortestPaths};
pub use spanning_tree::prim_jarnik;
pub use traversal::{bfs, dfs, NodeVisitor, VisitOrder};
pub use weighted_graph::Graph;
