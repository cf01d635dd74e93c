//! Error types for the weighted graph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the weighted graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// No node is registered under this name.
    #[error("Node '{0}' not found")]
    NodeNotFound(String),

    /// A node handle that does not belong to this graph.
    #[error("Node ID {0} does not belong to this graph")]
    UnknownNodeId(NodeId),

    /// Weight requested between two nodes that are not direct neighbors.
    #[error("No edge from '{from}' to node {to}")]
    NoSuchEdge { from: String, to: NodeId },

    /// Shortest-path run left nodes that the start cannot reach.
    #[error("Nodes unreachable from '{start}': {}", .nodes.join(", "))]
    Unreachable { start: String, nodes: Vec<String> },

    /// Spanning tree requested for a graph with more than one component.
    #[error("Graph is not connected: spanning tree reached {reached} of {total} nodes")]
    NotConnected { reached: usize, total: usize },

    /// Malformed line in an edge list.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
