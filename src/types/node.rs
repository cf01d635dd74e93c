//! Node handles and the node struct with its weighted adjacency.

use std::collections::HashMap;

use serde::Serialize;

use super::{GraphError, GraphResult, Weight};

/// Handle to a node, valid only within the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of this node in the owning graph's node list.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named vertex and its undirected weighted connections.
///
/// Each undirected edge is stored twice, once on each endpoint, with equal
/// weight. A self-loop is stored once.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    name: String,
    neighbors: HashMap<NodeId, Weight>,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            neighbors: HashMap::new(),
        }
    }

    /// Handle of this node in its graph.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directly connected nodes, in unspecified order.
    pub fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbors.keys().copied()
    }

    /// Neighbors paired with the weight of the connecting edge, in unspecified order.
    pub fn weighted_neighbors(&self) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.neighbors.iter().map(|(&id, &w)| (id, w))
    }

    /// Number of direct neighbors.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether `other` is a direct neighbor.
    pub fn is_adjacent(&self, other: NodeId) -> bool {
        self.neighbors.contains_key(&other)
    }

    /// Weight of the edge to `other`.
    ///
    /// A zero-weight edge returns `Ok(0)`; a missing edge is an error.
    pub fn weight(&self, other: NodeId) -> GraphResult<Weight> {
        self.neighbors
            .get(&other)
            .copied()
            .ok_or_else(|| GraphError::NoSuchEdge {
                from: self.name.clone(),
                to: other,
            })
    }

    /// Insert or overwrite the half-edge towards `other`.
    pub(crate) fn connect(&mut self, other: NodeId, weight: Weight) {
        self.neighbors.insert(other, weight);
    }
}
