//! Core graph structure — named nodes owning their weighted adjacency.

use std::collections::HashMap;

use crate::types::{Edge, GraphError, GraphResult, Node, NodeId, Weight};

/// An undirected weighted graph that owns every node it hands out.
///
/// Nodes are created on first reference and never removed, so a `NodeId`
/// stays valid for the lifetime of the graph that issued it.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// All nodes, indexed by `NodeId`.
    nodes: Vec<Node>,
    /// Name lookup: name -> id.
    by_name: HashMap<String, NodeId>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges, each counted once.
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Return the node named `name`, creating an edge-less one if needed.
    ///
    /// Idempotent: repeated calls with the same name return the same id.
    pub fn get_or_create_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, name));
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Whether a node with this name exists. Never creates one.
    pub fn contains_node(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All nodes, in creation order.
    ///
    /// The returned slice borrows the graph, so the node set cannot change
    /// while it is held.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a node by name.
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.id_of(name).and_then(|id| self.node(id))
    }

    /// Resolve a name to its id.
    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Resolve an id to its name.
    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(Node::name)
    }

    /// Connect `a` and `b` with an undirected edge of the given weight.
    ///
    /// Both endpoints record the other. Re-adding an existing pair overwrites
    /// the weight on both sides (last write wins).
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> GraphResult<()> {
        if a.0 >= self.nodes.len() {
            return Err(GraphError::UnknownNodeId(a));
        }
        if b.0 >= self.nodes.len() {
            return Err(GraphError::UnknownNodeId(b));
        }
        self.nodes[a.0].connect(b, weight);
        self.nodes[b.0].connect(a, weight);
        Ok(())
    }

    /// Weight of the edge between two named nodes.
    pub fn weight_between(&self, a: &str, b: &str) -> GraphResult<Weight> {
        let from = self
            .node_by_name(a)
            .ok_or_else(|| GraphError::NodeNotFound(a.to_string()))?;
        let to = self
            .id_of(b)
            .ok_or_else(|| GraphError::NodeNotFound(b.to_string()))?;
        from.weight(to)
    }

    /// Every undirected edge once, with `source <= dest`, sorted by endpoints.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .nodes
            .iter()
            .flat_map(|node| {
                node.weighted_neighbors()
                    .filter(move |&(other, _)| node.id() <= other)
                    .map(move |(other, w)| Edge::new(node.id(), other, w))
            })
            .collect();
        edges.sort_by(|a, b| a.source.cmp(&b.source).then(a.dest.cmp(&b.dest)));
        edges
    }

    /// Sum of all edge weights, each undirected edge counted once.
    pub fn total_weight(&self) -> u64 {
        self.edges().iter().map(|e| u64::from(e.weight)).sum()
    }
}
