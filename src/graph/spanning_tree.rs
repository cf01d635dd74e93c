//! Minimum spanning tree construction (Prim-Jarnik).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::types::{Edge, GraphError, GraphResult, NodeId};

use super::Graph;

fn push_edges_from(graph: &Graph, id: NodeId, frontier: &mut BinaryHeap<Reverse<Edge>>) {
    if let Some(node) = graph.node(id) {
        for (neighbor, weight) in node.weighted_neighbors() {
            frontier.push(Reverse(Edge::new(id, neighbor, weight)));
        }
    }
}

/// Grow a minimum spanning tree from the first node of `graph`.
///
/// The tree is a new graph holding every original node by name, connected
/// by the chosen edges with their original weights. Equal-weight edges may
/// make several trees valid; which one is returned depends on tie-breaking.
pub fn prim_jarnik(graph: &Graph) -> GraphResult<Graph> {
    let mut tree = Graph::new();
    let Some(root) = graph.nodes().first() else {
        return Ok(tree);
    };

    let mut in_tree = vec![false; graph.node_count()];
    in_tree[root.id().index()] = true;
    tree.get_or_create_node(root.name());

    let mut frontier: BinaryHeap<Reverse<Edge>> = BinaryHeap::new();
    push_edges_from(graph, root.id(), &mut frontier);

    while tree.node_count() < graph.node_count() {
        let Some(Reverse(edge)) = frontier.pop() else {
            log::warn!(
                "Prim-Jarnik stopped at {} of {} nodes: graph is not connected",
                tree.node_count(),
                graph.node_count()
            );
            return Err(GraphError::NotConnected {
                reached: tree.node_count(),
                total: graph.node_count(),
            });
        };
        if in_tree[edge.dest.index()] {
            continue;
        }
        in_tree[edge.dest.index()] = true;

        let (Some(source_name), Some(dest_name)) =
            (graph.name_of(edge.source), graph.name_of(edge.dest))
        else {
            return Err(GraphError::UnknownNodeId(edge.dest));
        };
        let source = tree.get_or_create_node(source_name);
        let dest = tree.get_or_create_node(dest_name);
        tree.add_undirected_edge(source, dest, edge.weight)?;

        push_edges_from(graph, edge.dest, &mut frontier);
    }

    log::debug!(
        "Prim-Jarnik spanned {} nodes with {} edges, total weight {}",
        tree.node_count(),
        tree.edge_count(),
        tree.total_weight()
    );
    Ok(tree)
}

impl Graph {
    /// Minimum spanning tree of this graph as a new graph.
    ///
    /// Fails with `GraphError::NotConnected` when some node cannot be reached.
    pub fn prim_jarnik(&self) -> GraphResult<Graph> {
        prim_jarnik(self)
    }
}
