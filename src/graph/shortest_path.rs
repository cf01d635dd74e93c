//! Single-source shortest paths (Dijkstra) with lazy deletion.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::types::{Cost, GraphError, GraphResult, NodeId, Path};

use super::Graph;

/// Result of a Dijkstra run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    /// Start node of the run.
    pub start: NodeId,
    /// Minimum total cost of every node the start can reach.
    pub costs: HashMap<NodeId, Cost>,
    /// Nodes the start cannot reach, in creation order.
    pub unreachable: Vec<NodeId>,
}

impl ShortestPaths {
    /// Minimum cost to `id`, or `None` when it is unreachable.
    pub fn cost(&self, id: NodeId) -> Option<Cost> {
        self.costs.get(&id).copied()
    }

    /// Whether every node of the graph was reached.
    pub fn is_complete(&self) -> bool {
        self.unreachable.is_empty()
    }

    /// The cost map, or `GraphError::Unreachable` naming the nodes that were never reached.
    pub fn into_complete(self, graph: &Graph) -> GraphResult<HashMap<NodeId, Cost>> {
        if self.unreachable.is_empty() {
            return Ok(self.costs);
        }
        let name = |id: NodeId| graph.name_of(id).unwrap_or_default().to_string();
        Err(GraphError::Unreachable {
            start: name(self.start),
            nodes: self.unreachable.into_iter().map(name).collect(),
        })
    }

    /// Costs keyed by node name, for reporting.
    pub fn named_costs<'g>(&self, graph: &'g Graph) -> Vec<(&'g str, Cost)> {
        let mut named: Vec<(&str, Cost)> = self
            .costs
            .iter()
            .filter_map(|(&id, &cost)| graph.name_of(id).map(|n| (n, cost)))
            .collect();
        named.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(b.0)));
        named
    }
}

/// Dijkstra from `start` over non-negative edge weights.
///
/// Stale heap entries are skipped on pop rather than decreased in place. The
/// loop ends when the frontier empties; anything not finalized by then is
/// reported in `unreachable` instead of being assigned a cost.
pub fn dijkstra(graph: &Graph, start: NodeId) -> GraphResult<ShortestPaths> {
    if graph.node(start).is_none() {
        return Err(GraphError::UnknownNodeId(start));
    }

    let mut costs: HashMap<NodeId, Cost> = HashMap::with_capacity(graph.node_count());
    let mut frontier: BinaryHeap<Reverse<Path>> = BinaryHeap::new();
    frontier.push(Reverse(Path::new(start, 0)));

    while let Some(Reverse(path)) = frontier.pop() {
        if costs.contains_key(&path.dest) {
            continue;
        }
        costs.insert(path.dest, path.cost);

        let Some(node) = graph.node(path.dest) else {
            continue;
        };
        for (neighbor, weight) in node.weighted_neighbors() {
            if !costs.contains_key(&neighbor) {
                frontier.push(Reverse(Path::new(neighbor, path.cost + Cost::from(weight))));
            }
        }
    }

    let unreachable: Vec<NodeId> = graph
        .nodes()
        .iter()
        .map(|n| n.id())
        .filter(|id| !costs.contains_key(id))
        .collect();

    if !unreachable.is_empty() {
        log::warn!(
            "Dijkstra from {}: {} of {} nodes unreachable",
            start,
            unreachable.len(),
            graph.node_count()
        );
    }

    Ok(ShortestPaths {
        start,
        costs,
        unreachable,
    })
}

impl Graph {
    /// Minimum total cost from the node named `start_name` to every node it can reach.
    pub fn dijkstra(&self, start_name: &str) -> GraphResult<ShortestPaths> {
        let start = self
            .id_of(start_name)
            .ok_or_else(|| GraphError::NodeNotFound(start_name.to_string()))?;
        log::debug!("Dijkstra from '{}' over {} nodes", start_name, self.node_count());
        dijkstra(self, start)
    }
}
