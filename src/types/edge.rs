//! Weighted edge and tentative path records used by the priority-queue algorithms.

use std::cmp::Ordering;

use serde::Serialize;

use super::{Cost, NodeId, Weight};

/// An undirected weighted connection between two nodes.
///
/// Ordered by weight ascending. Equal weights fall back to `(source, dest)`
/// so heap pops are stable for a given graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Endpoint the edge was discovered from.
    pub source: NodeId,
    /// Endpoint the edge leads to.
    pub dest: NodeId,
    /// Edge weight.
    pub weight: Weight,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: NodeId, dest: NodeId, weight: Weight) -> Self {
        Self {
            source,
            dest,
            weight,
        }
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.source.cmp(&other.source))
            .then(self.dest.cmp(&other.dest))
    }
}

/// A tentative route to `dest` with its accumulated cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Path {
    /// Node this path ends at.
    pub dest: NodeId,
    /// Sum of edge weights along the path.
    pub cost: Cost,
}

impl Path {
    /// Create a new path record.
    pub fn new(dest: NodeId, cost: Cost) -> Self {
        Self { dest, cost }
    }
}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Path {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then(self.dest.cmp(&other.dest))
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} with cost {}", self.dest, self.cost)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    use super::*;

    #[test]
    fn edges_pop_lightest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(Edge::new(NodeId(0), NodeId(1), 5)));
        heap.push(Reverse(Edge::new(NodeId(0), NodeId(2), 1)));
        heap.push(Reverse(Edge::new(NodeId(1), NodeId(2), 3)));

        let weights: Vec<Weight> = std::iter::from_fn(|| heap.pop())
            .map(|Reverse(e)| e.weight)
            .collect();
        assert_eq!(weights, vec![1, 3, 5]);
    }

    #[test]
    fn equal_weight_edges_break_ties_by_endpoints() {
        let a = Edge::new(NodeId(0), NodeId(2), 4);
        let b = Edge::new(NodeId(1), NodeId(0), 4);
        assert!(a < b);
    }

    #[test]
    fn paths_pop_cheapest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(Path::new(NodeId(3), 10)));
        heap.push(Reverse(Path::new(NodeId(1), 0)));
        heap.push(Reverse(Path::new(NodeId(2), 4)));

        let Reverse(first) = heap.pop().unwrap();
        assert_eq!(first, Path::new(NodeId(1), 0));
        let Reverse(second) = heap.pop().unwrap();
        assert_eq!(second.cost, 4);
    }
}
