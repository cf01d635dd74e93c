//! Graph traversal algorithms (BFS and DFS) driving a node visitor.

use std::collections::{HashSet, VecDeque};

use crate::types::{GraphError, GraphResult, Node, NodeId};

use super::Graph;

/// Receives each node reached by a traversal, exactly once per traversal.
pub trait NodeVisitor {
    /// Called the first time the traversal reaches `node`.
    fn visit(&mut self, node: &Node);
}

impl<F> NodeVisitor for F
where
    F: FnMut(&Node),
{
    fn visit(&mut self, node: &Node) {
        self(node)
    }
}

/// Visitor that records node names in visit order.
#[derive(Debug, Clone, Default)]
pub struct VisitOrder {
    /// Names in the order they were visited.
    pub names: Vec<String>,
}

impl VisitOrder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NodeVisitor for VisitOrder {
    fn visit(&mut self, node: &Node) {
        self.names.push(node.name().to_string());
    }
}

/// Frontier discipline shared by BFS (queue) and DFS (stack).
enum Frontier {
    Fifo(VecDeque<NodeId>),
    Lifo(Vec<NodeId>),
}

impl Frontier {
    fn push(&mut self, id: NodeId) {
        match self {
            Self::Fifo(queue) => queue.push_back(id),
            Self::Lifo(stack) => stack.push(id),
        }
    }

    fn pop(&mut self) -> Option<NodeId> {
        match self {
            Self::Fifo(queue) => queue.pop_front(),
            Self::Lifo(stack) => stack.pop(),
        }
    }
}

fn traverse<V: NodeVisitor + ?Sized>(
    graph: &Graph,
    start: NodeId,
    mut frontier: Frontier,
    visitor: &mut V,
) -> GraphResult<usize> {
    if graph.node(start).is_none() {
        return Err(GraphError::UnknownNodeId(start));
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    frontier.push(start);

    while let Some(current) = frontier.pop() {
        if !visited.insert(current) {
            continue;
        }
        let Some(node) = graph.node(current) else {
            continue;
        };
        visitor.visit(node);

        for neighbor in node.neighbors() {
            if !visited.contains(&neighbor) {
                frontier.push(neighbor);
            }
        }
    }

    Ok(visited.len())
}

/// Breadth-first traversal from `start`. Returns the number of nodes visited.
///
/// Nodes are visited in non-decreasing hop distance from `start`; the order
/// among siblings follows neighbor iteration order and is unspecified.
pub fn bfs<V: NodeVisitor + ?Sized>(
    graph: &Graph,
    start: NodeId,
    visitor: &mut V,
) -> GraphResult<usize> {
    traverse(graph, start, Frontier::Fifo(VecDeque::new()), visitor)
}

/// Depth-first traversal from `start`. Returns the number of nodes visited.
///
/// Children are pushed in neighbor iteration order and popped in reverse, so
/// the result is a valid DFS order but not a canonical one.
pub fn dfs<V: NodeVisitor + ?Sized>(
    graph: &Graph,
    start: NodeId,
    visitor: &mut V,
) -> GraphResult<usize> {
    traverse(graph, start, Frontier::Lifo(Vec::new()), visitor)
}

impl Graph {
    /// Breadth-first search from the node named `start_name`, creating it if absent.
    ///
    /// `visitor` sees every node reachable from the start exactly once.
    pub fn breadth_first_search<V: NodeVisitor + ?Sized>(
        &mut self,
        start_name: &str,
        visitor: &mut V,
    ) -> usize {
        let start = self.get_or_create_node(start_name);
        log::debug!("BFS from '{}' over {} nodes", start_name, self.node_count());
        // The start id was just issued by this graph.
        bfs(self, start, visitor).unwrap_or(0)
    }

    /// Depth-first search from the node named `start_name`, creating it if absent.
    pub fn depth_first_search<V: NodeVisitor + ?Sized>(
        &mut self,
        start_name: &str,
        visitor: &mut V,
    ) -> usize {
        let start = self.get_or_create_node(start_name);
        log::debug!("DFS from '{}' over {} nodes", start_name, self.node_count());
        dfs(self, start, visitor).unwrap_or(0)
    }

    /// Breadth-first search from an existing node, without creating anything.
    pub fn bfs_from<V: NodeVisitor + ?Sized>(
        &self,
        start: NodeId,
        visitor: &mut V,
    ) -> GraphResult<usize> {
        bfs(self, start, visitor)
    }

    /// Depth-first search from an existing node, without creating anything.
    pub fn dfs_from<V: NodeVisitor + ?Sized>(
        &self,
        start: NodeId,
        visitor: &mut V,
    ) -> GraphResult<usize> {
        dfs(self, start, visitor)
    }
}
