//! Fluent API for building Graph instances.

use crate::types::{GraphResult, Weight};

use super::Graph;

/// Fluent builder for constructing a Graph from named edges.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<String>,
    edges: Vec<(String, String, Weight)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, even if no edge ever touches it.
    pub fn node(&mut self, name: &str) -> &mut Self {
        self.nodes.push(name.to_string());
        self
    }

    /// Add an undirected edge between two named nodes.
    pub fn link(&mut self, a: &str, b: &str, weight: Weight) -> &mut Self {
        self.edges.push((a.to_string(), b.to_string(), weight));
        self
    }

    /// Build the final Graph.
    ///
    /// Nodes added with [`GraphBuilder::node`] are created first, then edge
    /// endpoints in link order.
    pub fn build(&self) -> GraphResult<Graph> {
        let mut graph = Graph::new();
        for name in &self.nodes {
            graph.get_or_create_node(name);
        }
        for (a, b, weight) in &self.edges {
            let a = graph.get_or_create_node(a);
            let b = graph.get_or_create_node(b);
            graph.add_undirected_edge(a, b, *weight)?;
        }
        Ok(graph)
    }
}

/// Build a graph directly from `(a, b, weight)` triples.
pub fn from_edges<'a, I>(edges: I) -> GraphResult<Graph>
where
    I: IntoIterator<Item = (&'a str, &'a str, Weight)>,
{
    let mut builder = GraphBuilder::new();
    for (a, b, weight) in edges {
        builder.link(a, b, weight);
    }
    builder.build()
}
