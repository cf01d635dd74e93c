//! Reads plain-text edge lists into an in-memory graph.
//!
//! One entry per line:
//!
//! ```text
//! # comment
//! A B 4     undirected edge A-B with weight 4
//! C         isolated node C
//! ```

use std::io::Read;
use std::path::Path;

use crate::graph::{Graph, GraphBuilder};
use crate::types::{GraphError, GraphResult, Weight};

/// Reader for edge-list text files.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read an edge-list file into a Graph.
    pub fn read_from_file(path: &Path) -> GraphResult<Graph> {
        let text = std::fs::read_to_string(path)?;
        parse_edge_list(&text)
    }

    /// Read from any reader into a Graph.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<Graph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        parse_edge_list(&text)
    }
}

/// Parse edge-list text. Line numbers in errors are 1-based.
pub fn parse_edge_list(text: &str) -> GraphResult<Graph> {
    let mut builder = GraphBuilder::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        let fields: Vec<&str> = line.split_whitespace().collect();

        match fields.as_slice() {
            [] => {}
            [name] => {
                builder.node(name);
            }
            [a, b, weight] => {
                let weight: Weight = weight.parse().map_err(|_| GraphError::Parse {
                    line: line_no,
                    message: format!("invalid weight '{}'", weight),
                })?;
                builder.link(a, b, weight);
            }
            other => {
                return Err(GraphError::Parse {
                    line: line_no,
                    message: format!("expected 'A B weight' or 'A', got {} fields", other.len()),
                });
            }
        }
    }

    let graph = builder.build()?;
    log::debug!(
        "Parsed edge list: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edges_nodes_and_comments() {
        let text = "# triangle\nA B 1\nB C 2   # inline\n\nA C 4\nD\n";
        let graph = parse_edge_list(text).unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.weight_between("B", "C").unwrap(), 2);
        assert_eq!(graph.node_by_name("D").unwrap().degree(), 0);
    }

    #[test]
    fn rejects_negative_weight() {
        let err = parse_edge_list("A B 1\nB C -2\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    }

    #[test]
    fn rejects_two_field_line() {
        let err = parse_edge_list("A B\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));
    }

    #[test]
    fn duplicate_edge_keeps_last_weight() {
        let graph = parse_edge_list("A B 5\nB A 2\n").unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight_between("A", "B").unwrap(), 2);
    }
}
