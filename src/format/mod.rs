//! Text input for graphs. Graphs are read, never written back.

pub mod reader;

pub use reader::{parse_edge_list, EdgeListReader};
