//! All data types for the weighted graph library.

pub mod edge;
pub mod error;
pub mod node;

pub use edge::{Edge, Path};
pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId};

/// Weight of a single edge. Unsigned, so Dijkstra's non-negative precondition holds by type.
pub type Weight = u32;

/// Accumulated cost of a path (sum of edge weights).
pub type Cost = u64;
