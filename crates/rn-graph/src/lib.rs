//! rn-graph: directed, weighted road network for roadnet.
//!
//! Provides:
//! - The owned `Graph` structure (cities + one-way roads keyed by target)
//! - Mutation and query operations with closed error variants
//! - Deterministic adjacency rendering (text, and JSON with the `serde` feature)
//!
//! # Example
//!
//! ```
//! use rn_graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_node("Boston").unwrap();
//! graph.add_node("Chicago").unwrap();
//! graph.add_edge("Boston", "Chicago", 1000).unwrap();
//!
//! let lines = graph.to_adjacency_lines(&["Boston", "Chicago"]).unwrap();
//! assert_eq!(lines, vec!["Boston: Chicago(1000)", "Chicago:"]);
//! ```

pub mod error;
pub mod graph;
pub mod render;

// Re-exports for ergonomics
pub use error::{GraphError, GraphResult};
pub use graph::{Graph, Weight};
pub use render::adjacency_lines;
#[cfg(feature = "serde")]
pub use render::AdjacencyReport;
