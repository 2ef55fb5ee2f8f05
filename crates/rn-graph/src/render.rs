//! Deterministic adjacency rendering.
//!
//! Output is a pure function of the graph and the requested node order:
//! neighbors always appear sorted ascending by target identifier, so repeated
//! calls produce byte-identical text.

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// Render one line per node of `order`, in that order.
///
/// Each line reads `Node: Target1(W1), Target2(W2)`; a node without outgoing
/// edges renders as `Node:`.
pub fn adjacency_lines<S: AsRef<str>>(graph: &Graph, order: &[S]) -> GraphResult<Vec<String>> {
    order
        .iter()
        .map(|id| adjacency_line(graph, id.as_ref()))
        .collect()
}

fn adjacency_line(graph: &Graph, id: &str) -> GraphResult<String> {
    let neighbors = graph
        .neighbors(id)
        .ok_or_else(|| GraphError::UnknownNodeInOrder { id: id.to_string() })?
        .map(|(to, weight)| format!("{to}({weight})"))
        .collect::<Vec<_>>();

    if neighbors.is_empty() {
        Ok(format!("{id}:"))
    } else {
        Ok(format!("{id}: {}", neighbors.join(", ")))
    }
}

#[cfg(feature = "serde")]
mod json {
    use serde::ser::{Serialize, SerializeMap, Serializer};

    use super::*;

    /// Serializable view of a graph: an object keyed by node in render order,
    /// each value mapping neighbor to weight.
    #[derive(Debug, Clone)]
    pub struct AdjacencyReport<'a> {
        graph: &'a Graph,
        order: Vec<&'a str>,
    }

    impl<'a> AdjacencyReport<'a> {
        /// Validate `order` against the graph and build the report view.
        pub fn new<S: AsRef<str>>(graph: &'a Graph, order: &'a [S]) -> GraphResult<Self> {
            let order = order
                .iter()
                .map(|id| {
                    let id = id.as_ref();
                    if graph.contains_node(id) {
                        Ok(id)
                    } else {
                        Err(GraphError::UnknownNodeInOrder { id: id.to_string() })
                    }
                })
                .collect::<GraphResult<Vec<_>>>()?;
            Ok(Self { graph, order })
        }
    }

    struct Neighbors<'a> {
        graph: &'a Graph,
        id: &'a str,
    }

    impl Serialize for Neighbors<'_> {
        fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
            // Order was validated when the report was built.
            match self.graph.neighbors(self.id) {
                Some(neighbors) => serializer.collect_map(neighbors),
                None => serializer.serialize_map(Some(0))?.end(),
            }
        }
    }

    impl Serialize for AdjacencyReport<'_> {
        fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
            let mut map = serializer.serialize_map(Some(self.order.len()))?;
            for id in &self.order {
                map.serialize_entry(
                    id,
                    &Neighbors {
                        graph: self.graph,
                        id: *id,
                    },
                )?;
            }
            map.end()
        }
    }
}

#[cfg(feature = "serde")]
pub use json::AdjacencyReport;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Graph, Vec<&'static str>) {
        let order = vec!["New York", "Boston", "Chicago"];
        let mut g = Graph::new();
        for n in &order {
            g.add_node(*n).unwrap();
        }
        g.add_edge("New York", "Chicago", 800).unwrap();
        g.add_edge("New York", "Boston", 200).unwrap();
        g.add_edge("Boston", "Chicago", 1000).unwrap();
        (g, order)
    }

    #[test]
    fn renders_sorted_neighbors_in_given_order() {
        let (g, order) = sample();
        assert_eq!(
            adjacency_lines(&g, &order).unwrap(),
            vec![
                "New York: Boston(200), Chicago(800)",
                "Boston: Chicago(1000)",
                "Chicago:",
            ]
        );
    }

    #[test]
    fn render_order_is_caller_controlled() {
        let (g, _) = sample();
        let lines = adjacency_lines(&g, &["Chicago", "Boston"]).unwrap();
        assert_eq!(lines, vec!["Chicago:", "Boston: Chicago(1000)"]);
    }

    #[test]
    fn unknown_node_in_order_fails() {
        let (g, _) = sample();
        assert_eq!(
            adjacency_lines(&g, &["Boston", "Denver"]),
            Err(GraphError::UnknownNodeInOrder {
                id: "Denver".into()
            })
        );
    }

    #[test]
    fn repeated_rendering_is_identical() {
        let (g, order) = sample();
        assert_eq!(
            adjacency_lines(&g, &order).unwrap(),
            adjacency_lines(&g, &order).unwrap()
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_keeps_declaration_order() {
        let (g, order) = sample();
        let report = AdjacencyReport::new(&g, &order).unwrap();
        let json = serde_json::to_string_pretty(&report).unwrap();
        let expected = r#"{
  "New York": {
    "Boston": 200,
    "Chicago": 800
  },
  "Boston": {
    "Chicago": 1000
  },
  "Chicago": {}
}"#;
        assert_eq!(json, expected);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_rejects_unknown_node() {
        let (g, _) = sample();
        assert!(matches!(
            AdjacencyReport::new(&g, &["Nowhere"]),
            Err(GraphError::UnknownNodeInOrder { .. })
        ));
    }
}
