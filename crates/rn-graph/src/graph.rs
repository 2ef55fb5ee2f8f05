//! Core graph data structure.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::error::{GraphError, GraphResult};

/// Cost of travelling a road. Non-negative by construction.
pub type Weight = u64;

/// A directed, weighted graph of named cities.
///
/// The graph stores:
/// - Node identifiers in insertion order (used for stable iteration).
/// - For each node, its outgoing edges keyed by target. Targets are kept
///   sorted so neighbor iteration is deterministic.
///
/// Every edge endpoint is a node currently in the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    order: Vec<String>,
    edges: HashMap<String, BTreeMap<String, Weight>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new node.
    pub fn add_node(&mut self, id: impl Into<String>) -> GraphResult<()> {
        let id = id.into();
        if self.edges.contains_key(&id) {
            return Err(GraphError::DuplicateNode { id });
        }
        debug!(node = %id, "add node");
        self.edges.insert(id.clone(), BTreeMap::new());
        self.order.push(id);
        Ok(())
    }

    /// Insert or overwrite the edge `from -> to`.
    ///
    /// Both endpoints must already exist. An existing edge for the same pair
    /// keeps only the new weight.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> GraphResult<()> {
        if !self.edges.contains_key(to) {
            return Err(not_found(to));
        }
        let outgoing = self.edges.get_mut(from).ok_or_else(|| not_found(from))?;
        if let Some(previous) = outgoing.insert(to.to_string(), weight) {
            debug!(from, to, previous, weight, "overwrite edge");
        } else {
            debug!(from, to, weight, "add edge");
        }
        Ok(())
    }

    /// Remove a node together with every edge that starts or ends at it.
    pub fn remove_node(&mut self, id: &str) -> GraphResult<()> {
        if self.edges.remove(id).is_none() {
            return Err(not_found(id));
        }
        self.order.retain(|n| n != id);
        for outgoing in self.edges.values_mut() {
            outgoing.remove(id);
        }
        debug!(node = id, "remove node");
        Ok(())
    }

    /// Remove the edge `from -> to`, returning whether one was present.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        self.edges
            .get_mut(from)
            .and_then(|outgoing| outgoing.remove(to))
            .is_some()
    }

    /// Render one adjacency line per node of `order`. See [`crate::render::adjacency_lines`].
    pub fn to_adjacency_lines<S: AsRef<str>>(&self, order: &[S]) -> GraphResult<Vec<String>> {
        crate::render::adjacency_lines(self, order)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.edges.contains_key(id)
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn weight(&self, from: &str, to: &str) -> Option<Weight> {
        self.edges.get(from)?.get(to).copied()
    }

    /// Outgoing edges of `id`, sorted ascending by target identifier.
    ///
    /// Returns `None` if `id` is not a node.
    pub fn neighbors(&self, id: &str) -> Option<impl Iterator<Item = (&str, Weight)> + '_> {
        self.edges
            .get(id)
            .map(|outgoing| outgoing.iter().map(|(to, w)| (to.as_str(), *w)))
    }

    /// Node identifiers in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn not_found(id: &str) -> GraphError {
    GraphError::NotFound { id: id.to_string() }
}
