//! Road map storage.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use serde::Serialize;

/// Directed edge within the road map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub target: String,
    pub cost: u64,
}

/// Road map used by the search algorithms.
///
/// Node identifiers are stored in canonical (title case) form only. The
/// adjacency map sits behind an [`Arc`], so cloning a loaded graph to hand it
/// to several searches is cheap; insertion copies the map on write.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<String, Vec<Edge>>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no outgoing edges. Existing nodes are left untouched.
    pub fn insert_node(&mut self, id: &str) {
        Arc::make_mut(&mut self.adjacency)
            .entry(canonicalize(id))
            .or_default();
    }

    /// Add a directed edge from `origin` to `destination`.
    ///
    /// `origin` is created when missing; `destination` is not. Re-inserting an
    /// identical arc is a no-op.
    pub fn insert_arc(&mut self, origin: &str, destination: &str, cost: u64) {
        let edge = Edge {
            target: canonicalize(destination),
            cost,
        };
        let edges = Arc::make_mut(&mut self.adjacency)
            .entry(canonicalize(origin))
            .or_default();
        if !edges.contains(&edge) {
            edges.push(edge);
        }
    }

    /// Add a bidirectional edge of equal cost, creating both endpoints.
    pub fn insert_edge(&mut self, a: &str, b: &str, cost: u64) {
        self.insert_node(a);
        self.insert_node(b);
        self.insert_arc(a, b, cost);
        self.insert_arc(b, a, cost);
    }

    /// Whether the (canonicalized) identifier is a node of the graph.
    pub fn has_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(&canonicalize(id))
    }

    /// Return the graph-owned key for `id`, if present.
    pub(crate) fn node_key(&self, id: &str) -> Option<&str> {
        self.adjacency
            .get_key_value(&canonicalize(id))
            .map(|(key, _)| key.as_str())
    }

    /// Return the outgoing edges of a node; unknown nodes are dead ends.
    pub fn neighbours(&self, id: &str) -> &[Edge] {
        self.adjacency
            .get(id)
            .or_else(|| self.adjacency.get(&canonicalize(id)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All node identifiers in sorted order.
    pub fn node_ids(&self) -> BTreeSet<&str> {
        self.adjacency.keys().map(String::as_str).collect()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

/// Normalize a node identifier: trim it and convert it to title case.
///
/// The first letter of every alphabetic run is upper-cased and the rest are
/// lower-cased, so `"rimnicu VILCEA"` becomes `"Rimnicu Vilcea"`.
pub fn canonicalize(id: &str) -> String {
    let mut canonical = String::with_capacity(id.len());
    let mut previous_is_letter = false;
    for ch in id.trim().chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                canonical.extend(ch.to_lowercase());
            } else {
                canonical.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            canonical.push(ch);
            previous_is_letter = false;
        }
    }
    canonical
}
