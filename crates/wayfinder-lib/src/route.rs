//! Routes returned by the search functions.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::graph::Graph;

/// Route found by a search: the visited nodes from origin to destination and
/// the cumulative edge cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub steps: Vec<String>,
    pub cost: u64,
}

impl Route {
    /// Number of edges in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn origin(&self) -> Option<&str> {
        self.steps.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.steps.last().map(String::as_str)
    }

    /// Whether the route follows arcs of `graph` whose costs add up to
    /// [`Route::cost`].
    ///
    /// Parallel arcs between the same pair of nodes are all considered, so a
    /// route is accepted as long as one choice of arcs explains its cost.
    pub fn matches_graph(&self, graph: &Graph) -> bool {
        let mut totals = BTreeSet::from([0u64]);
        for pair in self.steps.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            let costs: Vec<u64> = graph
                .neighbours(from)
                .iter()
                .filter(|edge| edge.target == *to)
                .map(|edge| edge.cost)
                .collect();
            totals = totals
                .iter()
                .flat_map(|total| costs.iter().map(move |cost| total.saturating_add(*cost)))
                .filter(|total| *total <= self.cost)
                .collect();
            if totals.is_empty() {
                return false;
            }
        }
        totals.contains(&self.cost)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\nTotal Path cost: {}", self.steps.join(", "), self.cost)
    }
}
