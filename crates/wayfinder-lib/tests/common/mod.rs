//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use wayfinder_lib::{load_graph, Graph};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the Romania road map fixture.
pub fn romania_path() -> PathBuf {
    fixtures_dir().join("romania.csv")
}

/// Load the Romania road map fixture.
#[allow(dead_code)]
pub fn romania() -> Graph {
    load_graph(&romania_path()).expect("romania fixture loads")
}

/// Every ordered pair of distinct nodes in the graph.
#[allow(dead_code)]
pub fn node_pairs(graph: &Graph) -> Vec<(String, String)> {
    let nodes: Vec<String> = graph.node_ids().into_iter().map(str::to_string).collect();
    nodes
        .iter()
        .flat_map(|origin| {
            nodes
                .iter()
                .filter(move |destination| *destination != origin)
                .map(move |destination| (origin.clone(), destination.clone()))
        })
        .collect()
}
