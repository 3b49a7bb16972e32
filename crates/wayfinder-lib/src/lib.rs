//! Wayfinder library entry points.
//!
//! This crate loads edge-list road maps into a [`Graph`] and runs uninformed
//! searches over them: breadth-first, depth-first, depth-limited and
//! iterative-deepening. Higher-level consumers (the CLI) should only depend on
//! the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod route;
pub mod routing;
pub mod search;
pub mod tree;

pub use dataset::{graph_from_reader, load_graph, read_edges, resolve_map_path, EdgeRecord};
pub use error::{Error, Result};
pub use graph::{canonicalize, Edge, Graph};
pub use route::Route;
pub use routing::{plan_route, RouteAlgorithm, RoutePlan, RouteRequest};
pub use search::{
    breadth_first_search, depth_first_search, depth_limited_search, iterative_deepening_search,
    iterative_deepening_search_bounded, SearchOutcome,
};
pub use tree::{NodeIndex, SearchNode, SearchTree};
