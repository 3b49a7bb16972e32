//! Request/plan façade that dispatches to the search algorithms.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{canonicalize, Graph};
use crate::route::Route;
use crate::search::{
    breadth_first_search, depth_first_search, depth_limited_search, iterative_deepening_search,
    iterative_deepening_search_bounded, SearchOutcome,
};

/// Default increment between iterative-deepening passes.
pub const DEFAULT_STEP_SIZE: usize = 1;

/// Supported search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Breadth-first search (fewest hops).
    #[default]
    Bfs,
    /// Depth-first search.
    Dfs,
    /// Depth-first search bounded by a fixed depth limit.
    DepthLimited,
    /// Repeated depth-limited search with a growing limit.
    IterativeDeepening,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Bfs => "bfs",
            RouteAlgorithm::Dfs => "dfs",
            RouteAlgorithm::DepthLimited => "dls",
            RouteAlgorithm::IterativeDeepening => "ids",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    pub algorithm: RouteAlgorithm,
    /// Depth limit used by [`RouteAlgorithm::DepthLimited`].
    pub depth_limit: usize,
    /// Limit increment used by [`RouteAlgorithm::IterativeDeepening`].
    pub step_size: usize,
    /// Optional cap on the iterative-deepening limit.
    pub max_depth: Option<usize>,
}

impl RouteRequest {
    fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        algorithm: RouteAlgorithm,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            algorithm,
            depth_limit: 0,
            step_size: DEFAULT_STEP_SIZE,
            max_depth: None,
        }
    }

    pub fn bfs(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::new(origin, destination, RouteAlgorithm::Bfs)
    }

    pub fn dfs(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::new(origin, destination, RouteAlgorithm::Dfs)
    }

    pub fn depth_limited(
        origin: impl Into<String>,
        destination: impl Into<String>,
        depth_limit: usize,
    ) -> Self {
        Self {
            depth_limit,
            ..Self::new(origin, destination, RouteAlgorithm::DepthLimited)
        }
    }

    pub fn iterative_deepening(
        origin: impl Into<String>,
        destination: impl Into<String>,
        step_size: usize,
    ) -> Self {
        Self {
            step_size,
            ..Self::new(origin, destination, RouteAlgorithm::IterativeDeepening)
        }
    }

    /// Cap iterative deepening at `max_depth`.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub origin: String,
    pub destination: String,
    pub steps: Vec<String>,
    pub cost: u64,
}

impl RoutePlan {
    fn from_route(algorithm: RouteAlgorithm, route: Route) -> Self {
        let origin = route.origin().unwrap_or_default().to_string();
        let destination = route.destination().unwrap_or_default().to_string();
        Self {
            algorithm,
            origin,
            destination,
            steps: route.steps,
            cost: route.cost,
        }
    }

    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

impl fmt::Display for RoutePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\nTotal Path cost: {}", self.steps.join(", "), self.cost)
    }
}

/// Compute a route using the requested algorithm.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let origin = request.origin.as_str();
    let destination = request.destination.as_str();

    let route = match request.algorithm {
        RouteAlgorithm::Bfs => breadth_first_search(graph, origin, destination)?,
        RouteAlgorithm::Dfs => depth_first_search(graph, origin, destination)?,
        RouteAlgorithm::DepthLimited => {
            match depth_limited_search(graph, origin, destination, request.depth_limit)? {
                SearchOutcome::Found(route) => route,
                SearchOutcome::Cutoff => {
                    return Err(Error::DepthLimitReached {
                        limit: request.depth_limit,
                    })
                }
                SearchOutcome::Failure => {
                    return Err(Error::PathNotFound {
                        origin: canonicalize(origin),
                        destination: canonicalize(destination),
                    })
                }
            }
        }
        RouteAlgorithm::IterativeDeepening => match request.max_depth {
            Some(max_depth) => iterative_deepening_search_bounded(
                graph,
                origin,
                destination,
                request.step_size,
                max_depth,
            )?,
            None => iterative_deepening_search(graph, origin, destination, request.step_size)?,
        },
    };

    Ok(RoutePlan::from_route(request.algorithm, route))
}
