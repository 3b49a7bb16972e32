//! Uninformed search over a [`Graph`].
//!
//! All four traversals share the same [`SearchTree`] arena and input
//! validation. Breadth-first and depth-first search apply the goal test when a
//! child is generated, so they return the first route discovered rather than
//! the cheapest one: BFS yields the route with the fewest hops, not the lowest
//! cost. Depth-limited search keeps "cut off by the bound" distinct from
//! "no route below this node", which is what lets iterative deepening stop on
//! finite acyclic maps.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{canonicalize, Graph};
use crate::route::Route;
use crate::tree::{NodeIndex, SearchTree};

/// Outcome of a depth-limited search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The destination was reached within the limit.
    Found(Route),
    /// The limit was hit on at least one branch; a deeper search may succeed.
    Cutoff,
    /// Every branch dead-ended before the limit; no deeper search can succeed.
    Failure,
}

impl SearchOutcome {
    pub fn route(&self) -> Option<&Route> {
        match self {
            SearchOutcome::Found(route) => Some(route),
            SearchOutcome::Cutoff | SearchOutcome::Failure => None,
        }
    }

    pub fn into_route(self) -> Option<Route> {
        match self {
            SearchOutcome::Found(route) => Some(route),
            SearchOutcome::Cutoff | SearchOutcome::Failure => None,
        }
    }
}

/// Canonicalized, graph-owned endpoints of a validated search.
#[derive(Debug, Clone, Copy)]
struct Endpoints<'g> {
    origin: &'g str,
    destination: &'g str,
}

/// Validate a search request before any traversal starts.
///
/// Checks run in a fixed order: identical endpoints, then an unknown origin,
/// then an unknown destination.
fn resolve_endpoints<'g>(
    graph: &'g Graph,
    origin: &str,
    destination: &str,
) -> Result<Endpoints<'g>> {
    let origin_id = canonicalize(origin);
    let destination_id = canonicalize(destination);

    if origin_id == destination_id {
        return Err(Error::SameEndpoints);
    }

    let origin = graph
        .node_key(&origin_id)
        .ok_or(Error::UnknownOrigin { name: origin_id })?;
    let destination = graph
        .node_key(&destination_id)
        .ok_or(Error::UnknownDestination {
            name: destination_id,
        })?;

    Ok(Endpoints {
        origin,
        destination,
    })
}

fn path_not_found(endpoints: Endpoints<'_>) -> Error {
    Error::PathNotFound {
        origin: endpoints.origin.to_string(),
        destination: endpoints.destination.to_string(),
    }
}

/// Frontier discipline shared by breadth-first and depth-first search.
trait Frontier {
    fn push(&mut self, node: NodeIndex);
    fn pop(&mut self) -> Option<NodeIndex>;
}

/// First in, first out.
#[derive(Default)]
struct Queue(VecDeque<NodeIndex>);

impl Frontier for Queue {
    fn push(&mut self, node: NodeIndex) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<NodeIndex> {
        self.0.pop_front()
    }
}

/// Last in, first out.
#[derive(Default)]
struct Stack(Vec<NodeIndex>);

impl Frontier for Stack {
    fn push(&mut self, node: NodeIndex) {
        self.0.push(node);
    }

    fn pop(&mut self) -> Option<NodeIndex> {
        self.0.pop()
    }
}

/// Run breadth-first search from `origin` to `destination`.
///
/// Returns the route with the fewest hops. Ties between equally short routes
/// are broken by the order neighbours were inserted into the graph.
pub fn breadth_first_search(graph: &Graph, origin: &str, destination: &str) -> Result<Route> {
    let endpoints = resolve_endpoints(graph, origin, destination)?;
    frontier_search(graph, endpoints, Queue::default(), "breadth-first")
}

/// Run depth-first search from `origin` to `destination`.
///
/// Children are pushed in neighbour order, so the last neighbour listed for a
/// node is explored first.
pub fn depth_first_search(graph: &Graph, origin: &str, destination: &str) -> Result<Route> {
    let endpoints = resolve_endpoints(graph, origin, destination)?;
    frontier_search(graph, endpoints, Stack::default(), "depth-first")
}

fn frontier_search<'g, F: Frontier>(
    graph: &'g Graph,
    endpoints: Endpoints<'g>,
    mut frontier: F,
    strategy: &'static str,
) -> Result<Route> {
    let (mut tree, root) = SearchTree::with_root(endpoints.origin);
    let mut visited: HashSet<&'g str> = HashSet::new();
    let mut queued: HashSet<&'g str> = HashSet::from([endpoints.origin]);
    frontier.push(root);

    while let Some(current) = frontier.pop() {
        let current_id = tree.node(current).id;
        queued.remove(current_id);
        if !visited.insert(current_id) {
            continue;
        }
        trace!(strategy, node = current_id, "expanding node");

        for edge in graph.neighbours(current_id) {
            let child = tree.expand(current, edge.target.as_str(), edge.cost);
            let child_id = tree.node(child).id;

            if child_id == endpoints.destination {
                let route = tree.reconstruct(child);
                debug!(
                    strategy,
                    origin = endpoints.origin,
                    destination = endpoints.destination,
                    expanded = visited.len(),
                    generated = tree.len(),
                    cost = route.cost,
                    "search reached destination"
                );
                return Ok(route);
            }

            if !visited.contains(child_id) && queued.insert(child_id) {
                frontier.push(child);
            }
        }
    }

    debug!(
        strategy,
        origin = endpoints.origin,
        destination = endpoints.destination,
        expanded = visited.len(),
        "frontier exhausted"
    );
    Err(path_not_found(endpoints))
}

/// Run depth-limited search, exploring at most `limit` edges from `origin`.
///
/// No visited set is kept: cycles are bounded only by the depth limit, and a
/// node may reappear on a branch while depth remains. The first route found
/// in depth-first order is returned, which is not necessarily the shortest.
pub fn depth_limited_search(
    graph: &Graph,
    origin: &str,
    destination: &str,
    limit: usize,
) -> Result<SearchOutcome> {
    let endpoints = resolve_endpoints(graph, origin, destination)?;
    Ok(limited(graph, endpoints, limit))
}

fn limited(graph: &Graph, endpoints: Endpoints<'_>, limit: usize) -> SearchOutcome {
    let (mut tree, root) = SearchTree::with_root(endpoints.origin);
    let outcome = bounded_depth_first(graph, &mut tree, root, endpoints.destination, limit);
    debug!(
        origin = endpoints.origin,
        destination = endpoints.destination,
        limit,
        outcome = outcome_label(&outcome),
        "depth-limited search finished"
    );
    outcome
}

/// One node on the live branch of a depth-limited search.
struct Frame {
    node: NodeIndex,
    remaining: usize,
    /// Position of the next neighbour to generate.
    next_edge: usize,
    /// Tree length once this node was generated; children above it are dropped
    /// on backtrack.
    mark: usize,
    cutoff: bool,
}

impl Frame {
    fn new(node: NodeIndex, remaining: usize, mark: usize) -> Self {
        Self {
            node,
            remaining,
            next_edge: 0,
            mark,
            cutoff: false,
        }
    }
}

/// Depth-first walk of every branch up to `limit` edges, driven by an explicit
/// stack so the limit never translates into call depth.
fn bounded_depth_first<'g>(
    graph: &'g Graph,
    tree: &mut SearchTree<'g>,
    root: NodeIndex,
    destination: &str,
    limit: usize,
) -> SearchOutcome {
    if tree.node(root).id == destination {
        return SearchOutcome::Found(tree.reconstruct(root));
    }
    if limit == 0 {
        return SearchOutcome::Cutoff;
    }

    let mut stack = vec![Frame::new(root, limit, tree.len())];
    while let Some(frame) = stack.last_mut() {
        let current_id = tree.node(frame.node).id;
        let Some(edge) = graph.neighbours(current_id).get(frame.next_edge) else {
            let cutoff = frame.cutoff;
            stack.pop();
            match stack.last_mut() {
                Some(parent) => {
                    parent.cutoff |= cutoff;
                    tree.truncate(parent.mark);
                }
                None if cutoff => return SearchOutcome::Cutoff,
                None => return SearchOutcome::Failure,
            }
            continue;
        };
        frame.next_edge += 1;

        let child = tree.expand(frame.node, edge.target.as_str(), edge.cost);
        if tree.node(child).id == destination {
            return SearchOutcome::Found(tree.reconstruct(child));
        }

        let remaining = frame.remaining - 1;
        if remaining == 0 {
            frame.cutoff = true;
            tree.truncate(frame.mark);
        } else {
            let mark = tree.len();
            stack.push(Frame::new(child, remaining, mark));
        }
    }

    SearchOutcome::Failure
}

fn outcome_label(outcome: &SearchOutcome) -> &'static str {
    match outcome {
        SearchOutcome::Found(_) => "found",
        SearchOutcome::Cutoff => "cutoff",
        SearchOutcome::Failure => "failure",
    }
}

/// Run iterative-deepening search with depth limits `0, step, 2*step, ...`.
///
/// Stops with [`Error::PathNotFound`] once a depth-limited pass dead-ends
/// everywhere without a cutoff. On a cyclic map with an unreachable
/// destination every pass reports a cutoff and this function never returns;
/// use [`iterative_deepening_search_bounded`] when execution must be bounded.
pub fn iterative_deepening_search(
    graph: &Graph,
    origin: &str,
    destination: &str,
    step_size: usize,
) -> Result<Route> {
    deepen(graph, origin, destination, step_size, None)
}

/// Iterative deepening that gives up with [`Error::DepthLimitReached`] when
/// the next limit would exceed `max_depth`.
pub fn iterative_deepening_search_bounded(
    graph: &Graph,
    origin: &str,
    destination: &str,
    step_size: usize,
    max_depth: usize,
) -> Result<Route> {
    deepen(graph, origin, destination, step_size, Some(max_depth))
}

fn deepen(
    graph: &Graph,
    origin: &str,
    destination: &str,
    step_size: usize,
    max_depth: Option<usize>,
) -> Result<Route> {
    let endpoints = resolve_endpoints(graph, origin, destination)?;
    if step_size == 0 {
        return Err(Error::InvalidStepSize);
    }

    let mut limit = 0usize;
    loop {
        match limited(graph, endpoints, limit) {
            SearchOutcome::Found(route) => return Ok(route),
            SearchOutcome::Failure => return Err(path_not_found(endpoints)),
            SearchOutcome::Cutoff => {}
        }

        let next = limit.saturating_add(step_size);
        if let Some(cap) = max_depth {
            if next > cap {
                return Err(Error::DepthLimitReached { limit });
            }
        }
        limit = next;
    }
}
