//! Route command handler for computing paths between map nodes.

use std::io::{self, Write};

use anyhow::Result;
use clap::ValueEnum;

use wayfinder_lib::{plan_route, Graph, RouteAlgorithm, RouteRequest};

use crate::output::{render_plan, OutputFormat};
use crate::terminal::ColorPalette;

/// Algorithm names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    /// Breadth-first search.
    #[default]
    Bfs,
    /// Depth-first search.
    Dfs,
    /// Depth-limited search (uses --depth-limit).
    Dls,
    /// Iterative-deepening search (uses --step-size and --max-depth).
    Ids,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Bfs => RouteAlgorithm::Bfs,
            AlgorithmArg::Dfs => RouteAlgorithm::Dfs,
            AlgorithmArg::Dls => RouteAlgorithm::DepthLimited,
            AlgorithmArg::Ids => RouteAlgorithm::IterativeDeepening,
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting node name.
    pub from: String,
    /// Destination node name.
    pub to: String,
    /// Algorithm to use when searching.
    pub algorithm: AlgorithmArg,
    /// Depth limit for depth-limited search.
    pub depth_limit: usize,
    /// Step size for iterative deepening.
    pub step_size: usize,
    /// Optional cap for iterative deepening.
    pub max_depth: Option<usize>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest {
            origin: self.from.clone(),
            destination: self.to.clone(),
            algorithm: self.algorithm.into(),
            depth_limit: self.depth_limit,
            step_size: self.step_size,
            max_depth: self.max_depth,
        }
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    graph: &Graph,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let request = args.to_request();
    tracing::debug!(
        origin = %request.origin,
        destination = %request.destination,
        algorithm = %request.algorithm,
        "planning route"
    );
    let plan = plan_route(graph, &request)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_plan(&mut out, &plan, format, ColorPalette::detect())?;
    out.flush()?;
    Ok(())
}
