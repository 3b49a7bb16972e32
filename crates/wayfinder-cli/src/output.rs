//! Output formatting for route rendering.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use wayfinder_lib::{RouteAlgorithm, RoutePlan};

use crate::terminal::{format_with_separators, ColorPalette};

/// Output formats supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Label used when announcing a route found by `algorithm`.
pub fn algorithm_label(algorithm: RouteAlgorithm) -> &'static str {
    match algorithm {
        RouteAlgorithm::Bfs => "BFS Route",
        RouteAlgorithm::Dfs => "DFS Route",
        RouteAlgorithm::DepthLimited => "Depth Limited Search Route",
        RouteAlgorithm::IterativeDeepening => "Iterative Deep Search Route",
    }
}

/// Render a route plan.
pub fn render_plan<W: Write>(
    out: &mut W,
    plan: &RoutePlan,
    format: OutputFormat,
    palette: ColorPalette,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(
                out,
                "{}{}{} {}{}{} ({} hops)",
                palette.tag_algorithm,
                plan.algorithm,
                palette.reset,
                palette.white_bold,
                plan.steps.join(", "),
                palette.reset,
                plan.hop_count()
            )?;
            writeln!(
                out,
                "{}Total Path cost:{} {}{}{}",
                palette.gray,
                palette.reset,
                palette.cyan,
                format_with_separators(plan.cost),
                palette.reset
            )
        }
        OutputFormat::Json => write_json(out, plan),
    }
}

#[derive(Serialize)]
struct NodeList<'a> {
    count: usize,
    nodes: &'a [&'a str],
}

/// Render the node listing of a map.
pub fn render_nodes<W: Write>(out: &mut W, nodes: &[&str], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Nodes ({}):", nodes.len())?;
            for node in nodes {
                writeln!(out, "- {node}")?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(
            out,
            &NodeList {
                count: nodes.len(),
                nodes,
            },
        ),
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
