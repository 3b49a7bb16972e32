//! Nodes command handler for listing the identifiers in a map.

use std::io::{self, Write};

use anyhow::Result;

use wayfinder_lib::Graph;

use crate::output::{render_nodes, OutputFormat};

/// Handle the nodes subcommand.
pub fn handle_nodes_command(graph: &Graph, format: OutputFormat) -> Result<()> {
    let nodes: Vec<&str> = graph.node_ids().into_iter().collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_nodes(&mut out, &nodes, format)?;
    out.flush()?;
    Ok(())
}
