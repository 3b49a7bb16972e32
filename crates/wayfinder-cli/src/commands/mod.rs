// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

pub mod interactive;
pub mod nodes;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};

use wayfinder_lib::{load_graph, resolve_map_path, Graph};

/// Resolve and load the map shared by every subcommand.
pub fn load_map(target: Option<&Path>) -> Result<Graph> {
    let path = resolve_map_path(target);
    load_graph(&path).with_context(|| format!("failed to load map from {}", path.display()))
}
