//! Map file discovery and loading.
//!
//! A map is a headerless CSV of `origin,destination,cost` lines; every line
//! becomes a bidirectional edge.

use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Environment variable consulted when no explicit map path is provided.
pub const MAP_ENV_VAR: &str = "WAYFINDER_MAP";

/// Default map filename, resolved against the working directory.
const MAP_FILENAME: &str = "route.csv";

/// One `origin,destination,cost` line of a map file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub origin: String,
    pub destination: String,
    pub cost: u64,
}

/// Resolve the map location.
///
/// Resolution order: the explicit `target`, then the `WAYFINDER_MAP`
/// environment variable, then `route.csv` in the current directory.
pub fn resolve_map_path(target: Option<&Path>) -> PathBuf {
    if let Some(path) = target {
        return path.to_path_buf();
    }
    match env::var_os(MAP_ENV_VAR) {
        Some(value) if !value.is_empty() => {
            let path = PathBuf::from(value);
            debug!(path = %path.display(), "using map from {}", MAP_ENV_VAR);
            path
        }
        _ => PathBuf::from(MAP_FILENAME),
    }
}

/// Load a map file into a [`Graph`], inserting every line as a bidirectional
/// edge.
pub fn load_graph(path: &Path) -> Result<Graph> {
    if !path.is_file() {
        return Err(Error::MapNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = fs::File::open(path)?;
    let graph = graph_from_reader(file)?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded map"
    );
    Ok(graph)
}

/// Build a [`Graph`] from edge-list data held in any reader.
pub fn graph_from_reader<R: Read>(reader: R) -> Result<Graph> {
    let mut graph = Graph::new();
    for record in read_edges(reader)? {
        graph.insert_edge(&record.origin, &record.destination, record.cost);
    }
    Ok(graph)
}

/// Parse edge-list data without building a graph.
///
/// Lines have no header and exactly three comma-separated fields. Blank lines
/// are skipped; surrounding whitespace is trimmed from every field.
pub fn read_edges<R: Read>(reader: R) -> Result<Vec<EdgeRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut edges = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        if is_blank(&record) {
            continue;
        }
        edges.push(parse_edge(&record, line)?);
    }
    Ok(edges)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

fn parse_edge(record: &StringRecord, line: u64) -> Result<EdgeRecord> {
    let (Some(origin), Some(destination), Some(cost), None) =
        (record.get(0), record.get(1), record.get(2), record.get(3))
    else {
        return Err(Error::MalformedEdge {
            line,
            fields: record.len(),
        });
    };

    if origin.is_empty() || destination.is_empty() {
        return Err(Error::MalformedEdge {
            line,
            fields: record.iter().filter(|field| !field.is_empty()).count(),
        });
    }

    let cost = cost.parse::<u64>().map_err(|_| Error::InvalidCost {
        line,
        value: cost.to_string(),
    })?;

    Ok(EdgeRecord {
        origin: origin.to_string(),
        destination: destination.to_string(),
        cost,
    })
}
