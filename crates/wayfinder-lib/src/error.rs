//! Error types for the Wayfinder library.

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Wayfinder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The search-related variants render the exact messages shown to users of
/// the route prompt, so callers can print them verbatim.
#[derive(Debug, Error)]
pub enum Error {
    /// Origin and destination canonicalize to the same node.
    #[error("Source and Destination cannot be same.")]
    SameEndpoints,

    /// The origin is not present in the map.
    #[error("Unable to find 'Source City' in the map.")]
    UnknownOrigin { name: String },

    /// The destination is not present in the map.
    #[error("Unable to find 'Destination City' in the map.")]
    UnknownDestination { name: String },

    /// The search space was exhausted without reaching the destination.
    #[error("Path not found.")]
    PathNotFound { origin: String, destination: String },

    /// A depth bound was hit before the destination could be reached.
    #[error("Path not found within depth limit {limit}.")]
    DepthLimitReached { limit: usize },

    /// Iterative deepening needs a positive increment.
    #[error("Step size must be at least 1.")]
    InvalidStepSize,

    /// Map file could not be located at the resolved path.
    #[error("map not found at {path}")]
    MapNotFound { path: PathBuf },

    /// An edge line did not contain exactly `origin,destination,cost`.
    #[error("line {line}: expected 3 fields (origin,destination,cost), found {fields}")]
    MalformedEdge { line: u64, fields: usize },

    /// An edge cost was not a non-negative integer.
    #[error("line {line}: invalid edge cost '{value}'")]
    InvalidCost { line: u64, value: String },

    /// Wrapper for CSV decoding errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// `true` when the error describes bad search input rather than a failed search.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::SameEndpoints
                | Error::UnknownOrigin { .. }
                | Error::UnknownDestination { .. }
                | Error::InvalidStepSize
        )
    }
}
