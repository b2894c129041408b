//! Error types for eigraph.

use crate::node::{NodeId, NodeKind};
use std::path::PathBuf;
use thiserror::Error;

/// Error type for graph operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Edge endpoints do not form a live entity-item pair.
    #[error("invalid edge ({a}, {b}): endpoints must be one live entity and one live item")]
    InvalidEdge { a: NodeId, b: NodeId },

    /// Deletion or weight lookup on an edge that is not in the graph.
    #[error("edge ({a}, {b}) not found")]
    EdgeNotFound { a: NodeId, b: NodeId },

    /// Random-neighbor draw on a node with no incident edges.
    #[error("node {node} has no neighbors")]
    EmptyNeighborhood { node: NodeId },

    /// Kind-specific existence check called with an id of the wrong kind.
    #[error("id {id} is not an {expected} id")]
    KindMismatch { id: NodeId, expected: NodeKind },

    /// Loader parameters that cannot produce a valid graph.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Dataset file absent on disk.
    #[error(
        "dataset file {} does not exist; generate it first by running scripts/generate_{}.sh",
        path.display(),
        name
    )]
    MissingDataset { name: String, path: PathBuf },

    /// Corrupt, truncated, or mutually inconsistent persisted artifacts.
    #[error("persistence format error: {0}")]
    PersistenceFormat(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
