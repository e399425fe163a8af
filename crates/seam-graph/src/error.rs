//! Error types for graph assembly.

use thiserror::Error;

use crate::file_id::FileId;

/// Errors reported by [`DependencyGraph`](crate::graph::DependencyGraph).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint does not name a vertex of the graph.
    #[error("edge {from} -> {to} is out of range for a graph of {vertices} vertices")]
    EdgeOutOfRange {
        from: FileId,
        to: FileId,
        vertices: usize,
    },
}

pub type GraphResult<T> = std::result::Result<T, GraphError>;
