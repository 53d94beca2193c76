//! Error taxonomy for graph construction and queries.
//!
//! Every failure mode is a distinct variant so callers can match on it;
//! there are no magic sentinel values (`-1`, `0`) standing in for errors.

use thiserror::Error;

/// Errors produced by [`DiGraph`](crate::DiGraph) construction and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An adjacency input referenced a vertex outside `[0, vertex_count)`.
    ///
    /// Raised at construction only; a constructed graph is always
    /// internally consistent.
    #[error("edge {from} -> {to} is out of bounds for a graph of {vertex_count} vertices")]
    InvalidEdge {
        /// Source vertex of the offending edge.
        from: usize,
        /// Target vertex that is out of range.
        to: usize,
        /// Number of vertices in the graph under construction.
        vertex_count: usize,
    },

    /// An algorithm was invoked on a graph with zero vertices.
    #[error("graph has no vertices")]
    EmptyGraph,

    /// A query named a vertex outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of bounds for a graph of {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;
