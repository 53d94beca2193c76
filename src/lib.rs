//! # `quiver` - Directed-Graph Toolkit
//!
//! An in-memory library for directed, optionally weighted graphs:
//! full-coverage traversal (depth-first and breadth-first), strongly
//! connected component decomposition (Tarjan), and single-source shortest
//! paths (Dijkstra).
//!
//! ## Design
//!
//! The central type is [`DiGraph<W>`], an adjacency-list representation that
//! is **immutable after construction**. All validation happens up front:
//! every edge target is checked against the vertex range when the graph is
//! built, so the algorithms never re-validate topology. Each algorithm call
//! borrows the graph read-only and owns its transient state (visited sets,
//! stacks, queues, distance tables), which makes a `DiGraph` safe to share
//! across threads for concurrent queries without any locking.
//!
//! ## Error Handling
//!
//! Operations return [`Result`] with a dedicated [`GraphError`] taxonomy:
//!
//! - [`GraphError::InvalidEdge`]: an edge target out of `[0, vertex_count)`,
//!   raised at construction and never during algorithm execution.
//! - [`GraphError::EmptyGraph`]: any algorithm invoked on a zero-vertex
//!   graph. A tagged variant rather than a magic sentinel, so it can never
//!   collide with a legitimate result.
//! - [`GraphError::VertexOutOfRange`]: a shortest-path source outside the
//!   vertex range.
//!
//! ## Example
//!
//! ```rust
//! use quiver::DiGraph;
//!
//! // A 4-vertex weighted digraph.
//! let graph = DiGraph::from_weighted(vec![
//!     vec![(1, 1u64), (2, 2)],
//!     vec![(0, 1), (3, 1)],
//!     vec![(0, 2), (3, 1)],
//!     vec![(1, 1), (2, 1)],
//! ])?;
//!
//! assert_eq!(graph.tarjan_scc()?, 1);
//!
//! let dist = graph.dijkstra(0)?;
//! assert_eq!(dist[3], Some(2));
//! # Ok::<(), quiver::GraphError>(())
//! ```

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::DiGraph;
