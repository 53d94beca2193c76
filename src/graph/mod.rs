//! Graph representation and algorithms.
//!
//! The graph type lives in `digraph`; the algorithm modules extend it with
//! `impl` blocks so each algorithm keeps its transient state local:
//! - `traversal`: full-coverage DFS (recursive and explicit-stack) and BFS
//! - `scc`: Tarjan strongly connected component decomposition
//! - `dijkstra`: single-source shortest paths
//!
//! `visited` holds the crate-internal dense visited set shared by all of
//! them.

pub mod digraph;
pub(crate) mod visited;

mod dijkstra;
mod scc;
mod traversal;

pub use digraph::DiGraph;
