//! An immutable adjacency-list directed graph.
//!
//! Variables:
//!   n              = number of vertices, fixed at construction
//!   adjacency[u]   = Vec<(target, weight)> of out-edges of vertex u
//!
//! Per-vertex edge order is insertion order and is observable in traversal
//! and SCC enumeration; shortest-path results do not depend on it.
//!
//! All topology validation happens in the constructors: every target index
//! is checked against `[0, n)` and construction fails fast on the first
//! violation. A constructed graph is therefore always internally consistent
//! and no algorithm re-checks bounds on the hot path.
//!
//! The graph exposes no mutation API. Since queries take `&self` and own
//! all of their transient state, a `DiGraph` can be shared across threads
//! (`&DiGraph<W>` is `Send + Sync` for `W: Sync`) and queried concurrently
//! without synchronization.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// A directed, weighted graph over vertices `0..vertex_count`.
///
/// Self-loops and parallel edges are representable; parallel edges are
/// stored as separate `(target, weight)` tuples.
///
/// Deserialization goes through the same validation as
/// [`DiGraph::from_weighted`], so an out-of-range edge in serialized input
/// is rejected rather than producing a corrupt graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Vec<(usize, W)>>",
    into = "Vec<Vec<(usize, W)>>",
    bound(
        serialize = "W: Serialize + Clone",
        deserialize = "W: Deserialize<'de>"
    )
)]
pub struct DiGraph<W = u64> {
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> DiGraph<W> {
    /// Builds a graph from explicit `(target, weight)` pairs.
    ///
    /// Fails with [`GraphError::InvalidEdge`] if any target index lies
    /// outside `[0, vertex_count)`, where `vertex_count` is the length of
    /// the outer list.
    pub fn from_weighted(adjacency: Vec<Vec<(usize, W)>>) -> Result<Self> {
        let vertex_count = adjacency.len();
        for (from, edges) in adjacency.iter().enumerate() {
            for &(to, _) in edges.iter() {
                if to >= vertex_count {
                    return Err(GraphError::InvalidEdge {
                        from,
                        to,
                        vertex_count,
                    });
                }
            }
        }
        Ok(Self { adjacency })
    }

    /// Builds a graph from bare neighbor lists, assigning every edge the
    /// unit weight `W::one()`.
    ///
    /// Fails with [`GraphError::InvalidEdge`] on any out-of-range neighbor.
    pub fn from_unweighted(adjacency: Vec<Vec<usize>>) -> Result<Self>
    where
        W: num_traits::One,
    {
        let vertex_count = adjacency.len();
        let mut weighted = Vec::with_capacity(vertex_count);
        for (from, neighbors) in adjacency.into_iter().enumerate() {
            let mut edges = Vec::with_capacity(neighbors.len());
            for to in neighbors {
                if to >= vertex_count {
                    return Err(GraphError::InvalidEdge {
                        from,
                        to,
                        vertex_count,
                    });
                }
                edges.push((to, W::one()));
            }
            weighted.push(edges);
        }
        Ok(Self {
            adjacency: weighted,
        })
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    /// `true` iff the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Out-edges of `vertex` as `(target, weight)` pairs, in insertion
    /// order.
    ///
    /// Fails with [`GraphError::VertexOutOfRange`] if
    /// `vertex >= vertex_count()`, like every other query on the graph.
    #[inline]
    pub fn neighbors(&self, vertex: usize) -> Result<&[(usize, W)]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
    }

    /// Unchecked out-edge access for the algorithms, which only produce
    /// indices by iterating `0..vertex_count()`.
    #[inline]
    pub(crate) fn out_edges(&self, vertex: usize) -> &[(usize, W)] {
        &self.adjacency[vertex]
    }

    /// Guard shared by every algorithm entry point: a zero-vertex graph
    /// has no meaningful result of any kind.
    #[inline]
    pub(crate) fn require_nonempty(&self) -> Result<usize> {
        match self.vertex_count() {
            0 => Err(GraphError::EmptyGraph),
            n => Ok(n),
        }
    }
}

impl<W> TryFrom<Vec<Vec<(usize, W)>>> for DiGraph<W> {
    type Error = GraphError;

    fn try_from(adjacency: Vec<Vec<(usize, W)>>) -> Result<Self> {
        Self::from_weighted(adjacency)
    }
}

impl<W> From<DiGraph<W>> for Vec<Vec<(usize, W)>> {
    fn from(graph: DiGraph<W>) -> Self {
        graph.adjacency
    }
}
