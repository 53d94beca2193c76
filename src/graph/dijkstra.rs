//! Single-source shortest paths (Dijkstra).
//!
//! Lazy-deletion variant: relaxing an edge pushes a fresh `(distance,
//! vertex)` entry instead of re-keying the heap, and superseded entries are
//! skipped when popped because the live distance table is the source of
//! truth. Ties between equal-distance entries break arbitrarily; callers
//! must not rely on their order.
//!
//! Weights must be non-negative. With the unsigned weight types this crate
//! is normally instantiated with, negative weights are unrepresentable;
//! for signed instantiations the result under negative weights is
//! unspecified, as the algorithm's correctness argument does not hold
//! there.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use num_traits::Zero;

use crate::error::{GraphError, Result};
use crate::graph::digraph::DiGraph;

impl<W> DiGraph<W>
where
    W: Copy + Ord + Zero,
{
    /// Shortest distance from `source` to every vertex.
    ///
    /// `result[v]` is `Some(distance)` for reachable `v` (with
    /// `result[source] == Some(W::zero())`) and `None` for unreachable
    /// vertices — the tagged rendering of "+infinity".
    ///
    /// Path sums are computed with plain `+`, so every shortest distance
    /// must fit in `W`: a sum past `W::MAX` panics in debug builds and
    /// wraps in release builds.
    ///
    /// Fails with [`GraphError::EmptyGraph`] on a zero-vertex graph and
    /// [`GraphError::VertexOutOfRange`] if `source` is out of bounds.
    pub fn dijkstra(&self, source: usize) -> Result<Vec<Option<W>>> {
        let n = self.require_nonempty()?;
        if source >= n {
            return Err(GraphError::VertexOutOfRange {
                vertex: source,
                vertex_count: n,
            });
        }

        let mut dist: Vec<Option<W>> = vec![None; n];
        let mut heap = BinaryHeap::new();
        dist[source] = Some(W::zero());
        heap.push(Reverse((W::zero(), source)));

        while let Some(Reverse((via, vertex))) = heap.pop() {
            // Stale entry: a shorter path to `vertex` was settled after
            // this entry was pushed.
            if let Some(best) = dist[vertex] {
                if via > best {
                    continue;
                }
            }

            for &(next, weight) in self.out_edges(vertex) {
                let candidate = via + weight;
                if dist[next].map_or(true, |current| candidate < current) {
                    dist[next] = Some(candidate);
                    heap.push(Reverse((candidate, next)));
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            source,
            reached = dist.iter().filter(|d| d.is_some()).count(),
            "shortest-path sweep settled"
        );
        Ok(dist)
    }
}
