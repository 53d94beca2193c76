//! Full-coverage graph traversals.
//!
//! All three traversals sweep roots in index order so every component is
//! covered, and return the order in which vertices were first visited. The
//! output is always a permutation of `0..vertex_count`; the per-component
//! order differs between the variants:
//!
//! - [`DiGraph::dfs_recursive`] marks a vertex when it is first entered.
//! - [`DiGraph::dfs_iterative`] marks a vertex when it is popped, so a
//!   vertex may sit on the stack more than once; duplicate pops are cheap
//!   no-ops. This is the canonical production variant: its depth is bounded
//!   by the explicit stack, not the call stack.
//! - [`DiGraph::bfs`] marks a vertex when it is dequeued.

use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::digraph::DiGraph;
use crate::graph::visited::VisitedSet;

impl<W> DiGraph<W> {
    /// Depth-first traversal using the call stack.
    ///
    /// Recursion depth is bounded by `vertex_count`; for graphs with long
    /// simple paths prefer [`DiGraph::dfs_iterative`], which explores the
    /// same reachability partition on an explicit stack.
    pub fn dfs_recursive(&self) -> Result<Vec<usize>> {
        let n = self.require_nonempty()?;
        let mut visited = VisitedSet::new(n);
        let mut order = Vec::with_capacity(n);
        for root in 0..n {
            if !visited.contains(root) {
                self.dfs_visit(root, &mut visited, &mut order);
            }
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(vertices = n, "recursive DFS covered the graph");
        Ok(order)
    }

    fn dfs_visit(&self, vertex: usize, visited: &mut VisitedSet, order: &mut Vec<usize>) {
        visited.insert(vertex);
        order.push(vertex);
        for &(next, _) in self.out_edges(vertex) {
            if !visited.contains(next) {
                self.dfs_visit(next, visited, order);
            }
        }
    }

    /// Depth-first traversal on an explicit LIFO stack.
    ///
    /// A vertex may be pushed while an earlier entry for it is still
    /// pending, so pops are guarded by the visited check.
    pub fn dfs_iterative(&self) -> Result<Vec<usize>> {
        let n = self.require_nonempty()?;
        let mut visited = VisitedSet::new(n);
        let mut order = Vec::with_capacity(n);
        let mut stack = Vec::new();
        for root in 0..n {
            if visited.contains(root) {
                continue;
            }
            stack.push(root);
            while let Some(vertex) = stack.pop() {
                if !visited.insert(vertex) {
                    continue;
                }
                order.push(vertex);
                for &(next, _) in self.out_edges(vertex) {
                    if !visited.contains(next) {
                        stack.push(next);
                    }
                }
            }
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(vertices = n, "iterative DFS covered the graph");
        Ok(order)
    }

    /// Breadth-first traversal on a FIFO queue.
    ///
    /// Neighbors are enqueued in edge order; a vertex is marked visited
    /// when dequeued, so duplicate queue entries are skipped on dequeue.
    pub fn bfs(&self) -> Result<Vec<usize>> {
        let n = self.require_nonempty()?;
        let mut visited = VisitedSet::new(n);
        let mut order = Vec::with_capacity(n);
        let mut queue = VecDeque::new();
        for root in 0..n {
            if visited.contains(root) {
                continue;
            }
            queue.push_back(root);
            while let Some(vertex) = queue.pop_front() {
                if !visited.insert(vertex) {
                    continue;
                }
                order.push(vertex);
                for &(next, _) in self.out_edges(vertex) {
                    if !visited.contains(next) {
                        queue.push_back(next);
                    }
                }
            }
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(vertices = n, "BFS covered the graph");
        Ok(order)
    }
}
