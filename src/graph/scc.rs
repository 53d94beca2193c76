//! Strongly connected components (Tarjan).
//!
//! A single depth-first sweep computes, per vertex, its discovery time and
//! low-link (the smallest discovery time reachable through its DFS subtree
//! and back-edges into the active stack). A vertex whose low-link equals
//! its own discovery time roots a component; everything above it on the
//! stack belongs to that component and is popped with it.
//!
//! All counters and arrays live in a per-call state struct, never in the
//! graph or in globals, so concurrent decompositions of a shared graph
//! cannot interfere. On-stack membership is a bitset lookup, not a stack
//! scan; the decomposition runs in O(V + E).

use crate::error::Result;
use crate::graph::digraph::DiGraph;
use crate::graph::visited::VisitedSet;

struct TarjanState<'g, W> {
    graph: &'g DiGraph<W>,
    discovery: Vec<usize>,
    low_link: Vec<usize>,
    visited: VisitedSet,
    on_stack: VisitedSet,
    stack: Vec<usize>,
    time: usize,
    components: usize,
}

impl<'g, W> TarjanState<'g, W> {
    fn new(graph: &'g DiGraph<W>, n: usize) -> Self {
        Self {
            graph,
            discovery: vec![0; n],
            low_link: vec![0; n],
            visited: VisitedSet::new(n),
            on_stack: VisitedSet::new(n),
            stack: Vec::new(),
            time: 0,
            components: 0,
        }
    }

    fn strong_connect(&mut self, vertex: usize) {
        self.visited.insert(vertex);
        self.on_stack.insert(vertex);
        self.stack.push(vertex);
        self.discovery[vertex] = self.time;
        self.low_link[vertex] = self.time;
        self.time += 1;

        let graph = self.graph;
        for &(next, _) in graph.out_edges(vertex) {
            if !self.visited.contains(next) {
                self.strong_connect(next);
            }
            // Covers both tree edges and back/cross edges into the active
            // stack; a self-loop lands here with next == vertex, which is
            // a no-op min.
            if self.on_stack.contains(next) {
                self.low_link[vertex] = self.low_link[vertex].min(self.low_link[next]);
            }
        }

        if self.low_link[vertex] == self.discovery[vertex] {
            // `vertex` roots a component: pop it and everything above it,
            // tagging the members with the root's low-link.
            loop {
                let member = self.stack.pop().expect("component root is on the stack");
                self.on_stack.remove(member);
                self.low_link[member] = self.low_link[vertex];
                if member == vertex {
                    break;
                }
            }
            self.components += 1;
            #[cfg(feature = "tracing")]
            tracing::trace!(root = vertex, "closed strongly connected component");
        }
    }
}

impl<W> DiGraph<W> {
    /// Number of strongly connected components.
    ///
    /// Always in `1..=vertex_count` for a non-empty graph: an edgeless
    /// graph has one component per vertex, a single directed cycle has
    /// exactly one.
    ///
    /// The sweep recurses once per vertex, so call-stack depth is bounded
    /// by `vertex_count`.
    pub fn tarjan_scc(&self) -> Result<usize> {
        let n = self.require_nonempty()?;
        let mut state = TarjanState::new(self, n);
        for root in 0..n {
            if !state.visited.contains(root) {
                state.strong_connect(root);
            }
        }
        Ok(state.components)
    }
}
