//! Adjacency-list flow graph
//!
//! Minimal caller-side implementation of the [`FlowGraph`] port, used by
//! tests and demos. Nodes enumerate in insertion order; predecessor lists
//! preserve edge insertion order.

use indexmap::IndexSet;
use rustc_hash::{FxHashMap, FxHashSet};
use std::hash::Hash;

use super::super::ports::FlowGraph;

#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N> {
    nodes: IndexSet<N>,
    preds: FxHashMap<N, Vec<N>>,
    heads: FxHashSet<N>,
}

impl<N: Clone + Eq + Hash> AdjacencyGraph<N> {
    pub fn new() -> Self {
        Self {
            nodes: IndexSet::new(),
            preds: FxHashMap::default(),
            heads: FxHashSet::default(),
        }
    }

    pub fn add_node(&mut self, node: N) {
        self.nodes.insert(node);
    }

    /// Insert a directed edge, registering both endpoints
    pub fn add_edge(&mut self, from: N, to: N) {
        self.nodes.insert(from.clone());
        self.nodes.insert(to.clone());
        self.preds.entry(to).or_default().push(from);
    }

    /// Mark `node` as a head; its in-flow comes from the caller
    pub fn mark_head(&mut self, node: N) {
        self.nodes.insert(node.clone());
        self.heads.insert(node);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<N: Clone + Eq + Hash> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash> FlowGraph<N> for AdjacencyGraph<N> {
    fn nodes(&self) -> Vec<N> {
        self.nodes.iter().cloned().collect()
    }

    fn is_head(&self, node: &N) -> bool {
        self.heads.contains(node)
    }

    fn predecessors(&self, node: &N) -> Vec<N> {
        self.preds.get(node).cloned().unwrap_or_default()
    }
}
