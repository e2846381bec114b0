//! Converged flow maps handed back to the caller

use indexmap::IndexMap;
use serde::Serialize;
use std::hash::Hash;

/// Per-run sweep statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SolveStats {
    /// Full sweeps executed, including the final no-change sweep
    pub sweeps: usize,

    /// Nodes visited per sweep
    pub nodes: usize,

    pub time_ms: u64,
}

/// Stable in/out fact maps produced by one solver run.
///
/// Both maps preserve the graph's node enumeration order and are
/// exclusively owned by the caller after convergence; the solver never
/// mutates them again.
#[derive(Debug, Clone)]
pub struct FlowSolution<N, D> {
    pub in_flow: IndexMap<N, D>,
    pub out_flow: IndexMap<N, D>,
    pub stats: SolveStats,
}

impl<N: Eq + Hash, D> FlowSolution<N, D> {
    pub fn in_of(&self, node: &N) -> Option<&D> {
        self.in_flow.get(node)
    }

    pub fn out_of(&self, node: &N) -> Option<&D> {
        self.out_flow.get(node)
    }
}
