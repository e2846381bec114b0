/*
 * Iterative Fixed-Point Solver
 *
 * Chaotic round-robin iteration: every sweep visits all nodes in the
 * graph's enumeration order, recomputing non-head in-flows as the meet
 * over predecessor out-flows and re-running the transfer function, until
 * one full sweep reports no change.
 *
 * A priority worklist would converge in fewer node visits; round-robin
 * reaches the same fixed point and keeps the engine free of per-problem
 * scheduling state.
 */

use indexmap::IndexMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;
use tracing::debug;

use super::super::domain::analysis::DataflowAnalysis;
use super::super::domain::solution::{FlowSolution, SolveStats};
use super::super::ports::FlowGraph;
use super::errors::{SolverError, SolverResult};

/// Generic engine computing stable in/out fact maps for a monotone
/// problem.
///
/// Single-threaded and synchronous: one solve call performs a sequence of
/// full sweeps with no suspension points, invoking `transfer` serially.
/// A run must not be shared or interleaved across threads.
#[derive(Debug, Clone, Default)]
pub struct IterativeSolver {
    /// Optional diagnostic ceiling on sweep count. `None` trusts the
    /// problem's finite-height/monotonicity contract.
    max_sweeps: Option<usize>,
}

impl IterativeSolver {
    pub fn new() -> Self {
        Self { max_sweeps: None }
    }

    /// Abort with [`SolverError::SweepLimitExceeded`] instead of spinning
    /// on a problem that violates the convergence contract
    pub fn with_sweep_limit(limit: usize) -> Self {
        Self {
            max_sweeps: Some(limit),
        }
    }

    /// Run sweeps to the fixed point.
    ///
    /// `head_in` supplies the entry value of every head node; those
    /// entries are never recomputed during the run. Non-head in-flows are
    /// meet reductions over predecessor out-flows, seeded with
    /// `new_initial_value()` and recomputed once per node per sweep.
    /// Every node starts with `new_initial_value()` as its out-flow.
    pub fn solve<D, N, P, G>(
        &self,
        problem: &P,
        graph: &G,
        head_in: IndexMap<N, D>,
    ) -> SolverResult<FlowSolution<N, D>>
    where
        N: Clone + Eq + Hash + Debug,
        P: DataflowAnalysis<D, N>,
        G: FlowGraph<N>,
    {
        self.run(problem, graph, head_in, IndexMap::new())
    }

    /// Continue from a previous solution's maps.
    ///
    /// On an already-converged solution this performs exactly one sweep,
    /// observes zero changes, and returns; the maps come back unchanged.
    pub fn resume<D, N, P, G>(
        &self,
        problem: &P,
        graph: &G,
        solution: FlowSolution<N, D>,
    ) -> SolverResult<FlowSolution<N, D>>
    where
        N: Clone + Eq + Hash + Debug,
        P: DataflowAnalysis<D, N>,
        G: FlowGraph<N>,
    {
        self.run(problem, graph, solution.in_flow, solution.out_flow)
    }

    fn run<D, N, P, G>(
        &self,
        problem: &P,
        graph: &G,
        mut in_flow: IndexMap<N, D>,
        mut out_flow: IndexMap<N, D>,
    ) -> SolverResult<FlowSolution<N, D>>
    where
        N: Clone + Eq + Hash + Debug,
        P: DataflowAnalysis<D, N>,
        G: FlowGraph<N>,
    {
        let start = Instant::now();
        let nodes = graph.nodes();

        for node in &nodes {
            if graph.is_head(node) && !in_flow.contains_key(node) {
                return Err(SolverError::UnseededHead {
                    node: format!("{node:?}"),
                });
            }
            if !out_flow.contains_key(node) {
                out_flow.insert(node.clone(), problem.new_initial_value());
            }
        }

        let mut sweeps = 0;
        loop {
            let mut changed = false;
            for node in &nodes {
                if !graph.is_head(node) {
                    // Meet over predecessor out-flows; the result is the
                    // node's in-flow for the rest of this sweep
                    let mut acc = problem.new_initial_value();
                    for pred in graph.predecessors(node) {
                        let out = out_flow.get(&pred).ok_or_else(|| SolverError::ForeignNode {
                            node: format!("{pred:?}"),
                        })?;
                        acc = problem.meet(acc, out);
                    }
                    in_flow.insert(node.clone(), acc);
                }
                let input = in_flow.get(node).ok_or_else(|| SolverError::UnseededHead {
                    node: format!("{node:?}"),
                })?;
                let output = out_flow.get_mut(node).ok_or_else(|| SolverError::ForeignNode {
                    node: format!("{node:?}"),
                })?;
                changed |= problem.transfer(input, node, output);
            }
            sweeps += 1;
            if !changed {
                break;
            }
            if let Some(limit) = self.max_sweeps {
                if sweeps >= limit {
                    return Err(SolverError::SweepLimitExceeded { limit });
                }
            }
        }

        debug!("fixed point after {} sweeps over {} nodes", sweeps, nodes.len());
        Ok(FlowSolution {
            in_flow,
            out_flow,
            stats: SolveStats {
                sweeps,
                nodes: nodes.len(),
                time_ms: start.elapsed().as_millis() as u64,
            },
        })
    }
}
