//! # Iterative Data-Flow Solver
//!
//! Generic engine computing the fixed point of a monotone data-flow
//! problem over a caller-owned directed flow graph. The lattice value
//! type, meet operator and transfer function come from the supplied
//! [`DataflowAnalysis`]; the graph shape comes through the [`FlowGraph`]
//! port.
//!
//! One solve call runs synchronous full-graph sweeps on the calling
//! thread until a sweep reports no change. Termination is the problem
//! supplier's contract: a finite-height lattice with monotone meet and
//! transfer. The solver performs no independent bound check of its own
//! (an optional diagnostic sweep ceiling is available for tooling).

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports for public API
pub use domain::analysis::DataflowAnalysis;
pub use domain::solution::{FlowSolution, SolveStats};
pub use infrastructure::adjacency_graph::AdjacencyGraph;
pub use infrastructure::errors::SolverError;
pub use infrastructure::iterative_solver::IterativeSolver;
pub use ports::FlowGraph;
