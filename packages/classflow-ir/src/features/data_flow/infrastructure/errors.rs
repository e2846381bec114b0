//! Solver error types
//!
//! Every failure is a configuration error surfaced before or during the
//! sweeps; the solver performs no retries and no partial recovery.

use thiserror::Error;

/// Solver configuration errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SolverError {
    /// A head node had no externally supplied in-flow value
    #[error("head node {node} has no supplied in-flow value")]
    UnseededHead { node: String },

    /// The graph produced a node outside its own enumeration
    #[error("node {node} is not part of the graph enumeration")]
    ForeignNode { node: String },

    /// Diagnostic sweep ceiling hit; the supplied problem likely violates
    /// the finite-height/monotonicity contract
    #[error("no fixed point after {limit} sweeps")]
    SweepLimitExceeded { limit: usize },
}

/// Result type for solver operations
pub type SolverResult<T> = Result<T, SolverError>;
