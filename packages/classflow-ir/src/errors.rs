//! Error types for classflow-ir
//!
//! Provides unified error handling across the crate. Every failure is
//! local and fail-fast; no component retries or recovers partially.

use thiserror::Error;

use crate::features::data_flow::infrastructure::errors::SolverError;
use crate::features::points_to::domain::element::ElementError;
use crate::features::scope_patterns::infrastructure::parser::PatternError;

/// Main error type for classflow-ir operations
#[derive(Debug, Error)]
pub enum ClassflowError {
    /// Malformed scope-filter pattern string
    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// Illegal constraint element construction
    #[error("Constraint error: {0}")]
    Constraint(#[from] ElementError),

    /// Solver configuration error
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    /// Analysis setup error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClassflowError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        ClassflowError::Config(msg.into())
    }
}

/// Result type alias for classflow operations
pub type Result<T> = std::result::Result<T, ClassflowError>;
