/*
 * Classflow IR - Whole-Program Analysis Core
 *
 * Feature-First Hexagonal Architecture:
 * - features/scope_patterns : wildcard scope filters (parse + match)
 * - features/points_to      : pointer-analysis constraint elements
 * - features/data_flow      : generic iterative fixed-point solver
 *
 * External collaborators (bytecode loading, CFG construction, the
 * propagation engine, drivers) plug in through the ports of each feature
 * and are never owned by this crate.
 */

#![allow(clippy::module_inception)]
#![allow(clippy::new_without_default)]
#![allow(clippy::should_implement_trait)] // from_str naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Feature modules
pub mod features;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{ClassflowError, Result};

pub use features::scope_patterns::{
    parse_class_pattern, parse_field_pattern, parse_method_pattern, parse_name_pattern,
    parse_type_pattern, ClassPattern, FieldPattern, MethodPattern, NamePattern, NameUnit,
    ParamPattern, PatternError, ScopeFilter, TypePattern,
};

pub use features::points_to::{
    ConstraintConsumer, ConstraintFactory, ConstraintIndex, ElementError, ExactTypeModel, Field,
    InstanceLoad, InstanceStore, TypeModel, VarId, Variable,
};

pub use features::data_flow::{
    AdjacencyGraph, DataflowAnalysis, FlowGraph, FlowSolution, IterativeSolver, SolveStats,
    SolverError,
};
