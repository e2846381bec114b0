//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/         - Pure business logic (no external dependencies)
//! - ports/          - Interface definitions (traits)
//! - application/    - Use cases
//! - infrastructure/ - External dependency implementations

// Generic monotone data-flow solver over caller-supplied flow graphs
pub mod data_flow;

// Pointer-analysis constraint elements and their grouping contract
pub mod points_to;

// Wildcard scope filters gating which program entities are analyzed
pub mod scope_patterns;
