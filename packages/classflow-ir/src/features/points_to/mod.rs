//! # Pointer-Analysis Constraint Elements
//!
//! Immutable value records forming the atomic units of the pointer-analysis
//! constraint graph:
//! - `InstanceLoad`  : to = base.field,  i.e. to ⊇ pts(base).field
//! - `InstanceStore` : base.field = from, i.e. pts(base).field ⊇ from
//!
//! IR translation (external) produces elements through
//! [`ConstraintFactory`], which enforces the construction invariants; the
//! external propagation engine consumes them grouped by base variable
//! through [`ConstraintIndex`]. Whenever pts(base) grows, every element
//! sharing that base must be re-evaluated; `notify_growth` enumerates
//! exactly that set. The propagation/worklist algorithm itself lives with
//! the engine, not here.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports for public API
pub use application::factory::ConstraintFactory;
pub use domain::element::{ElementError, Field, InstanceLoad, InstanceStore, VarId, Variable};
pub use infrastructure::constraint_index::ConstraintIndex;
pub use infrastructure::type_model::ExactTypeModel;
pub use ports::{ConstraintConsumer, TypeModel};
