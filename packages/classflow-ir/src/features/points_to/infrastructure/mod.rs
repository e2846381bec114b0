pub mod constraint_index;
pub mod type_model;

pub use constraint_index::ConstraintIndex;
pub use type_model::ExactTypeModel;
