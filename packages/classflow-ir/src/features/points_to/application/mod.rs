pub mod factory;

pub use factory::ConstraintFactory;
