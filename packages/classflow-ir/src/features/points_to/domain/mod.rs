pub mod element;

pub use element::{ElementError, Field, InstanceLoad, InstanceStore, VarId, Variable};
