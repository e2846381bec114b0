//! Ports (Interfaces) for the constraint layer
//!
//! Two external collaborators plug in here:
//! - the type model, answering field-resolution questions at element
//!   construction time
//! - the propagation engine, re-evaluating grouped elements whenever a
//!   base variable's points-to set grows

use super::domain::element::{Field, InstanceLoad, InstanceStore};

/// Field-resolution oracle consulted at element construction time
pub trait TypeModel {
    /// Whether `field` is a member reachable from declared type `ty`,
    /// directly or through the type hierarchy
    fn field_resolves(&self, ty: &str, field: &Field) -> bool;
}

/// Receiver side of the notify-on-growth contract.
///
/// When the engine grows pts(base), it must re-evaluate every element
/// whose base is that variable; `ConstraintIndex::notify_growth` drives
/// one callback per affected element.
pub trait ConstraintConsumer {
    fn reevaluate_load(&mut self, load: &InstanceLoad);

    fn reevaluate_store(&mut self, store: &InstanceStore);
}
