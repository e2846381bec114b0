//! Default type model

use super::super::domain::element::Field;
use super::super::ports::TypeModel;

/// Resolves a field only against its exact declaring type.
///
/// Hierarchy-aware resolution belongs to the external class-model
/// collaborator; this strict model is the construction-time default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactTypeModel;

impl TypeModel for ExactTypeModel {
    fn field_resolves(&self, ty: &str, field: &Field) -> bool {
        field.declaring_class() == ty
    }
}
