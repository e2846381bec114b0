//! Constraint element construction with invariant checking
//!
//! Elements never exist half-built: a cross-method variable pair or a
//! field that does not resolve against the base's declared type fails at
//! construction time and is never coerced or defaulted.

use super::super::domain::element::{
    ElementError, Field, InstanceLoad, InstanceStore, Variable,
};
use super::super::infrastructure::type_model::ExactTypeModel;
use super::super::ports::TypeModel;

/// Validating constructor for constraint elements
#[derive(Debug, Clone, Default)]
pub struct ConstraintFactory<M = ExactTypeModel> {
    types: M,
}

impl ConstraintFactory<ExactTypeModel> {
    /// Factory with the strict exact-declaring-type model
    pub fn new() -> Self {
        Self {
            types: ExactTypeModel,
        }
    }
}

impl<M: TypeModel> ConstraintFactory<M> {
    /// Factory with a caller-supplied type model (e.g. hierarchy-aware
    /// resolution backed by the loaded class model)
    pub fn with_types(types: M) -> Self {
        Self { types }
    }

    /// Build `to = base.field`
    pub fn load(
        &self,
        to: Variable,
        base: Variable,
        field: Field,
    ) -> Result<InstanceLoad, ElementError> {
        check_scope(&to, &base)?;
        self.check_field(&base, &field)?;
        Ok(InstanceLoad::new_unchecked(to, base, field))
    }

    /// Build `base.field = from`
    pub fn store(
        &self,
        base: Variable,
        field: Field,
        from: Variable,
    ) -> Result<InstanceStore, ElementError> {
        check_scope(&base, &from)?;
        self.check_field(&base, &field)?;
        Ok(InstanceStore::new_unchecked(base, field, from))
    }

    fn check_field(&self, base: &Variable, field: &Field) -> Result<(), ElementError> {
        if self.types.field_resolves(base.ty(), field) {
            Ok(())
        } else {
            Err(ElementError::UnresolvedField {
                declaring_class: field.declaring_class().to_string(),
                field: field.name().to_string(),
                base_type: base.ty().to_string(),
            })
        }
    }
}

fn check_scope(first: &Variable, second: &Variable) -> Result<(), ElementError> {
    if first.same_method(second) {
        Ok(())
    } else {
        Err(ElementError::CrossMethod {
            first: first.name().to_string(),
            second: second.name().to_string(),
            first_method: first.method().to_string(),
            second_method: second.method().to_string(),
        })
    }
}
