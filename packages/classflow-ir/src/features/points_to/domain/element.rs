//! Constraint element value types
//!
//! Pure value objects with no behavior beyond field access and structural
//! equality/hash. Elements are fully constructed before being shared and
//! carry no mutable state, so published elements are safe for
//! unsynchronized concurrent reads.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Variable identifier, unique within its owning method
pub type VarId = u32;

/// Violations of the element construction invariants
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ElementError {
    /// Variables of one element must belong to the same method
    #[error("variables `{first}` and `{second}` belong to different methods (`{first_method}` vs `{second_method}`)")]
    CrossMethod {
        first: String,
        second: String,
        first_method: String,
        second_method: String,
    },

    /// The field must resolve against the base variable's declared type
    #[error("field `{declaring_class}.{field}` does not resolve against type `{base_type}`")]
    UnresolvedField {
        declaring_class: String,
        field: String,
        base_type: String,
    },
}

/// Identity-bearing handle to a points-to-set owner (local or parameter),
/// scoped to one method
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    id: VarId,
    name: String,

    /// Fully qualified signature of the owning method
    method: String,

    /// Declared (static) type of the variable
    ty: String,
}

impl Variable {
    pub fn new(
        id: VarId,
        name: impl Into<String>,
        method: impl Into<String>,
        ty: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            method: method.into(),
            ty: ty.into(),
        }
    }

    pub fn id(&self) -> VarId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn same_method(&self, other: &Variable) -> bool {
        self.method == other.method
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.method, self.name)
    }
}

/// Class-member descriptor: declaring type, name, declared type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    declaring_class: String,
    name: String,
    ty: String,
}

impl Field {
    pub fn new(
        declaring_class: impl Into<String>,
        name: impl Into<String>,
        ty: impl Into<String>,
    ) -> Self {
        Self {
            declaring_class: declaring_class.into(),
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn declaring_class(&self) -> &str {
        &self.declaring_class
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {} {}>", self.declaring_class, self.ty, self.name)
    }
}

/// Instance field load: `to = base.field`, i.e. to ⊇ pts(base).field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceLoad {
    to: Variable,
    base: Variable,
    field: Field,
}

impl InstanceLoad {
    /// Callers construct through the factory, which checks the
    /// method-scoping and field-resolution invariants first.
    pub(crate) fn new_unchecked(to: Variable, base: Variable, field: Field) -> Self {
        Self { to, base, field }
    }

    pub fn to(&self) -> &Variable {
        &self.to
    }

    pub fn base(&self) -> &Variable {
        &self.base
    }

    pub fn field(&self) -> &Field {
        &self.field
    }
}

impl fmt::Display for InstanceLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}.{}", self.to, self.base, self.field.name())
    }
}

/// Instance field store: `base.field = from`, i.e. pts(base).field ⊇ from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceStore {
    base: Variable,
    field: Field,
    from: Variable,
}

impl InstanceStore {
    pub(crate) fn new_unchecked(base: Variable, field: Field, from: Variable) -> Self {
        Self { base, field, from }
    }

    pub fn base(&self) -> &Variable {
        &self.base
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn from(&self) -> &Variable {
        &self.from
    }
}

impl fmt::Display for InstanceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} = {}", self.base, self.field.name(), self.from)
    }
}
