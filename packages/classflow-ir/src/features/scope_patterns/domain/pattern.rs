//! Class, type, method and field patterns
//!
//! Composite patterns built from [`NamePattern`]s. Every level compares
//! structurally, so independently parsed patterns deduplicate in sets and
//! work as grouping keys.
//!
//! Subclass/subtype expansion is not performed here: the `^` flags are
//! carried as data for the external class-model collaborator. Textual
//! matching below is strictly against the names a pattern mentions.

use super::name_pattern::NamePattern;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix marking a class/type pattern as subclass/subtype-inclusive
pub const SUBTYPE_SUFFIX: char = '^';

/// Parameter-position wildcard (`~`), matching exactly one parameter
pub const PARAM_WILDCARD_MARK: &str = "~";

/// Pattern over fully qualified class names
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassPattern {
    pub name: NamePattern,

    /// Set by a trailing `^` on the pattern string
    pub include_subclasses: bool,
}

impl ClassPattern {
    pub fn new(name: NamePattern, include_subclasses: bool) -> Self {
        Self {
            name,
            include_subclasses,
        }
    }

    /// Textual match against a fully qualified class name
    pub fn matches(&self, class_name: &str) -> bool {
        self.name.matches(class_name)
    }
}

impl fmt::Display for ClassPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.include_subclasses {
            write!(f, "{}", SUBTYPE_SUFFIX)?;
        }
        Ok(())
    }
}

/// Pattern over type names (return types, field types, parameter types)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypePattern {
    pub name: NamePattern,

    /// Set by a trailing `^` on the pattern string
    pub include_subtypes: bool,
}

impl TypePattern {
    pub fn new(name: NamePattern, include_subtypes: bool) -> Self {
        Self {
            name,
            include_subtypes,
        }
    }

    pub fn matches(&self, type_name: &str) -> bool {
        self.name.matches(type_name)
    }
}

impl fmt::Display for TypePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.include_subtypes {
            write!(f, "{}", SUBTYPE_SUFFIX)?;
        }
        Ok(())
    }
}

/// One position of a method parameter list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamPattern {
    Type(TypePattern),

    /// `~` - exactly one parameter of any type
    Wildcard,
}

impl ParamPattern {
    pub fn matches(&self, param_type: &str) -> bool {
        match self {
            ParamPattern::Type(ty) => ty.matches(param_type),
            ParamPattern::Wildcard => true,
        }
    }
}

impl fmt::Display for ParamPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamPattern::Type(ty) => write!(f, "{}", ty),
            ParamPattern::Wildcard => f.write_str(PARAM_WILDCARD_MARK),
        }
    }
}

/// Method signature pattern: `<Class: Ret Name(P1,P2,...)>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodPattern {
    pub class: ClassPattern,
    pub return_type: TypePattern,
    pub name: NamePattern,

    /// Ordered parameter positions; count and order mirror the source
    /// string exactly, `~` tokens included
    pub params: Vec<ParamPattern>,
}

impl MethodPattern {
    pub fn new(
        class: ClassPattern,
        return_type: TypePattern,
        name: NamePattern,
        params: Vec<ParamPattern>,
    ) -> Self {
        Self {
            class,
            return_type,
            name,
            params,
        }
    }

    /// Match a concrete signature component-wise.
    ///
    /// `~` consumes exactly one parameter, so arity must agree exactly.
    pub fn matches_signature(
        &self,
        class_name: &str,
        return_type: &str,
        method_name: &str,
        param_types: &[&str],
    ) -> bool {
        self.class.matches(class_name)
            && self.return_type.matches(return_type)
            && self.name.matches(method_name)
            && self.params.len() == param_types.len()
            && self
                .params
                .iter()
                .zip(param_types)
                .all(|(pattern, ty)| pattern.matches(ty))
    }
}

impl fmt::Display for MethodPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {} {}(", self.class, self.return_type, self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", param)?;
        }
        f.write_str(")>")
    }
}

/// Field signature pattern: `<Class: Type Name>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPattern {
    pub class: ClassPattern,
    pub ty: TypePattern,
    pub name: NamePattern,
}

impl FieldPattern {
    pub fn new(class: ClassPattern, ty: TypePattern, name: NamePattern) -> Self {
        Self { class, ty, name }
    }

    pub fn matches_signature(&self, class_name: &str, field_type: &str, field_name: &str) -> bool {
        self.class.matches(class_name)
            && self.ty.matches(field_type)
            && self.name.matches(field_name)
    }
}

impl fmt::Display for FieldPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {} {}>", self.class, self.ty, self.name)
    }
}
