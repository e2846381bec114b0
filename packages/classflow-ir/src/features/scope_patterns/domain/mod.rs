pub mod name_pattern;
pub mod pattern;

pub use name_pattern::{NamePattern, NameUnit};
pub use pattern::{ClassPattern, FieldPattern, MethodPattern, ParamPattern, TypePattern};
