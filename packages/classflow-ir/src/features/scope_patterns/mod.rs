//! # Scope Pattern Language
//!
//! Textual wildcard filters selecting which classes, methods and fields
//! participate in whole-program analysis:
//! - `*`  matches within one dot-delimited name segment
//! - `**` matches across segments, dots included
//! - a trailing `^` on a class/type pattern includes subclasses/subtypes
//! - `~` in a parameter list matches exactly one parameter of any type
//!
//! Syntax:
//! - class  : `com.example.*`
//! - method : `<com.example.*: int foo(java.lang.String,~)>`
//! - field  : `<com**X: java.util.Collection^ field1>`
//!
//! Patterns are immutable after parsing and compare structurally, so two
//! parses of the same source string are interchangeable as set members.
//! Immutability also makes them safe for unsynchronized concurrent
//! matching from multiple threads.

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for public API
pub use application::scope_filter::ScopeFilter;
pub use domain::name_pattern::{NamePattern, NameUnit};
pub use domain::pattern::{ClassPattern, FieldPattern, MethodPattern, ParamPattern, TypePattern};
pub use infrastructure::parser::{
    parse_class_pattern, parse_field_pattern, parse_method_pattern, parse_name_pattern,
    parse_type_pattern, PatternError,
};
