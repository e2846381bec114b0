pub mod parser;

pub use parser::{
    parse_class_pattern, parse_field_pattern, parse_method_pattern, parse_name_pattern,
    parse_type_pattern, PatternError,
};
