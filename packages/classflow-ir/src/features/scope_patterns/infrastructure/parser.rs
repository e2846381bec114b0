/*
 * Scope Pattern Parser
 *
 * Textual wire format consumed from configuration, one pattern per entry:
 * - class  : `com.example.*`                       (optional trailing `^`)
 * - method : `<Class: Ret Name(P1,P2,...)>`
 * - field  : `<Class: Type Name>`
 *
 * Parsing is fail-fast: a malformed entry reports the offending substring
 * and produces no partial pattern. Downstream components therefore only
 * ever see a fully valid, immutable filter set.
 */

use std::str::FromStr;
use thiserror::Error;

use super::super::domain::name_pattern::{NamePattern, NameUnit};
use super::super::domain::pattern::{
    ClassPattern, FieldPattern, MethodPattern, ParamPattern, TypePattern, PARAM_WILDCARD_MARK,
    SUBTYPE_SUFFIX,
};

/// Characters that never appear inside a name literal; they belong to the
/// surrounding signature grammar.
const RESERVED: &[char] = &['<', '>', '(', ')', ':', ',', '^', '~', ' '];

/// Scope pattern syntax errors; the payload is the offending substring
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("empty pattern component in `{0}`")]
    EmptyComponent(String),

    #[error("reserved character `{found}` in name position `{at}`")]
    ReservedCharacter { found: char, at: String },

    #[error("unbalanced `<`/`>` in `{0}`")]
    UnbalancedSignature(String),

    #[error("missing `: ` separator in `{0}`")]
    MissingSeparator(String),

    #[error("malformed member declaration `{0}`")]
    MalformedMember(String),

    #[error("unbalanced parentheses in `{0}`")]
    UnbalancedParens(String),
}

/// Tokenize a bare name pattern into alternating literal runs and
/// wildcard markers.
///
/// Maximal literal runs become single units; `**` is consumed before `*`,
/// and adjacent wildcards of different kinds stay separate units. A
/// pattern with N markers and literal runs parses to exactly N ordered
/// units, so joining the units' texts reproduces the source string.
pub fn parse_name_pattern(source: &str) -> Result<NamePattern, PatternError> {
    if source.is_empty() {
        return Err(PatternError::EmptyComponent(source.to_string()));
    }
    if let Some(found) = source.chars().find(|c| RESERVED.contains(c)) {
        return Err(PatternError::ReservedCharacter {
            found,
            at: source.to_string(),
        });
    }

    let mut units = Vec::new();
    let mut literal = String::new();
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '*' {
            if !literal.is_empty() {
                units.push(NameUnit::Literal(std::mem::take(&mut literal)));
            }
            if chars.peek() == Some(&'*') {
                chars.next();
                units.push(NameUnit::FullWildcard);
            } else {
                units.push(NameUnit::NameWildcard);
            }
        } else {
            literal.push(c);
        }
    }
    if !literal.is_empty() {
        units.push(NameUnit::Literal(literal));
    }
    Ok(NamePattern::new(units))
}

/// Parse a class pattern, honoring the trailing `^` subclass marker
pub fn parse_class_pattern(source: &str) -> Result<ClassPattern, PatternError> {
    let (name, include_subclasses) = strip_subtype_suffix(source);
    Ok(ClassPattern::new(
        parse_name_pattern(name)?,
        include_subclasses,
    ))
}

/// Parse a type pattern, honoring the trailing `^` subtype marker
pub fn parse_type_pattern(source: &str) -> Result<TypePattern, PatternError> {
    let (name, include_subtypes) = strip_subtype_suffix(source);
    Ok(TypePattern::new(parse_name_pattern(name)?, include_subtypes))
}

fn strip_subtype_suffix(source: &str) -> (&str, bool) {
    match source.strip_suffix(SUBTYPE_SUFFIX) {
        Some(stripped) => (stripped, true),
        None => (source, false),
    }
}

/// Parse `<Class: Ret Name(P1,P2,...)>`.
///
/// Parameter lists split strictly on commas; count and order are
/// preserved exactly, `~` tokens included. `()` is the empty list.
pub fn parse_method_pattern(source: &str) -> Result<MethodPattern, PatternError> {
    let (class_part, member) = split_signature(source)?;
    let class = parse_class_pattern(class_part)?;

    let open = member
        .find('(')
        .ok_or_else(|| PatternError::UnbalancedParens(member.to_string()))?;
    let args = member[open + 1..]
        .strip_suffix(')')
        .ok_or_else(|| PatternError::UnbalancedParens(member.to_string()))?;

    let header = &member[..open];
    let (ret, name) = header
        .split_once(' ')
        .ok_or_else(|| PatternError::MalformedMember(member.to_string()))?;
    if ret.is_empty() || name.is_empty() || name.contains(' ') {
        return Err(PatternError::MalformedMember(member.to_string()));
    }

    Ok(MethodPattern::new(
        class,
        parse_type_pattern(ret)?,
        parse_name_pattern(name)?,
        parse_param_list(args)?,
    ))
}

/// Parse `<Class: Type Name>`
pub fn parse_field_pattern(source: &str) -> Result<FieldPattern, PatternError> {
    let (class_part, member) = split_signature(source)?;
    let class = parse_class_pattern(class_part)?;

    let (ty, name) = member
        .split_once(' ')
        .ok_or_else(|| PatternError::MalformedMember(member.to_string()))?;
    if ty.is_empty() || name.is_empty() || name.contains(' ') {
        return Err(PatternError::MalformedMember(member.to_string()));
    }

    Ok(FieldPattern::new(
        class,
        parse_type_pattern(ty)?,
        parse_name_pattern(name)?,
    ))
}

fn parse_param_list(args: &str) -> Result<Vec<ParamPattern>, PatternError> {
    if args.is_empty() {
        return Ok(Vec::new());
    }
    args.split(',')
        .map(|token| {
            if token == PARAM_WILDCARD_MARK {
                Ok(ParamPattern::Wildcard)
            } else if token.is_empty() {
                Err(PatternError::EmptyComponent(args.to_string()))
            } else {
                parse_type_pattern(token).map(ParamPattern::Type)
            }
        })
        .collect()
}

fn split_signature(source: &str) -> Result<(&str, &str), PatternError> {
    let inner = source
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| PatternError::UnbalancedSignature(source.to_string()))?;
    let (class_part, member) = inner
        .split_once(':')
        .ok_or_else(|| PatternError::MissingSeparator(source.to_string()))?;
    let member = member
        .strip_prefix(' ')
        .ok_or_else(|| PatternError::MissingSeparator(source.to_string()))?;
    if class_part.is_empty() || member.is_empty() {
        return Err(PatternError::EmptyComponent(source.to_string()));
    }
    Ok((class_part, member))
}

impl FromStr for NamePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_name_pattern(s)
    }
}

impl FromStr for ClassPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_class_pattern(s)
    }
}

impl FromStr for TypePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type_pattern(s)
    }
}

impl FromStr for MethodPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_method_pattern(s)
    }
}

impl FromStr for FieldPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field_pattern(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn np(units: &[&str]) -> NamePattern {
        NamePattern::new(
            units
                .iter()
                .map(|u| match *u {
                    "**" => NameUnit::FullWildcard,
                    "*" => NameUnit::NameWildcard,
                    text => NameUnit::literal(text),
                })
                .collect(),
        )
    }

    #[test]
    fn test_tokenizes_wildcards_and_literal_runs() {
        assert_eq!(parse_name_pattern("**").unwrap(), np(&["**"]));
        assert_eq!(parse_name_pattern("*").unwrap(), np(&["*"]));
        assert_eq!(parse_name_pattern("ABC").unwrap(), np(&["ABC"]));
        assert_eq!(parse_name_pattern("com**X").unwrap(), np(&["com", "**", "X"]));
        assert_eq!(
            parse_name_pattern("com.example.*").unwrap(),
            np(&["com.example.", "*"])
        );
        assert_eq!(
            parse_name_pattern("com.example.*.abc.**").unwrap(),
            np(&["com.example.", "*", ".abc.", "**"])
        );
        assert_eq!(
            parse_name_pattern("com.example.**.abc.*").unwrap(),
            np(&["com.example.", "**", ".abc.", "*"])
        );
        assert_eq!(
            parse_name_pattern("com.example.**.abc.*.def").unwrap(),
            np(&["com.example.", "**", ".abc.", "*", ".def"])
        );
    }

    #[test]
    fn test_adjacent_wildcards_are_not_fused() {
        // `***` = `**` then `*`, two distinct units
        assert_eq!(parse_name_pattern("***").unwrap(), np(&["**", "*"]));
        assert_eq!(parse_name_pattern("a***b").unwrap(), np(&["a", "**", "*", "b"]));
    }

    #[test]
    fn test_subclass_suffix_sets_flag() {
        let p = parse_class_pattern("com.example.*^").unwrap();
        assert!(p.include_subclasses);
        assert_eq!(p.name, np(&["com.example.", "*"]));

        let p = parse_class_pattern("com.example.*").unwrap();
        assert!(!p.include_subclasses);
    }

    #[test]
    fn test_empty_pattern_is_rejected() {
        assert_eq!(
            parse_name_pattern(""),
            Err(PatternError::EmptyComponent(String::new()))
        );
    }

    #[test]
    fn test_reserved_character_is_reported() {
        let err = parse_name_pattern("com.exa mple").unwrap_err();
        assert_eq!(
            err,
            PatternError::ReservedCharacter {
                found: ' ',
                at: "com.exa mple".to_string()
            }
        );
    }

    #[test]
    fn test_stray_caret_inside_name_is_rejected() {
        // `^` is only legal as the final character
        let err = parse_class_pattern("com.^example").unwrap_err();
        assert!(matches!(err, PatternError::ReservedCharacter { found: '^', .. }));
    }

    #[test]
    fn test_missing_separator_is_reported() {
        let err = parse_method_pattern("<com.example.X int foo()>").unwrap_err();
        assert_eq!(
            err,
            PatternError::MissingSeparator("<com.example.X int foo()>".to_string())
        );
    }

    #[test]
    fn test_unbalanced_signature_is_reported() {
        let err = parse_field_pattern("<com.example.X: int field1").unwrap_err();
        assert_eq!(
            err,
            PatternError::UnbalancedSignature("<com.example.X: int field1".to_string())
        );
    }

    #[test]
    fn test_unbalanced_parens_are_reported() {
        let err = parse_method_pattern("<com.example.X: int foo(a,b>").unwrap_err();
        assert!(matches!(err, PatternError::UnbalancedParens(_)));
    }

    #[test]
    fn test_empty_parameter_token_is_rejected() {
        let err = parse_method_pattern("<com.example.X: int foo(int,)>").unwrap_err();
        assert_eq!(err, PatternError::EmptyComponent("int,".to_string()));
    }

    #[test]
    fn test_empty_parameter_list_is_legal() {
        let p = parse_method_pattern("<com.example.X: int foo()>").unwrap();
        assert!(p.params.is_empty());
    }
}
