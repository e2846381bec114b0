//! Name patterns: ordered unit sequences with wildcard matching
//!
//! A name pattern is an alternating sequence of literal runs and wildcard
//! markers. The sequence preserves the source text exactly: joining the
//! textual form of every unit reconstructs the original pattern string.
//! Adjacent wildcards of different kinds are kept as separate units, never
//! merged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One unit of a name pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameUnit {
    /// A literal run, matched verbatim (may contain `.`)
    Literal(String),

    /// `*` - matches a possibly-empty run of characters inside one
    /// dot-delimited segment; never consumes `.`
    NameWildcard,

    /// `**` - matches any possibly-empty substring, dots included
    FullWildcard,
}

impl NameUnit {
    pub fn literal(text: impl Into<String>) -> Self {
        NameUnit::Literal(text.into())
    }

    /// Textual form of this unit as it appears in pattern source
    pub fn as_str(&self) -> &str {
        match self {
            NameUnit::Literal(text) => text,
            NameUnit::NameWildcard => "*",
            NameUnit::FullWildcard => "**",
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, NameUnit::NameWildcard | NameUnit::FullWildcard)
    }
}

/// Wildcard pattern over dotted names
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamePattern {
    units: Vec<NameUnit>,
}

impl NamePattern {
    pub fn new(units: Vec<NameUnit>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[NameUnit] {
        &self.units
    }

    /// Whether the pattern contains no wildcard units
    pub fn is_exact(&self) -> bool {
        !self.units.iter().any(NameUnit::is_wildcard)
    }

    /// Match `candidate` against the unit sequence.
    ///
    /// Backtracking search: patterns with several wildcards have ambiguous
    /// split points, so every split is explored before a mismatch is
    /// final. Greedy single-pass matching would reject `a**b**c` inputs
    /// whose first viable split starves a later unit.
    pub fn matches(&self, candidate: &str) -> bool {
        match_units(&self.units, candidate)
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in &self.units {
            f.write_str(unit.as_str())?;
        }
        Ok(())
    }
}

fn match_units(units: &[NameUnit], text: &str) -> bool {
    let Some((unit, rest)) = units.split_first() else {
        return text.is_empty();
    };
    match unit {
        NameUnit::Literal(lit) => match text.strip_prefix(lit.as_str()) {
            Some(tail) => match_units(rest, tail),
            None => false,
        },
        NameUnit::NameWildcard => {
            // Consume 0..n non-dot characters, shortest split first
            let mut cut = 0;
            loop {
                if match_units(rest, &text[cut..]) {
                    return true;
                }
                match text[cut..].chars().next() {
                    Some(c) if c != '.' => cut += c.len_utf8(),
                    _ => return false,
                }
            }
        }
        NameUnit::FullWildcard => {
            let mut cut = 0;
            loop {
                if match_units(rest, &text[cut..]) {
                    return true;
                }
                match text[cut..].chars().next() {
                    Some(c) => cut += c.len_utf8(),
                    None => return false,
                }
            }
        }
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
    fn test_literal_matches_exact_name_only() {
        let p = np(&["com.example.X"]);
        assert!(p.is_exact());
        assert!(p.matches("com.example.X"));
        assert!(!p.matches("com.example.Y"));
        assert!(!p.matches("com.example.X2"));
        assert!(!p.matches("acom.example.X"));
    }

    #[test]
    fn test_full_wildcard_crosses_segments() {
        let p = np(&["com", "**", "X"]);
        assert!(p.matches("com.example.X"));
        assert!(p.matches("comX"));
        assert!(!p.matches("com.example.Y"));
    }

    #[test]
    fn test_name_wildcard_stays_in_segment() {
        let p = np(&["com.example.", "*"]);
        assert!(p.matches("com.example.Foo"));
        assert!(p.matches("com.example."));
        assert!(!p.matches("com.example.a.b"));
    }

    #[test]
    fn test_backtracking_explores_all_splits() {
        // First `**` must give back characters for the literal "b" to land
        let p = np(&["a", "**", "b", "**", "c"]);
        assert!(p.matches("abc"));
        assert!(p.matches("axxbxxc"));
        assert!(p.matches("abbc"));
        assert!(!p.matches("ac"));
    }

    #[test]
    fn test_display_reconstructs_source() {
        let p = np(&["com.example.", "**", ".abc.", "*", ".def"]);
        assert_eq!(p.to_string(), "com.example.**.abc.*.def");
    }

    #[test]
    fn test_trailing_wildcard_matches_empty() {
        assert!(np(&["com", "**"]).matches("com"));
        assert!(np(&["com", "*"]).matches("com"));
        assert!(np(&["**"]).matches(""));
    }
}
