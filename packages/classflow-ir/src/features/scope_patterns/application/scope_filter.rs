//! Scope filter assembly from configuration entries
//!
//! A filter is built once from the full entry list and is immutable
//! afterwards. Any malformed entry aborts construction before analysis
//! starts, so the translation stages only ever consult a fully valid
//! filter set. Structural pattern equality makes duplicated entries
//! collapse to one set member.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use super::super::domain::pattern::{ClassPattern, FieldPattern, MethodPattern};
use super::super::infrastructure::parser::{
    parse_class_pattern, parse_field_pattern, parse_method_pattern, PatternError,
};

/// Immutable set of class/method/field scope patterns
#[derive(Debug, Clone, Default)]
pub struct ScopeFilter {
    classes: FxHashSet<ClassPattern>,
    methods: FxHashSet<MethodPattern>,
    fields: FxHashSet<FieldPattern>,
}

impl ScopeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every entry, deduplicating structurally equal patterns.
    ///
    /// Fails on the first malformed entry and returns no partial filter.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::default();
        for entry in entries {
            filter.add_entry(entry.as_ref())?;
        }
        info!(
            "scope filter built ({} class, {} method, {} field patterns)",
            filter.classes.len(),
            filter.methods.len(),
            filter.fields.len()
        );
        Ok(filter)
    }

    /// Classify and parse one entry.
    ///
    /// `<...>` entries with a parameter list are method patterns, `<...>`
    /// entries without one are field patterns, anything else is a class
    /// pattern.
    pub fn add_entry(&mut self, entry: &str) -> Result<(), PatternError> {
        if entry.starts_with('<') {
            if entry.contains('(') {
                if !self.methods.insert(parse_method_pattern(entry)?) {
                    debug!("duplicate method pattern ignored: {entry}");
                }
            } else if !self.fields.insert(parse_field_pattern(entry)?) {
                debug!("duplicate field pattern ignored: {entry}");
            }
        } else if !self.classes.insert(parse_class_pattern(entry)?) {
            debug!("duplicate class pattern ignored: {entry}");
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.methods.is_empty() && self.fields.is_empty()
    }

    pub fn class_patterns(&self) -> impl Iterator<Item = &ClassPattern> {
        self.classes.iter()
    }

    pub fn method_patterns(&self) -> impl Iterator<Item = &MethodPattern> {
        self.methods.iter()
    }

    pub fn field_patterns(&self) -> impl Iterator<Item = &FieldPattern> {
        self.fields.iter()
    }

    /// Whether any class pattern matches the given class name
    pub fn matches_class(&self, class_name: &str) -> bool {
        self.classes.iter().any(|p| p.matches(class_name))
    }

    /// Whether any method pattern matches the given concrete signature
    pub fn matches_method(
        &self,
        class_name: &str,
        return_type: &str,
        method_name: &str,
        param_types: &[&str],
    ) -> bool {
        self.methods
            .iter()
            .any(|p| p.matches_signature(class_name, return_type, method_name, param_types))
    }

    /// Whether any field pattern matches the given concrete signature
    pub fn matches_field(&self, class_name: &str, field_type: &str, field_name: &str) -> bool {
        self.fields
            .iter()
            .any(|p| p.matches_signature(class_name, field_type, field_name))
    }
}
