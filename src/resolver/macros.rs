//! Table-driven build variable expansion.
//!
//! Stands in for a full build-system variable engine: variables are
//! `${name}` references looked up in a fixed table. Hosts with a richer
//! variable model implement `VariableResolver` themselves.

use std::collections::HashMap;

use regex_lite::Regex;

use crate::context::BuildContext;

use super::{ResolutionError, VariableResolver};

const VARIABLE_PATTERN: &str = r"\$\{[A-Za-z_][A-Za-z0-9_]*\}";

/// `${ConfigName}` always resolves to the active configuration id, like
/// the build system's own variable of the same name.
const CONFIG_NAME_VARIABLE: &str = "ConfigName";

/// Map-backed variable resolver for `${name}` references.
///
/// Expansion fails on the first reference that is neither in the table
/// nor a built-in.
pub struct VariableTable {
    values: HashMap<String, String>,
    pattern: Regex,
}

impl VariableTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            pattern: Regex::new(VARIABLE_PATTERN).unwrap(),
        }
    }

    /// Add a variable definition.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Insert or replace a variable definition.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }
}

impl Default for VariableTable {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableResolver for VariableTable {
    fn expand(&self, raw: &str, context: &BuildContext) -> Result<String, ResolutionError> {
        let mut expanded = String::with_capacity(raw.len());
        let mut last = 0;
        for found in self.pattern.find_iter(raw) {
            // The match is `${name}`; the name sits between the braces.
            let name = &raw[found.start() + 2..found.end() - 1];
            expanded.push_str(&raw[last..found.start()]);
            if let Some(value) = self.values.get(name) {
                expanded.push_str(value);
            } else if name == CONFIG_NAME_VARIABLE {
                expanded.push_str(&context.config_id);
            } else {
                return Err(ResolutionError::UnknownVariable(name.to_string()));
            }
            last = found.end();
        }
        expanded.push_str(&raw[last..]);
        Ok(expanded)
    }
}
