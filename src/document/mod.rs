//! Structured document model for the `.clangd` file.
//!
//! A thin wrapper over a YAML value tree (mapping | sequence | scalar).
//! Accessors return `None` on any shape mismatch instead of panicking, so
//! callers can skip unmergeable documents safely.

use serde_yaml::{Mapping, Value};

/// A parsed `.clangd` document.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    root: Value,
}

impl ConfigDocument {
    /// Parse a document from YAML text.
    ///
    /// Returns `Ok(None)` for an empty document (blank file, or comments
    /// only) and `Err` for invalid syntax.
    pub fn parse(text: &str) -> Result<Option<Self>, serde_yaml::Error> {
        let root: Value = serde_yaml::from_str(text)?;
        if root.is_null() {
            return Ok(None);
        }
        Ok(Some(Self { root }))
    }

    /// Serialize the whole document back to YAML text.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.root)
    }

    /// Look up a value by dot-separated path
    /// (e.g. `CompileFlags.CompilationDatabase`).
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = &self.root;
        for part in path.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    /// Look up a string scalar by dot-separated path.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// Mutable access to a top-level mapping value.
    ///
    /// Returns `None` if the document root is not a mapping, the key is
    /// absent, or the value under the key is not itself a mapping.
    pub fn mapping_mut(&mut self, key: &str) -> Option<&mut Mapping> {
        self.root.get_mut(key)?.as_mapping_mut()
    }
}
