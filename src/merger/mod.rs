//! `.clangd` file merge.
//!
//! The merger is the only writer of the config file. It applies the
//! minimal update needed to point `CompileFlags.CompilationDatabase` at
//! the active build output directory and leaves every other key alone.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::document::ConfigDocument;

/// Name of the clangd configuration file, relative to the project root.
pub const CLANGD_CONFIG_FILE_NAME: &str = ".clangd";

const COMPILE_FLAGS: &str = "CompileFlags";
const COMPILATION_DATABASE: &str = "CompilationDatabase";
const COMPILATION_DATABASE_PATH: &str = "CompileFlags.CompilationDatabase";

/// Result of a successful synchronization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The file did not exist (or was empty) and was written fresh.
    Created,
    /// The database entry was rewritten.
    Updated,
    /// Nothing to do: the value is already current, or the document has
    /// no `CompileFlags` mapping to merge into.
    Unchanged,
}

/// Errors that abort a synchronization pass.
///
/// `Parse` is the parse-abort class; the rest are the I/O-abort class.
/// None of them are retried; the next build-context change retries
/// naturally.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// The existing file has invalid syntax. The merger never rewrites
    /// such a file; the user has to fix it first.
    #[error("Invalid syntax in {}: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Failed to read {}: {}", path.display(), source)]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {}", path.display(), source)]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to serialize {}: {}", path.display(), source)]
    Serialize {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Applies compilation-database updates to a `.clangd` file.
pub struct ConfigMerger;

impl ConfigMerger {
    /// Create a new merger.
    pub fn new() -> Self {
        Self
    }

    /// Synchronize `config_file` so that `CompileFlags.CompilationDatabase`
    /// names `database_path`.
    ///
    /// Creates the file when absent, recreates it when empty, and
    /// otherwise applies the minimal in-place update: the one recognized
    /// key is set, every sibling and every other top-level key survives
    /// the rewrite. A non-empty file without a `CompileFlags` mapping is
    /// deliberately left alone: the merger never invents schema in a
    /// document whose author chose not to have it.
    pub fn sync(&self, config_file: &Path, database_path: &str) -> Result<SyncOutcome, MergeError> {
        if !config_file.exists() {
            return self.create(config_file, database_path);
        }

        let text = fs::read_to_string(config_file).map_err(|source| MergeError::Read {
            path: config_file.to_path_buf(),
            source,
        })?;
        let parsed = ConfigDocument::parse(&text).map_err(|source| MergeError::Parse {
            path: config_file.to_path_buf(),
            source,
        })?;
        let Some(mut doc) = parsed else {
            // Empty file: recreate from scratch.
            return self.create(config_file, database_path);
        };

        if doc.get_str(COMPILATION_DATABASE_PATH) == Some(database_path) {
            return Ok(SyncOutcome::Unchanged);
        }
        let Some(flags) = doc.mapping_mut(COMPILE_FLAGS) else {
            return Ok(SyncOutcome::Unchanged);
        };
        flags.insert(
            Value::String(COMPILATION_DATABASE.to_string()),
            Value::String(database_path.to_string()),
        );

        let rendered = doc.to_yaml().map_err(|source| MergeError::Serialize {
            path: config_file.to_path_buf(),
            source,
        })?;
        fs::write(config_file, rendered).map_err(|source| MergeError::Write {
            path: config_file.to_path_buf(),
            source,
        })?;
        Ok(SyncOutcome::Updated)
    }

    /// Write the canonical minimal document.
    ///
    /// Direct text construction, not the serializer, so a first file is
    /// always in canonical form.
    fn create(&self, config_file: &Path, database_path: &str) -> Result<SyncOutcome, MergeError> {
        let content = format!(
            "{}: {{{}: {}}}",
            COMPILE_FLAGS, COMPILATION_DATABASE, database_path
        );
        fs::write(config_file, content).map_err(|source| MergeError::Write {
            path: config_file.to_path_buf(),
            source,
        })?;
        Ok(SyncOutcome::Created)
    }
}

impl Default for ConfigMerger {
    fn default() -> Self {
        Self::new()
    }
}
