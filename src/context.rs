//! Project and build-context inputs.
//!
//! Produced by the host on every build-configuration change and read-only
//! to the synchronizer. Nothing in here is persisted.

use std::path::PathBuf;

/// A project known to the host workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Project name, used to key enablement and build-adapter lookups.
    pub name: String,

    /// Absolute path to the project root directory.
    pub root: PathBuf,
}

impl Project {
    /// Create a new project handle.
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }
}

/// Snapshot of the active build configuration at notification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    /// Identifier of the active build configuration (e.g. "Debug").
    pub config_id: String,

    /// Builder working directory as configured, possibly containing
    /// unexpanded `${...}` build variables. Absent for build systems that
    /// manage their own output location.
    pub builder_cwd: Option<String>,
}

impl BuildContext {
    /// Context for a configuration without an explicit builder working
    /// directory.
    pub fn new(config_id: impl Into<String>) -> Self {
        Self {
            config_id: config_id.into(),
            builder_cwd: None,
        }
    }

    /// Set the configured builder working directory.
    pub fn with_builder_cwd(mut self, cwd: impl Into<String>) -> Self {
        self.builder_cwd = Some(cwd.into());
        self
    }
}
