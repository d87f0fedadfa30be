//! Build output path resolution.
//!
//! Determines the project-relative path to the active build
//! configuration's output directory, where build systems generate the
//! compilation database.

mod macros;

pub use macros::VariableTable;

use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use std::sync::Arc;

use crate::context::{BuildContext, Project};

/// Expands build-system variables embedded in configured paths.
///
/// Injected so the resolver has no dependency on any specific build
/// system's variable syntax.
pub trait VariableResolver: Send + Sync {
    /// Expand every variable reference in `raw` for the given context.
    fn expand(&self, raw: &str, context: &BuildContext) -> Result<String, ResolutionError>;
}

/// Locates the output container of a build configuration.
///
/// Covers build systems that manage their own output location and leave
/// the builder working directory unset.
pub trait BuildOutputLookup: Send + Sync {
    /// Absolute output location for the active configuration, if known.
    fn output_location(&self, project: &Project, config_id: &str) -> Option<PathBuf>;
}

/// Errors raised while resolving the build output path.
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error("Unknown build variable '{0}'")]
    UnknownVariable(String),

    #[error("Failed to expand '{raw}': {reason}")]
    Expansion { raw: String, reason: String },
}

/// Resolves the project-relative build output path for a build context.
pub struct PathResolver {
    variables: Arc<dyn VariableResolver>,
    build_lookup: Option<Arc<dyn BuildOutputLookup>>,
}

impl PathResolver {
    /// Create a resolver with the given collaborators.
    ///
    /// `build_lookup` is optional: hosts without a managed-build adapter
    /// pass `None` and rely on the configured builder working directory.
    pub fn new(
        variables: Arc<dyn VariableResolver>,
        build_lookup: Option<Arc<dyn BuildOutputLookup>>,
    ) -> Self {
        Self {
            variables,
            build_lookup,
        }
    }

    /// Compute the project-relative path to the build output directory.
    ///
    /// Returns `Ok(None)` when no path can be determined. Expansion
    /// failures are returned as errors and never fall back silently. A
    /// location outside the project root comes back absolute, unmodified.
    pub fn resolve(
        &self,
        project: &Project,
        context: &BuildContext,
    ) -> Result<Option<String>, ResolutionError> {
        if let Some(raw) = &context.builder_cwd {
            let expanded = self.variables.expand(raw, context)?;
            return Ok(non_empty(strip_project_prefix(&project.root, &expanded)));
        }

        let located = self
            .build_lookup
            .as_ref()
            .and_then(|lookup| lookup.output_location(project, &context.config_id));
        let Some(location) = located else {
            return Ok(None);
        };
        let absolute = location.to_string_lossy();
        Ok(non_empty(strip_project_prefix(&project.root, &absolute)))
    }
}

/// Strip the project root (with trailing separator) from an absolute path.
///
/// A path outside the project root is returned unmodified.
fn strip_project_prefix(root: &Path, absolute: &str) -> String {
    let mut prefix = root.to_string_lossy().into_owned();
    if !prefix.ends_with(MAIN_SEPARATOR) {
        prefix.push(MAIN_SEPARATOR);
    }
    match absolute.strip_prefix(&prefix) {
        Some(relative) => relative.to_string(),
        None => absolute.to_string(),
    }
}

fn non_empty(path: String) -> Option<String> {
    if path.is_empty() {
        None
    } else {
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLookup(Option<PathBuf>);

    impl BuildOutputLookup for FixedLookup {
        fn output_location(&self, _project: &Project, _config_id: &str) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    fn project() -> Project {
        Project::new("proj", "/ws/proj")
    }

    fn resolver(lookup: Option<FixedLookup>) -> PathResolver {
        let variables = Arc::new(VariableTable::new().with("ProjDirPath", "/ws/proj"));
        match lookup {
            Some(lookup) => PathResolver::new(variables, Some(Arc::new(lookup))),
            None => PathResolver::new(variables, None),
        }
    }

    #[test]
    fn test_builder_cwd_stripped_to_relative() {
        let context = BuildContext::new("Debug").with_builder_cwd("/ws/proj/build/Debug");
        let resolved = resolver(None).resolve(&project(), &context).unwrap();
        assert_eq!(resolved.as_deref(), Some("build/Debug"));
    }

    #[test]
    fn test_variables_expanded_before_stripping() {
        let context = BuildContext::new("Debug").with_builder_cwd("${ProjDirPath}/${ConfigName}");
        let resolved = resolver(None).resolve(&project(), &context).unwrap();
        assert_eq!(resolved.as_deref(), Some("Debug"));
    }

    #[test]
    fn test_expansion_failure_is_an_error() {
        let context = BuildContext::new("Debug").with_builder_cwd("${Missing}/Debug");
        let result = resolver(None).resolve(&project(), &context);
        assert!(matches!(result, Err(ResolutionError::UnknownVariable(name)) if name == "Missing"));
    }

    #[test]
    fn test_location_outside_project_root_returned_absolute() {
        let context = BuildContext::new("Debug").with_builder_cwd("/elsewhere/out");
        let resolved = resolver(None).resolve(&project(), &context).unwrap();
        assert_eq!(resolved.as_deref(), Some("/elsewhere/out"));
    }

    #[test]
    fn test_adapter_location_stripped_to_relative() {
        let context = BuildContext::new("Default");
        let lookup = FixedLookup(Some(PathBuf::from("/ws/proj/out")));
        let resolved = resolver(Some(lookup)).resolve(&project(), &context).unwrap();
        assert_eq!(resolved.as_deref(), Some("out"));
    }

    #[test]
    fn test_adapter_without_location_is_absent() {
        let context = BuildContext::new("Default");
        let resolved = resolver(Some(FixedLookup(None)))
            .resolve(&project(), &context)
            .unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_no_cwd_and_no_adapter_is_absent() {
        let context = BuildContext::new("Default");
        let resolved = resolver(None).resolve(&project(), &context).unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_project_root_itself_is_absent() {
        let context = BuildContext::new("Debug").with_builder_cwd("/ws/proj/");
        let resolved = resolver(None).resolve(&project(), &context).unwrap();
        assert_eq!(resolved, None);
    }
}
