//! Synchronization orchestration.
//!
//! Entry point for build-context change handling: checks the enablement
//! policy, resolves the build output path, and merges it into the
//! project's `.clangd` file. Owns all diagnostic reporting; none of the
//! failure modes are fatal to the host.

mod events;

pub use events::{BuildContextEvents, BuildContextListener, Subscription};

use std::sync::Arc;

use crate::context::{BuildContext, Project};
use crate::diagnostics::{DiagnosticSink, Severity};
use crate::merger::{ConfigMerger, CLANGD_CONFIG_FILE_NAME};
use crate::resolver::PathResolver;

/// Decides whether synchronization is active for a project.
pub trait EnablementPolicy: Send + Sync {
    /// True if the project's `.clangd` file should be managed.
    fn enabled(&self, project: &Project) -> bool;
}

/// Handles build-context change notifications.
///
/// Stateless across invocations: each notification is handled
/// independently and idempotently.
pub struct SyncOrchestrator {
    policy: Arc<dyn EnablementPolicy>,
    resolver: PathResolver,
    merger: ConfigMerger,
    sink: Arc<dyn DiagnosticSink>,
}

impl SyncOrchestrator {
    /// Create an orchestrator with the given collaborators.
    pub fn new(
        policy: Arc<dyn EnablementPolicy>,
        resolver: PathResolver,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            policy,
            resolver,
            merger: ConfigMerger::new(),
            sink,
        }
    }

    /// Synchronize one project after a build-context change.
    ///
    /// Disabled projects are skipped silently. Successful outcomes are
    /// silent as well; resolution, parse, and I/O failures are confined
    /// to this invocation and surfaced through the diagnostic sink. The
    /// next notification retries naturally.
    pub fn on_build_context_changed(&self, project: &Project, context: &BuildContext) {
        if !self.policy.enabled(project) {
            return;
        }

        let resolved = match self.resolver.resolve(project, context) {
            Ok(resolved) => resolved,
            Err(error) => {
                self.sink.report(
                    Severity::Error,
                    "Failed to resolve the build output directory",
                    Some(&error),
                );
                None
            }
        };
        let Some(database_path) = resolved else {
            self.sink.report(
                Severity::Error,
                "Cannot determine path to compile_commands.json",
                None,
            );
            return;
        };

        let config_file = project.root.join(CLANGD_CONFIG_FILE_NAME);
        if let Err(error) = self.merger.sync(&config_file, &database_path) {
            self.sink.report(
                Severity::Error,
                &format!("Failed to update {}", config_file.display()),
                Some(&error),
            );
        }
    }
}

impl BuildContextListener for SyncOrchestrator {
    fn build_context_changed(&self, project: &Project, context: &BuildContext) {
        self.on_build_context_changed(project, context);
    }
}
