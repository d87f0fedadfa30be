//! clangd-sync - build-configuration-aware `.clangd` synchronization
//!
//! Keeps the `.clangd` file at a project root pointed at the compilation
//! database (`compile_commands.json`) of the active build configuration,
//! which build systems generate inside the build output directory rather
//! than the project root. Hosts feed build-context change notifications
//! into the [`SyncOrchestrator`]; the crate resolves the output directory
//! and applies the minimal update to `CompileFlags.CompilationDatabase`,
//! leaving all other file content alone.

pub mod context;
pub mod diagnostics;
pub mod document;
pub mod merger;
pub mod resolver;
pub mod sync;

pub use context::{BuildContext, Project};
pub use diagnostics::{CapturedDiagnostic, DiagnosticSink, MockSink, Severity, TracingSink};
pub use document::ConfigDocument;
pub use merger::{ConfigMerger, MergeError, SyncOutcome, CLANGD_CONFIG_FILE_NAME};
pub use resolver::{
    BuildOutputLookup, PathResolver, ResolutionError, VariableResolver, VariableTable,
};
pub use sync::{
    BuildContextEvents, BuildContextListener, EnablementPolicy, Subscription, SyncOrchestrator,
};
