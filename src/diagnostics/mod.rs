//! Diagnostic reporting.
//!
//! The synchronizer never fails its host: every error is confined to one
//! synchronization attempt and surfaced through an injected sink. Sinks
//! are fire-and-forget and must not block the caller.

use std::error::Error;
use std::fmt;
use std::sync::Mutex;

/// Severity of a reported diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Sink for diagnostics emitted during synchronization.
pub trait DiagnosticSink: Send + Sync {
    /// Report a diagnostic, optionally with its underlying cause.
    fn report(&self, severity: Severity, message: &str, cause: Option<&dyn Error>);
}

/// Production sink that forwards diagnostics to `tracing`.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, severity: Severity, message: &str, cause: Option<&dyn Error>) {
        match (severity, cause) {
            (Severity::Error, Some(cause)) => tracing::error!(%cause, "{}", message),
            (Severity::Error, None) => tracing::error!("{}", message),
            (Severity::Warning, Some(cause)) => tracing::warn!(%cause, "{}", message),
            (Severity::Warning, None) => tracing::warn!("{}", message),
            (Severity::Info, Some(cause)) => tracing::info!(%cause, "{}", message),
            (Severity::Info, None) => tracing::info!("{}", message),
        }
    }
}

/// A diagnostic captured by [`MockSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedDiagnostic {
    pub severity: Severity,
    pub message: String,
    /// Rendered cause chain head, if one was attached.
    pub cause: Option<String>,
}

/// Capturing sink for tests.
#[derive(Debug, Default)]
pub struct MockSink {
    reports: Mutex<Vec<CapturedDiagnostic>>,
}

impl MockSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every diagnostic received so far, in report order.
    pub fn reports(&self) -> Vec<CapturedDiagnostic> {
        self.reports.lock().unwrap().clone()
    }

    /// True if no diagnostics were reported.
    pub fn is_empty(&self) -> bool {
        self.reports.lock().unwrap().is_empty()
    }
}

impl DiagnosticSink for MockSink {
    fn report(&self, severity: Severity, message: &str, cause: Option<&dyn Error>) {
        self.reports.lock().unwrap().push(CapturedDiagnostic {
            severity,
            message: message.to_string(),
            cause: cause.map(|c| c.to_string()),
        });
    }
}
