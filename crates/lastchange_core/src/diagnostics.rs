use std::path::Path;

use crate::git::GitError;

/// Something the resolver wants a human to know about. Never fatal.
#[derive(Debug)]
pub enum Diagnostic<'a> {
    GitFailed(&'a GitError),
    /// No revision could be resolved; the `0` sentinel is used instead.
    Unresolved { source_dir: &'a Path },
}

/// Receives resolver diagnostics in place of a global logger.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: &Diagnostic<'_>);
}

/// Forwards diagnostics to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic<'_>) {
        match diagnostic {
            Diagnostic::GitFailed(error) => tracing::warn!("{error}"),
            Diagnostic::Unresolved { source_dir } => tracing::warn!(
                source_dir = %source_dir.display(),
                "no revision found, falling back to 0"
            ),
        }
    }
}
