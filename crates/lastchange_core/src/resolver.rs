use std::path::Path;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::git::{GitError, GitRunner};
use crate::overrides::OverrideTable;
use crate::types::RevisionInfo;

/// Default commit-message filter; skips local commits that never went through review.
pub const DEFAULT_FILTER: &str = "^Change-Id:";

const COMMIT_POSITION_KEY: &str = "Cr-Commit-Position:";

/// Inputs for one resolution.
#[derive(Debug, Clone, Copy)]
pub struct ResolveRequest<'a> {
    pub source_dir: &'a Path,
    /// Passed to `git log --grep`; `None` considers every commit.
    pub filter: Option<&'a str>,
    /// Used only to select a pinned revision.
    pub output_path: Option<&'a str>,
    /// Used only to select a pinned revision.
    pub version_macro: Option<&'a str>,
}

pub struct Resolver<'a> {
    git: &'a dyn GitRunner,
    diagnostics: &'a dyn DiagnosticSink,
    overrides: &'a OverrideTable,
}

impl<'a> Resolver<'a> {
    pub fn new(
        git: &'a dyn GitRunner,
        diagnostics: &'a dyn DiagnosticSink,
        overrides: &'a OverrideTable,
    ) -> Self {
        Self {
            git,
            diagnostics,
            overrides,
        }
    }

    /// Returns the pinned revision if one matches, otherwise asks git.
    /// Falls back to the `0` sentinel; never fails.
    pub fn resolve(&self, request: &ResolveRequest<'_>) -> RevisionInfo {
        if let Some(pin) = self
            .overrides
            .lookup(request.output_path, request.version_macro)
        {
            tracing::debug!(key = ?pin.key, "using pinned revision");
            return pin.to_revision_info();
        }

        self.fetch_git_revision(request.source_dir, request.filter)
            .unwrap_or_else(|| {
                self.diagnostics.report(&Diagnostic::Unresolved {
                    source_dir: request.source_dir,
                });
                RevisionInfo::unknown()
            })
    }

    /// Hash of the newest commit matching `filter`, plus its commit position if any.
    pub fn fetch_git_revision(&self, dir: &Path, filter: Option<&str>) -> Option<RevisionInfo> {
        let mut args = vec!["log".to_string(), "-1".to_string(), "--format=%H".to_string()];
        if let Some(filter) = filter {
            args.push(format!("--grep={filter}"));
        }
        let hash = self.run_checked(dir, &args)?;
        let position = self.commit_position(dir, &hash).unwrap_or_default();
        tracing::debug!(%hash, %position, "resolved revision from git");
        Some(RevisionInfo::from_commit(&hash, &position))
    }

    fn run_checked(&self, dir: &Path, args: &[String]) -> Option<String> {
        let output = match self.git.run(dir, args) {
            Ok(output) => output,
            Err(source) => {
                self.report(&GitError::launch(args, source));
                return None;
            }
        };
        let trimmed = output.stdout.trim();
        if output.success() && !trimmed.is_empty() {
            Some(trimmed.to_string())
        } else {
            self.report(&GitError::status(args, &output));
            None
        }
    }

    fn commit_position(&self, dir: &Path, hash: &str) -> Option<String> {
        let args = ["cat-file".to_string(), "commit".to_string(), hash.to_string()];
        let output = match self.git.run(dir, &args) {
            Ok(output) => output,
            Err(source) => {
                self.report(&GitError::launch(&args, source));
                return None;
            }
        };
        if !output.success() {
            tracing::debug!(code = ?output.code, "git cat-file failed, no commit position");
            return None;
        }
        parse_commit_position(&output.stdout)
    }

    fn report(&self, error: &GitError) {
        self.diagnostics.report(&Diagnostic::GitFailed(error));
    }
}

/// Extracts the value of the last `Cr-Commit-Position:` trailer in a raw commit object.
pub fn parse_commit_position(raw_commit: &str) -> Option<String> {
    raw_commit
        .lines()
        .rev()
        .find(|line| line.starts_with(COMMIT_POSITION_KEY))
        .and_then(|line| line.split_whitespace().last())
        .map(str::to_string)
}
