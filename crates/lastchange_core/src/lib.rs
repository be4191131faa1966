//! `lastchange_core`: resolve the last relevant commit and render it for builds.
//!
//! Resolution never fails: git problems are reported through a
//! [`DiagnosticSink`] and degrade to the `0` sentinel revision.

mod diagnostics;
mod format;
mod git;
mod overrides;
mod resolver;
mod types;
mod writer;

#[cfg(test)]
mod test_fixtures;

pub use diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
pub use format::{header_contents, header_guard, plain_contents, DEFAULT_VERSION_MACRO};
pub use git::{GitError, GitOutput, GitRunner, SystemGit};
pub use overrides::{OverrideKey, OverrideTable, PinnedRevision};
pub use resolver::{parse_commit_position, ResolveRequest, Resolver, DEFAULT_FILTER};
pub use types::{RevisionForm, RevisionInfo};
pub use writer::write_if_changed;
