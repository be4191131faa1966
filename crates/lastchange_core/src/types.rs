use serde::{Deserialize, Serialize};

/// Identifier used when no revision could be resolved.
pub const UNKNOWN_REVISION: &str = "0";

/// The resolved revision for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionInfo {
    /// Bare commit identifier, e.g. a 40-character git hash.
    pub revision_id: String,
    /// Human-facing form, `{revision_id}-{position}`.
    pub revision: String,
}

/// Which of the two strings in a [`RevisionInfo`] gets emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevisionForm {
    #[default]
    Full,
    IdOnly,
}

impl RevisionInfo {
    pub fn new(revision_id: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            revision_id: revision_id.into(),
            revision: revision.into(),
        }
    }

    /// Builds the revision for a commit hash and its (possibly empty) commit position.
    pub fn from_commit(hash: &str, position: &str) -> Self {
        Self::new(hash, format!("{hash}-{position}"))
    }

    pub fn unknown() -> Self {
        Self::new(UNKNOWN_REVISION, UNKNOWN_REVISION)
    }

    pub fn is_unknown(&self) -> bool {
        self.revision_id == UNKNOWN_REVISION
    }

    pub fn value(&self, form: RevisionForm) -> &str {
        match form {
            RevisionForm::Full => &self.revision,
            RevisionForm::IdOnly => &self.revision_id,
        }
    }
}
