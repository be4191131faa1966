use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::RevisionInfo;

/// What a pinned revision is selected by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideKey {
    /// Exact match on the requested plain-text output path.
    OutputPath(String),
    /// Exact match on the requested header macro name.
    VersionMacro(String),
}

impl OverrideKey {
    fn matches(&self, output_path: Option<&str>, version_macro: Option<&str>) -> bool {
        match self {
            Self::OutputPath(path) => output_path == Some(path.as_str()),
            Self::VersionMacro(name) => version_macro == Some(name.as_str()),
        }
    }
}

/// A constant revision record that bypasses git entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PinnedRevision {
    pub key: OverrideKey,
    pub revision_id: String,
    pub revision: String,
}

impl PinnedRevision {
    pub fn new(key: OverrideKey, revision_id: &str, revision: &str) -> Self {
        Self {
            key,
            revision_id: revision_id.to_string(),
            revision: revision.to_string(),
        }
    }

    pub fn to_revision_info(&self) -> RevisionInfo {
        RevisionInfo::new(self.revision_id.clone(), self.revision.clone())
    }
}

/// Ordered lookup table of pinned revisions; the first matching entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverrideTable {
    pub overrides: Vec<PinnedRevision>,
}

impl OverrideTable {
    /// Pins for vendored components whose versions are frozen.
    pub fn builtin() -> Self {
        Self {
            overrides: vec![
                PinnedRevision::new(
                    OverrideKey::OutputPath("src/build/util/LASTCHANGE".to_string()),
                    "a7c1b21614f6b5763bd597ab8fefd8678c073df9",
                    "a7c1b21614f6b5763bd597ab8fefd8678c073df9-refs/heads/master@{#764932}",
                ),
                PinnedRevision::new(
                    OverrideKey::VersionMacro("GPU_LISTS_VERSION".to_string()),
                    "6f4691ebdde8d27536a757ac13fd972e3b265ce4",
                    "6f4691ebdde8d27536a757ac13fd972e3b265ce4-refs/branch-heads/3497@{#948}",
                ),
                PinnedRevision::new(
                    OverrideKey::VersionMacro("SKIA_COMMIT_HASH".to_string()),
                    "caab4546ccda874f74cb979eee680fbc2cc7e2e0",
                    "caab4546ccda874f74cb979eee680fbc2cc7e2e0-",
                ),
            ],
        }
    }

    /// Loads a replacement table from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading override table: {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("parsing override table: {}", path.display()))
    }

    pub fn lookup(
        &self,
        output_path: Option<&str>,
        version_macro: Option<&str>,
    ) -> Option<&PinnedRevision> {
        self.overrides
            .iter()
            .find(|pin| pin.key.matches(output_path, version_macro))
    }
}
