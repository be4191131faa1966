use anyhow::{Context, Result};
use std::path::Path;

/// Replaces the contents of `path` unless it already holds exactly `contents`.
///
/// Leaving an identical file untouched keeps its mtime, so build tools don't
/// see a change. A missing or unreadable file is always written. Returns
/// whether a write happened.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<bool> {
    if let Ok(existing) = std::fs::read_to_string(path) {
        if existing == contents {
            tracing::debug!(path = %path.display(), "unchanged, not writing");
            return Ok(false);
        }
        std::fs::remove_file(path)
            .with_context(|| format!("removing stale {}", path.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote");
    Ok(true)
}
