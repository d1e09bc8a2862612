use std::path::{Path, PathBuf};

use crate::foundation::error::{PackResult, SpritePackError};

/// File-name marker of sheets this tool produced; those are never re-packed.
pub const PACKED_MARKER: &str = "packed";

/// Expand `pattern` into the source sheets to pack, sorted by file name.
///
/// Entries whose file name contains [`PACKED_MARKER`] are skipped so a previous
/// run's output is never fed back in. Returns an empty list when nothing
/// matches; the caller decides whether that is fatal.
pub fn discover_sources(pattern: &str) -> PackResult<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|e| {
        SpritePackError::validation(format!("invalid source pattern '{pattern}': {e}"))
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            SpritePackError::io(path, e.into_error())
        })?;
        if is_packed_output(&path) {
            tracing::debug!(path = %path.display(), "skipping packed output");
            continue;
        }
        paths.push(path);
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()).then_with(|| a.cmp(b)));
    Ok(paths)
}

fn is_packed_output(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().contains(PACKED_MARKER))
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/discover.rs"]
mod tests;
