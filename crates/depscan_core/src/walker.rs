use anyhow::{Result, anyhow};
use ignore::WalkBuilder;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Collects every file under `root`, depth-first with directory entries
/// sorted by name so the traversal order is deterministic.
///
/// Standard filters (gitignore, hidden files) are disabled: which files to
/// skip is decided by the caller's ignore patterns, not by the walker.
/// Unreadable entries are logged and skipped rather than aborting the walk.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(anyhow!("'{}' is not a directory", root.display()));
    }

    debug!("Walking directory tree from root: {}", root.display());
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files: Vec<PathBuf> = Vec::new();
    for res in walker {
        let dent = match res {
            Ok(d) => d,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if dent.file_type().is_some_and(|t| t.is_file()) {
            files.push(dent.path().to_path_buf());
        }
    }

    debug!("Collected {} files under {}", files.len(), root.display());
    Ok(files)
}
