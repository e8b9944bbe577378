//! Path filtering: ignore patterns and extension membership.

use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::glob::match_wildcard;

/// Splits a comma-separated ignore-pattern string into individual patterns.
/// Each element is trimmed; empty elements are dropped; order is preserved.
pub fn parse_ignore_patterns(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Removes every path matched by any ignore pattern, keeping input order.
///
/// A path is excluded when a pattern matches either its full path or its
/// basename, so bare patterns like `jest*` catch files in any directory.
pub fn filter_ignored(paths: Vec<PathBuf>, patterns: &[String]) -> Vec<PathBuf> {
    if patterns.is_empty() {
        return paths;
    }
    let kept: Vec<PathBuf> = paths.into_iter().filter(|p| !is_ignored(p, patterns)).collect();
    debug!("{} files remain after applying {} ignore patterns", kept.len(), patterns.len());
    kept
}

fn is_ignored(path: &Path, patterns: &[String]) -> bool {
    let full = path.to_string_lossy();
    let base = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    patterns.iter().any(|pat| {
        let hit = match_wildcard(&full, pat) || match_wildcard(&base, pat);
        if hit {
            trace!("Ignoring '{}' (pattern '{}')", full, pat);
        }
        hit
    })
}

/// Keeps only paths whose extension is a member of `extensions`, preserving
/// input order. Extensions are compared dot-inclusive and case-sensitively.
pub fn filter_by_extension(paths: Vec<PathBuf>, extensions: &[&str]) -> Vec<PathBuf> {
    paths
        .into_iter()
        .filter(|p| {
            let s = p.to_string_lossy();
            extensions.contains(&extension_of(&s))
        })
        .collect()
}

/// The dot-inclusive extension of a path's final segment (`.ts` for
/// `src/index.ts`). Empty when the segment has no dot or only a leading dot.
pub fn extension_of(path: &str) -> &str {
    let base = path.rsplit('/').next().unwrap_or(path);
    match base.rfind('.') {
        Some(idx) if idx > 0 => &base[idx..],
        _ => "",
    }
}
