use anyhow::Result;
use log::{debug, info, trace, warn};
use rayon::prelude::*;
use std::{fs, path::PathBuf};

use crate::{
    constants::SCAN_EXTENSIONS,
    extractor::extract_dependencies,
    filter::{filter_by_extension, filter_ignored},
    types::{FileReport, ScanFailure, ScanResult},
    walker::collect_files,
};

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub ignore_patterns: Vec<String>,
}

/// Runs one dependency scan: walk the root, keep scannable files, drop
/// ignored ones, then read and extract each remaining file.
///
/// A file that fails to read becomes a [`ScanFailure`] and never aborts the
/// scan. Reads run in parallel; `par_iter` keeps collected order identical
/// to the deterministic traversal order, so reports come out in walk order.
pub fn run_scan(cfg: &ScanConfig) -> Result<ScanResult> {
    info!("Starting dependency scan of {}", cfg.root.display());

    let files = collect_files(&cfg.root)?;
    debug!("Found {} files before filtering", files.len());

    let files = filter_by_extension(files, SCAN_EXTENSIONS);
    debug!("{} files have scannable extensions", files.len());

    let files = filter_ignored(files, &cfg.ignore_patterns);
    info!(
        "Scanning {} files ({} ignore patterns active)",
        files.len(),
        cfg.ignore_patterns.len()
    );

    let files_scanned = files.len();

    let outcomes: Vec<Result<FileReport, ScanFailure>> = files
        .into_par_iter()
        .map(|path| match fs::read_to_string(&path) {
            Ok(content) => {
                let dependencies = extract_dependencies(&content);
                trace!("{}: {} dependencies", path.display(), dependencies.len());
                Ok(FileReport { path, dependencies })
            }
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Err(ScanFailure { path, error: e.to_string() })
            }
        })
        .collect();

    let mut result = ScanResult { files_scanned, ..Default::default() };
    for outcome in outcomes {
        match outcome {
            Ok(report) => result.reports.push(report),
            Err(failure) => result.failures.push(failure),
        }
    }

    info!(
        "Scan complete: {} reports, {} unreadable files",
        result.reports.len(),
        result.failures.len()
    );
    Ok(result)
}
