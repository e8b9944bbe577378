use serde::Serialize;
use std::path::PathBuf;

/// Dependencies found in one scanned file, in order of first appearance.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub dependencies: Vec<String>,
}

/// A file that could not be read. The scan continues without it.
#[derive(Debug, Clone)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub reports: Vec<FileReport>,
    pub failures: Vec<ScanFailure>,
    pub files_scanned: usize,
}
