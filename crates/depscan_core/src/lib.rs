//! Core logic for depscan, a static dependency scanner for
//! JavaScript/TypeScript trees.
//!
//! This crate provides the pieces the CLI composes into a scan:
//! - Extracting ES6 `import` / CommonJS `require()` specifiers from raw text
//! - Wildcard matching (`*`, `**`) for ignore patterns
//! - Filtering paths by ignore pattern and by extension
//! - Walking a directory tree in deterministic order
//!
//! Extraction is regex-over-text by design, not an AST: imports inside
//! comments or strings are extracted too, which is an accepted limitation.

mod constants;
mod extractor;
mod filter;
mod glob;
mod scanner;
mod types;
mod walker;

// Re-export public API
pub use constants::SCAN_EXTENSIONS;
pub use extractor::extract_dependencies;
pub use filter::{extension_of, filter_by_extension, filter_ignored, parse_ignore_patterns};
pub use glob::match_wildcard;
pub use scanner::{ScanConfig, run_scan};
pub use types::{FileReport, ScanFailure, ScanResult};
pub use walker::collect_files;
