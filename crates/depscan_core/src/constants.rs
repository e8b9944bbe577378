//! Constants for file extension handling.
//!
//! Extensions are kept dot-inclusive (`.ts`, not `ts`) because the extension
//! filter compares them verbatim against the suffix of a path's final
//! segment.

/// File extensions scanned for dependencies.
pub const SCAN_EXTENSIONS: &[&str] = &[
    ".js", // JavaScript
    ".ts", // TypeScript
];
