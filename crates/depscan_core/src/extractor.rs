//! Regex-based extraction of import specifiers from JS/TS source text.
//!
//! This is deliberately not a parser: the patterns recognize import-like
//! syntax in raw text, so specifiers inside comments or string literals are
//! picked up too. That tradeoff is accepted; a future AST-based extractor
//! could replace this module without changing callers.

use log::trace;
use regex::Regex;
use std::sync::LazyLock;

/// `import foo from './foo'`, `import { a, b } from 'pkg'`, `import './fx'`.
/// The clause between `import` and the quoted source is any non-quote text,
/// so multi-line import statements match as well.
static ES_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"import\s+(?:[^"']*from\s*)?["']([^"']+)["']"#).unwrap());

/// `require('pkg')`, with optional whitespace around the parentheses.
static CJS_REQUIRE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"require\s*\(\s*["']([^"']+)["']\s*\)"#).unwrap());

/// Extracts the distinct module specifiers imported by `content`, in order
/// of first appearance. ES6 imports are collected before `require()` calls;
/// a specifier seen again later keeps its original position.
pub fn extract_dependencies(content: &str) -> Vec<String> {
    let mut specs: Vec<String> = Vec::new();

    for re in [&*ES_IMPORT, &*CJS_REQUIRE] {
        for caps in re.captures_iter(content) {
            if let Some(m) = caps.get(1) {
                let spec = m.as_str();
                if !specs.iter().any(|s| s == spec) {
                    trace!("Found import specifier: '{}'", spec);
                    specs.push(spec.to_string());
                }
            }
        }
    }

    specs
}
