//! Wildcard matching for ignore patterns.
//!
//! Supports `*` (any run of characters within one path segment) and `**`
//! (any run of characters, crossing `/` freely). A pattern that starts with
//! `**/` treats the leading directory part of the path as optional, so
//! `**/*.ts` matches both `foo.ts` and `a/b/foo.ts`. Matching is anchored
//! to the whole string and case-sensitive. Character classes, braces and `?`
//! are not supported.

use dashmap::DashMap;
use log::{trace, warn};
use regex::Regex;
use std::sync::LazyLock;

/// Compiled patterns, keyed by the original glob text. Matching runs from
/// rayon worker threads, so the cache must be concurrent.
static COMPILED: LazyLock<DashMap<String, Regex>> = LazyLock::new(DashMap::new);

/// Returns true when `path` matches the wildcard `pattern`.
pub fn match_wildcard(path: &str, pattern: &str) -> bool {
    if let Some(re) = COMPILED.get(pattern) {
        return re.is_match(path);
    }

    let translated = glob_to_regex(pattern);
    trace!("Translated glob '{}' to regex '{}'", pattern, translated);

    let re = match Regex::new(&translated) {
        Ok(re) => re,
        Err(e) => {
            // Unreachable for escaped input, but a bad pattern must not
            // abort the scan.
            warn!("Could not compile glob pattern '{}': {}", pattern, e);
            return false;
        }
    };

    let hit = re.is_match(path);
    COMPILED.insert(pattern.to_string(), re);
    hit
}

/// Translates a glob pattern into an anchored regular expression.
fn glob_to_regex(pattern: &str) -> String {
    // A leading `**/` makes the whole leading directory part optional.
    let (optional_prefix, rest) = match pattern.strip_prefix("**/") {
        Some(rest) => (true, rest),
        None => (false, pattern),
    };

    // Mark `**` before escaping so its `*`s are not treated as single stars.
    // NUL cannot appear in a pattern, so it is a safe marker.
    let marked = rest.replace("**", "\u{0}");

    let mut translated = String::with_capacity(marked.len() + 16);
    translated.push('^');
    if optional_prefix {
        translated.push_str("(?:.*/)?");
    }
    for ch in marked.chars() {
        match ch {
            '.' | '+' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']' | '\\' => {
                translated.push('\\');
                translated.push(ch);
            }
            '*' => translated.push_str("[^/]*"),
            '\u{0}' => translated.push_str(".*"),
            _ => translated.push(ch),
        }
    }
    translated.push('$');
    translated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_star_within_segment() {
        assert!(match_wildcard("src/index.ts", "src/*.ts"));
        assert!(match_wildcard("file.txt", "*.txt"));
    }

    #[test]
    fn test_single_star_does_not_cross_slash() {
        assert!(!match_wildcard("src/test/index.ts", "src/*.ts"));
        assert!(!match_wildcard("folder/file.txt", "*.txt"));
    }

    #[test]
    fn test_double_star_crosses_slash() {
        assert!(match_wildcard("src/test/index.ts", "src/**/*.ts"));
        assert!(match_wildcard("a/b/c/d.js", "a/**"));
    }

    #[test]
    fn test_leading_double_star_makes_prefix_optional() {
        assert!(match_wildcard("foo.ts", "**/*.ts"));
        assert!(match_wildcard("a/b/foo.ts", "**/*.ts"));
        assert!(match_wildcard("node_modules/lib.js", "**/node_modules/**"));
        assert!(match_wildcard("pkg/node_modules/sub/lib.js", "**/node_modules/**"));
    }

    #[test]
    fn test_basename_prefix_pattern() {
        assert!(match_wildcard("jest.config.js", "jest*"));
        assert!(!match_wildcard("src/jest.config.js", "jest*"));
    }

    #[test]
    fn test_match_is_anchored() {
        // No substring semantics: the pattern must span the whole path.
        assert!(!match_wildcard("src/index.ts", "index"));
        assert!(!match_wildcard("src/index.ts", "*.t"));
        assert!(!match_wildcard("xsrc/index.ts", "src/*.ts"));
    }

    #[test]
    fn test_literal_pattern_requires_exact_match() {
        assert!(match_wildcard("src/ignore.ts", "src/ignore.ts"));
        assert!(!match_wildcard("src/ignore.tsx", "src/ignore.ts"));
    }

    #[test]
    fn test_dot_is_literal_not_wildcard() {
        assert!(!match_wildcard("fileXts", "file.ts"));
    }

    #[test]
    fn test_regex_metacharacters_are_escaped() {
        assert!(match_wildcard("a+b(c)[d].js", "a+b(c)[d].js"));
        assert!(!match_wildcard("ab.js", "a+b.js"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!match_wildcard("SRC/index.ts", "src/*.ts"));
        assert!(!match_wildcard("file.TS", "*.ts"));
    }

    #[test]
    fn test_bare_double_star_matches_everything() {
        assert!(match_wildcard("a/b/c.ts", "**"));
        assert!(match_wildcard("c.ts", "**"));
    }

    #[test]
    fn test_star_matches_empty_sequence() {
        assert!(match_wildcard("file.ts", "file*.ts"));
        assert!(match_wildcard(".ts", "*.ts"));
    }

    #[test]
    fn test_repeated_pattern_uses_cache() {
        // Same pattern twice must give the same answer through the cache.
        assert!(match_wildcard("src/a.ts", "src/*.ts"));
        assert!(match_wildcard("src/b.ts", "src/*.ts"));
        assert!(!match_wildcard("src/c/d.ts", "src/*.ts"));
    }
}
