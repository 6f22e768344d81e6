//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural
//! principles across the workspace:
//! - The catalog core stays free of UI frameworks
//! - No `unwrap()`/`expect()` in production code
//! - The core never writes to stdout/stderr directly
//!
//! The helpers here scan source text; they are deliberately line-based and
//! only need to be good enough for this codebase's formatting.

use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root (two levels above this package)
#[must_use]
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

/// All `.rs` files under `dir` (relative to the workspace root)
#[must_use]
pub fn rust_files(dir: &str) -> Vec<PathBuf> {
    let path = workspace_root().join(dir);
    walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Production lines of a source file as `(line_number, code)`
///
/// Stops at the first `#[cfg(test)]`, skips comment lines and strips
/// trailing `//` comments.
#[must_use]
pub fn production_lines(source: &str) -> Vec<(usize, String)> {
    source
        .lines()
        .enumerate()
        .take_while(|(_, line)| !line.trim_start().starts_with("#[cfg(test)]"))
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .map(|(idx, line)| {
            let code = line.split("//").next().unwrap_or(line);
            (idx + 1, code.to_string())
        })
        .collect()
}

/// Scan production code under `dirs` for lines matching `is_violation`
#[must_use]
pub fn find_violations<F>(dirs: &[&str], is_violation: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut violations = Vec::new();
    for dir in dirs {
        for path in rust_files(dir) {
            let Ok(source) = fs::read_to_string(&path) else {
                continue;
            };
            for (line_number, code) in production_lines(&source) {
                if is_violation(&code) {
                    violations.push(format!(
                        "{}:{} - {}",
                        path.display(),
                        line_number,
                        code.trim()
                    ));
                }
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_lines_stop_at_test_module() {
        let source = "fn a() {}\n// note\nlet x = y.unwrap(); // trailing\n#[cfg(test)]\nmod tests {}\n";
        let lines = production_lines(source);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], (1, "fn a() {}".to_string()));
        assert_eq!(lines[1], (3, "let x = y.unwrap(); ".to_string()));
    }

    #[test]
    fn test_doc_comments_are_skipped() {
        let source = "//! let c = builtin().unwrap();\n/// x.expect(\"y\")\nfn ok() {}\n";
        let lines = production_lines(source);
        assert_eq!(lines, vec![(3, "fn ok() {}".to_string())]);
    }

    #[test]
    fn test_workspace_root_has_manifest() {
        assert!(workspace_root().join("Cargo.toml").exists());
        assert!(!rust_files("catalog/core/src").is_empty());
    }
}
