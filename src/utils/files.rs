//! File discovery for lint runs
//!
//! Command-line roots are split into search directories and file-name
//! patterns. Every pattern is then applied recursively under every
//! directory, the way `Path.rglob` works: a file matches when its trailing
//! path components match the pattern.
//!
//! Filesystem access is not available on `wasm32`, so the walking half of
//! this module is compiled out there.

#[cfg(not(target_arch = "wasm32"))]
use glob::{MatchOptions, Pattern};
#[cfg(not(target_arch = "wasm32"))]
use indexmap::IndexSet;
#[cfg(not(target_arch = "wasm32"))]
use log::{debug, warn};
use std::path::{Path, PathBuf};
#[cfg(not(target_arch = "wasm32"))]
use walkdir::WalkDir;

#[cfg(not(target_arch = "wasm32"))]
use crate::utils::error::{LintError, LintResult};

/// Split root arguments into existing directories and file-name patterns
pub fn split_roots<S: AsRef<str>>(args: &[S]) -> (Vec<PathBuf>, Vec<String>) {
    let mut directories = Vec::new();
    let mut patterns = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        if Path::new(arg).is_dir() {
            directories.push(PathBuf::from(arg));
        } else {
            patterns.push(arg.to_string());
        }
    }

    (directories, patterns)
}

/// A compiled file-name pattern
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FilePattern {
    pattern: Pattern,
    /// Number of path components the pattern spans
    depth: usize,
}

#[cfg(not(target_arch = "wasm32"))]
impl FilePattern {
    pub fn new(pattern: &str) -> LintResult<Self> {
        let mut trimmed = pattern.trim_start_matches("./").trim_end_matches('/');
        // Leading `**/` also matches zero directories
        while let Some(rest) = trimmed.strip_prefix("**/") {
            trimmed = rest;
        }
        if trimmed.is_empty() {
            return Err(LintError::pattern(pattern, "empty pattern"));
        }
        let compiled = Pattern::new(trimmed).map_err(|e| LintError::pattern(pattern, e))?;
        Ok(FilePattern {
            pattern: compiled,
            depth: trimmed.split('/').count(),
        })
    }

    /// Match against a path relative to the search root
    pub fn matches(&self, relative: &Path) -> bool {
        let components: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        if components.len() < self.depth {
            return false;
        }
        let tail = components[components.len() - self.depth..].join("/");
        self.pattern.matches_with(
            &tail,
            MatchOptions {
                case_sensitive: true,
                require_literal_separator: true,
                require_literal_leading_dot: false,
            },
        )
    }
}

/// Find every file under `directories` matching any of `patterns`
///
/// Files are returned per directory, per pattern, in file-name order.
/// A file matched more than once is kept at its first position.
#[cfg(not(target_arch = "wasm32"))]
pub fn find_files<S: AsRef<str>>(directories: &[PathBuf], patterns: &[S]) -> LintResult<Vec<PathBuf>> {
    let compiled = patterns
        .iter()
        .map(|p| FilePattern::new(p.as_ref()))
        .collect::<LintResult<Vec<_>>>()?;

    if directories.is_empty() {
        warn!("no search directories given, nothing to check");
    }
    if compiled.is_empty() {
        warn!("no file patterns given, nothing to check");
    }

    let mut found = IndexSet::new();

    for directory in directories {
        for pattern in &compiled {
            for entry in WalkDir::new(directory).sort_by_file_name() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        warn!("skipping unreadable entry: {}", e);
                        continue;
                    }
                };
                if !entry.file_type().is_file() {
                    continue;
                }
                let relative = entry
                    .path()
                    .strip_prefix(directory)
                    .unwrap_or(entry.path());
                if pattern.matches(relative) {
                    found.insert(entry.into_path());
                }
            }
        }
    }

    debug!("found {} file(s) to check", found.len());
    Ok(found.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("docs/guide")).unwrap();
        fs::write(root.join("README.md"), "top").unwrap();
        fs::write(root.join("docs/a.md"), "a").unwrap();
        fs::write(root.join("docs/guide/b.md"), "b").unwrap();
        fs::write(root.join("docs/guide/c.txt"), "c").unwrap();
        dir
    }

    fn names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| {
                f.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_split_roots() {
        let dir = tree();
        let root = dir.path().to_string_lossy().to_string();
        let (dirs, patterns) = split_roots(&[root.as_str(), "*.md"]);
        assert_eq!(dirs, vec![dir.path().to_path_buf()]);
        assert_eq!(patterns, vec!["*.md".to_string()]);
    }

    #[test]
    fn test_recursive_match() {
        let dir = tree();
        let files = find_files(&[dir.path().to_path_buf()], &["*.md"]).unwrap();
        assert_eq!(
            names(dir.path(), &files),
            vec!["README.md", "docs/a.md", "docs/guide/b.md"]
        );
    }

    #[test]
    fn test_multi_component_pattern() {
        let dir = tree();
        let files = find_files(&[dir.path().to_path_buf()], &["guide/*"]).unwrap();
        assert_eq!(
            names(dir.path(), &files),
            vec!["docs/guide/b.md", "docs/guide/c.txt"]
        );
    }

    #[test]
    fn test_duplicates_removed() {
        let dir = tree();
        let files = find_files(&[dir.path().to_path_buf()], &["*.md", "a.*"]).unwrap();
        assert_eq!(
            names(dir.path(), &files),
            vec!["README.md", "docs/a.md", "docs/guide/b.md"]
        );
    }

    #[test]
    fn test_no_patterns() {
        let dir = tree();
        let none: [&str; 0] = [];
        let files = find_files(&[dir.path().to_path_buf()], &none).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        let dir = tree();
        let err = find_files(&[dir.path().to_path_buf()], &["[*.md"]).unwrap_err();
        assert!(matches!(err, LintError::Pattern { .. }));
    }

    #[test]
    fn test_recursive_prefix_matches_root_files() {
        let dir = tree();
        let files = find_files(&[dir.path().to_path_buf()], &["**/*.md"]).unwrap();
        assert_eq!(
            names(dir.path(), &files),
            vec!["README.md", "docs/a.md", "docs/guide/b.md"]
        );

        let pattern = FilePattern::new("**/**/guide/*.txt").unwrap();
        assert!(pattern.matches(Path::new("docs/guide/c.txt")));
    }

    #[test]
    fn test_file_pattern_depth() {
        let pattern = FilePattern::new("*.md").unwrap();
        assert!(pattern.matches(Path::new("x/y/z.md")));
        assert!(!pattern.matches(Path::new("x/y/z.txt")));

        let nested = FilePattern::new("y/*.md").unwrap();
        assert!(nested.matches(Path::new("x/y/z.md")));
        assert!(!nested.matches(Path::new("z.md")));
    }
}
