//! Document-level checking
//!
//! Glues extraction and validation together: every fragment of a text blob
//! is validated in extraction order and the first failure is reported with
//! the path and fragment text. Across files the run stops at the first
//! invalid file.

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use super::extract::extract_fragments;
use super::validate::validate_math;
use crate::utils::diagnostics::{compute_line_offsets, offset_to_location};
use crate::utils::error::{InvalidExpressionError, LintError, LintResult};

/// Totals of a successful run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    any(feature = "json", feature = "wasm"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CheckSummary {
    /// Files read
    pub files: usize,
    /// Fragments validated
    pub fragments: usize,
}

/// Validate every math fragment in one text blob
///
/// `path` only identifies the blob in the error. Returns the number of
/// fragments checked.
pub fn check_text(path: impl AsRef<Path>, content: &str) -> Result<usize, InvalidExpressionError> {
    let path = path.as_ref();
    let fragments = extract_fragments(content);
    debug!("{}: {} math fragment(s)", path.display(), fragments.len());

    for fragment in &fragments {
        if let Err(cause) = validate_math(fragment.text) {
            let offset = fragment.span.start + cause.offset();
            let (line, column) = offset_to_location(offset, &compute_line_offsets(content));
            debug!(
                "{}:{}:{}: {} fragment rejected: {}",
                path.display(),
                line,
                column,
                fragment.delimiter,
                cause
            );
            return Err(InvalidExpressionError {
                path: path.to_path_buf(),
                fragment: fragment.text.to_string(),
                line,
                column,
                cause,
            });
        }
    }

    Ok(fragments.len())
}

/// Read and check each file in order, stopping at the first failure
pub fn check_files<P: AsRef<Path>>(paths: &[P]) -> LintResult<CheckSummary> {
    let mut summary = CheckSummary::default();

    for path in paths {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LintError::io(path, e))?;
        summary.fragments += check_text(path, &content)?;
        summary.files += 1;
    }

    info!(
        "checked {} fragment(s) in {} file(s)",
        summary.fragments, summary.files
    );
    Ok(summary)
}

/// Resolve root arguments to files and check them
///
/// Arguments naming a directory are search roots; all others are file-name
/// patterns applied under every root.
#[cfg(not(target_arch = "wasm32"))]
pub fn check_roots<S: AsRef<str>>(args: &[S]) -> LintResult<CheckSummary> {
    let files = resolve_roots(args)?;
    check_files(&files)
}

/// Resolve root arguments to the list of files that would be checked
#[cfg(not(target_arch = "wasm32"))]
pub fn resolve_roots<S: AsRef<str>>(args: &[S]) -> LintResult<Vec<PathBuf>> {
    let (directories, patterns) = crate::utils::files::split_roots(args);
    crate::utils::files::find_files(&directories, &patterns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FragmentError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_text() {
        let count = check_text("doc.md", r"Result: $\alpha + \beta = \gamma$").unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_no_math() {
        assert_eq!(check_text("doc.md", "just prose").unwrap(), 0);
    }

    #[test]
    fn test_unknown_macro_reported() {
        let err = check_text("notes.md", r"We have $\foo(x)$ here").unwrap_err();
        assert_eq!(err.path, PathBuf::from("notes.md"));
        assert_eq!(err.fragment, r"\foo(x)");
        assert_eq!(err.cause.unknown_macro(), Some("foo"));
        assert_eq!((err.line, err.column), (1, 10));
    }

    #[test]
    fn test_location_on_later_line() {
        let text = "intro\n\n$$\n\\frac{1}{\\nope}\n$$\n";
        let err = check_text("a.md", text).unwrap_err();
        assert_eq!(err.cause.unknown_macro(), Some("nope"));
        assert_eq!((err.line, err.column), (4, 10));
    }

    #[test]
    fn test_parse_error_reported() {
        let err = check_text("a.md", r"$\frac{1}{2$").unwrap_err();
        assert!(matches!(err.cause, FragmentError::Parse(_)));
        assert_eq!(err.fragment, r"\frac{1}{2");
    }

    #[test]
    fn test_first_failing_fragment() {
        // Block pass runs before the inline pass
        let text = r"$\first$ and $$\second$$";
        let err = check_text("a.md", text).unwrap_err();
        assert_eq!(err.cause.unknown_macro(), Some("second"));
    }

    #[test]
    fn test_empty_fragment_counts() {
        assert_eq!(check_text("a.md", "$$").unwrap(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = check_files(&["/definitely/not/here.md"]).unwrap_err();
        assert!(matches!(err, LintError::Io { .. }));
    }
}
