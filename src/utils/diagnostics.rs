//! Run reports
//!
//! Turns the outcome of a lint run into a [`Report`] and renders it either
//! for a terminal or as JSON.
//!
//! ## Example
//!
//! ```rust
//! use mathlint::diagnostics::{format_report, Report};
//! use mathlint::{check_text, LintError};
//!
//! let err: LintError = check_text("notes.md", r"$\foo(x)$").unwrap_err().into();
//! let report = Report::from(&err);
//! assert!(format_report(&report, false).contains("notes.md:1:2"));
//! ```

use std::fmt;

use crate::core::check::CheckSummary;
use crate::utils::error::{FailureKind, LintError, LintResult};

/// Compute byte offsets for each line start
pub fn compute_line_offsets(input: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in input.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Convert byte offset to line and column (both 1-indexed)
pub fn offset_to_location(offset: usize, line_offsets: &[usize]) -> (usize, usize) {
    let line = line_offsets
        .iter()
        .position(|&o| o > offset)
        .unwrap_or(line_offsets.len())
        - 1;

    let column = offset - line_offsets.get(line).unwrap_or(&0) + 1;
    (line + 1, column)
}

/// Outcome of a run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    any(feature = "json", feature = "wasm"),
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "status", rename_all = "snake_case")
)]
pub enum Report {
    /// Every fragment of every file is valid
    Ok { files: usize, fragments: usize },
    /// A fragment failed validation
    Invalid {
        path: String,
        line: usize,
        column: usize,
        fragment: String,
        kind: FailureKind,
        message: String,
        #[cfg_attr(any(feature = "json", feature = "wasm"), serde(rename = "macro"))]
        macro_name: Option<String>,
    },
    /// The run could not complete (I/O, bad pattern)
    Error { message: String },
}

impl Report {
    pub fn is_ok(&self) -> bool {
        matches!(self, Report::Ok { .. })
    }

    /// Process exit code: 0 ok, 1 invalid math, 2 run error
    pub fn exit_code(&self) -> i32 {
        match self {
            Report::Ok { .. } => 0,
            Report::Invalid { .. } => 1,
            Report::Error { .. } => 2,
        }
    }
}

impl From<&CheckSummary> for Report {
    fn from(summary: &CheckSummary) -> Self {
        Report::Ok {
            files: summary.files,
            fragments: summary.fragments,
        }
    }
}

impl From<&LintError> for Report {
    fn from(err: &LintError) -> Self {
        match err {
            LintError::InvalidExpression(e) => Report::Invalid {
                path: e.path.display().to_string(),
                line: e.line,
                column: e.column,
                fragment: e.fragment.clone(),
                kind: e.cause.kind(),
                message: e.cause.to_string(),
                macro_name: e.cause.unknown_macro().map(str::to_string),
            },
            other => Report::Error {
                message: other.to_string(),
            },
        }
    }
}

impl From<&LintResult<CheckSummary>> for Report {
    fn from(result: &LintResult<CheckSummary>) -> Self {
        match result {
            Ok(summary) => summary.into(),
            Err(err) => err.into(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: error: Invalid LaTeX expression in path
        //           --> path:line:column
        //            |
        //            | fragment
        //            = cause: message
        match self {
            Report::Ok { files, fragments } => write!(
                f,
                "ok: {} math fragment{} in {} file{}",
                fragments,
                plural(*fragments),
                files,
                plural(*files)
            ),
            Report::Invalid {
                path,
                line,
                column,
                fragment,
                message,
                macro_name,
                ..
            } => {
                write!(f, "error: Invalid LaTeX expression in {}", path)?;
                write!(f, "\n  --> {}:{}:{}", path, line, column)?;
                write!(f, "\n   |")?;
                for source_line in fragment.lines() {
                    write!(f, "\n   | {}", source_line)?;
                }
                write!(f, "\n   = cause: {}", message)?;
                if let Some(name) = macro_name {
                    write!(
                        f,
                        "\n   = help: '\\{}' is not in the known math macro list",
                        name
                    )?;
                }
                Ok(())
            }
            Report::Error { message } => write!(f, "error: {}", message),
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Format a report for terminal output
pub fn format_report(report: &Report, use_color: bool) -> String {
    if !use_color {
        return report.to_string();
    }

    let color = match report {
        Report::Ok { .. } => "\x1b[32m",      // Green
        Report::Invalid { .. } => "\x1b[31m", // Red
        Report::Error { .. } => "\x1b[33m",   // Yellow
    };
    format!("{}{}\x1b[0m", color, report)
}

/// Format a report as pretty-printed JSON
#[cfg(feature = "json")]
pub fn report_to_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
