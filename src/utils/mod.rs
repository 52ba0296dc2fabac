//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - File discovery for lint runs
//! - Run reports and their rendering

pub mod diagnostics;
pub mod error;
pub mod files;

// Re-export commonly used items
pub use diagnostics::{compute_line_offsets, format_report, offset_to_location, Report};
pub use error::{
    FailureKind, FragmentError, InvalidExpressionError, LintError, LintResult, ParseError,
    ParseErrorKind, UnknownMacroError,
};
pub use files::split_roots;

#[cfg(not(target_arch = "wasm32"))]
pub use files::{find_files, FilePattern};
