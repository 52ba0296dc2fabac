//! # mathlint
//!
//! Lint embedded LaTeX math in documentation before it is published.
//!
//! ## Features
//!
//! - **Fragment extraction**: finds `$$...$$`, `$...$`, `\[...\]` and `\(...\)` math
//! - **Structural parsing**: parses fragments with `mitex-parser` and rejects
//!   unbalanced groups, dangling escapes, missing arguments and mismatched
//!   environments
//! - **Vocabulary check**: every macro, however deeply nested, must be in the
//!   known math macro list
//! - **Fail-fast**: the first invalid fragment ends the run with its file and text
//! - **WASM Support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Single Fragments
//!
//! ```rust
//! use mathlint::{validate_math, FragmentError};
//!
//! assert!(validate_math(r"\frac{\alpha}{\beta}").is_ok());
//!
//! match validate_math(r"\frac{1}{\foo}") {
//!     Err(FragmentError::UnknownMacro(e)) => assert_eq!(e.name, "foo"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```
//!
//! ### Whole Documents
//!
//! ```rust
//! use mathlint::{check_text, extract_fragments};
//!
//! let doc = "Euler: $e^{i\\pi} + 1 = 0$ and \\[\\sum_{n=1}^\\infty \\frac{1}{n^2}\\]";
//! assert_eq!(extract_fragments(doc).len(), 2);
//! assert_eq!(check_text("euler.md", doc).unwrap(), 2);
//! ```

/// Core lint pipeline
pub mod core;

/// Data layer - compiled-in macro tables
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core functions
pub use crate::core::{
    check_files, check_text, check_tree, extract_fragments, extract_with, macro_refs, parse_math,
    validate_math, CheckSummary, Delimiter, Fragment, MacroRef, SyntaxNode,
};

#[cfg(not(target_arch = "wasm32"))]
pub use crate::core::{check_roots, resolve_roots};

// Re-export data tables
pub use data::registry;
pub use data::{is_allowed, BRACKET_EXCEPTIONS, KNOWN_MATH_MACROS};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{
    FailureKind, FragmentError, InvalidExpressionError, LintError, LintResult, ParseError,
    ParseErrorKind, UnknownMacroError,
};
pub use utils::files;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_valid() {
        assert_eq!(
            check_text("result.md", r"Result: $\alpha + \beta = \gamma$").unwrap(),
            1
        );
    }

    #[test]
    fn test_end_to_end_unknown() {
        let err = check_text("bad.md", r"$\foo(x)$").unwrap_err();
        assert_eq!(err.cause.unknown_macro(), Some("foo"));
        assert_eq!(err.fragment, r"\foo(x)");
    }
}
