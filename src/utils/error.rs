//! Error handling for mathlint
//!
//! Errors come in three layers:
//! - fragment level: [`ParseError`] and [`UnknownMacroError`], joined in [`FragmentError`]
//! - file level: [`InvalidExpressionError`], carrying the path and fragment text
//! - run level: [`LintError`], which also covers I/O and pattern problems

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

/// Structural problems found while parsing a math fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// `}` with no matching `{`
    UnmatchedCloseBrace,
    /// `{` never closed
    UnclosedGroup,
    /// Escape character at the very end of the fragment
    TrailingEscape,
    /// Text the tree parser could not place
    Syntax { text: String },
    /// A mandatory macro argument is absent
    MissingArgument { name: String },
    /// `\begin` or `\end` without a `{name}`
    MissingEnvironmentName,
    /// `\begin{name}` never closed
    UnclosedEnvironment { name: String },
    /// `\end{found}` closing `\begin{expected}`
    MismatchedEnvironment { expected: String, found: String },
    /// `\end{name}` with no open environment
    UnmatchedEnd { name: String },
    /// Groups, arguments or environments nested beyond the parser limit
    NestingTooDeep { limit: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnmatchedCloseBrace => write!(f, "unmatched closing brace '}}'"),
            ParseErrorKind::UnclosedGroup => write!(f, "unclosed brace '{{'"),
            ParseErrorKind::TrailingEscape => write!(f, "escape character '\\' at end of input"),
            ParseErrorKind::Syntax { text } => write!(f, "syntax error: unexpected '{}'", text),
            ParseErrorKind::MissingArgument { name } => {
                write!(f, "missing argument for '\\{}'", name)
            }
            ParseErrorKind::MissingEnvironmentName => {
                write!(f, "expected an environment name in braces")
            }
            ParseErrorKind::UnclosedEnvironment { name } => {
                write!(f, "unclosed environment '{}'", name)
            }
            ParseErrorKind::MismatchedEnvironment { expected, found } => {
                write!(
                    f,
                    "mismatched environment: opened '{}', closed '{}'",
                    expected, found
                )
            }
            ParseErrorKind::UnmatchedEnd { name } => write!(f, "unmatched \\end{{{}}}", name),
            ParseErrorKind::NestingTooDeep { limit } => {
                write!(f, "nesting deeper than {} levels", limit)
            }
        }
    }
}

/// A fragment whose structure is not well-formed math markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte offset inside the fragment
    pub offset: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error at offset {}: {}", self.offset, self.kind)
    }
}

impl Error for ParseError {}

/// A macro name that is neither registered nor a bracket exception
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMacroError {
    /// Macro name without the leading backslash
    pub name: String,
    /// Byte offset of the escape character inside the fragment
    pub offset: usize,
}

impl fmt::Display for UnknownMacroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown LaTeX macro: {}", self.name)
    }
}

impl Error for UnknownMacroError {}

/// Category of a fragment failure, as shown in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(feature = "json", feature = "wasm"),
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FailureKind {
    ParseError,
    UnknownMacro,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::ParseError => write!(f, "parse error"),
            FailureKind::UnknownMacro => write!(f, "unknown macro"),
        }
    }
}

/// Why a single fragment failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentError {
    Parse(ParseError),
    UnknownMacro(UnknownMacroError),
}

impl FragmentError {
    /// Byte offset of the problem inside the fragment
    pub fn offset(&self) -> usize {
        match self {
            FragmentError::Parse(e) => e.offset,
            FragmentError::UnknownMacro(e) => e.offset,
        }
    }

    /// Name of the unknown macro, if that is the failure
    pub fn unknown_macro(&self) -> Option<&str> {
        match self {
            FragmentError::UnknownMacro(e) => Some(&e.name),
            FragmentError::Parse(_) => None,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            FragmentError::Parse(_) => FailureKind::ParseError,
            FragmentError::UnknownMacro(_) => FailureKind::UnknownMacro,
        }
    }
}

impl fmt::Display for FragmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentError::Parse(e) => write!(f, "{}", e),
            FragmentError::UnknownMacro(e) => write!(f, "{}", e),
        }
    }
}

impl Error for FragmentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FragmentError::Parse(e) => Some(e),
            FragmentError::UnknownMacro(e) => Some(e),
        }
    }
}

impl From<ParseError> for FragmentError {
    fn from(err: ParseError) -> Self {
        FragmentError::Parse(err)
    }
}

impl From<UnknownMacroError> for FragmentError {
    fn from(err: UnknownMacroError) -> Self {
        FragmentError::UnknownMacro(err)
    }
}

/// An invalid fragment, located in its source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidExpressionError {
    pub path: PathBuf,
    /// Full text of the offending fragment
    pub fragment: String,
    /// Line of the problem in the source file (1-indexed)
    pub line: usize,
    /// Column of the problem in the source file (1-indexed)
    pub column: usize,
    pub cause: FragmentError,
}

impl fmt::Display for InvalidExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid LaTeX expression in {}: \n\n{}",
            self.path.display(),
            self.fragment
        )
    }
}

impl Error for InvalidExpressionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}

/// Run-level error
#[derive(Debug, Clone)]
pub enum LintError {
    /// A file or directory could not be read
    Io { path: PathBuf, message: String },
    /// A file-name pattern is not a valid glob
    Pattern { pattern: String, message: String },
    /// A fragment failed validation
    InvalidExpression(InvalidExpressionError),
}

impl LintError {
    pub fn io(path: impl AsRef<Path>, err: impl fmt::Display) -> Self {
        LintError::Io {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    pub fn pattern(pattern: impl Into<String>, err: impl fmt::Display) -> Self {
        LintError::Pattern {
            pattern: pattern.into(),
            message: err.to_string(),
        }
    }

    /// Whether this is a validation failure rather than an environment problem
    pub fn is_invalid_expression(&self) -> bool {
        matches!(self, LintError::InvalidExpression(_))
    }
}

impl fmt::Display for LintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintError::Io { path, message } => {
                write!(f, "IO error on {}: {}", path.display(), message)
            }
            LintError::Pattern { pattern, message } => {
                write!(f, "Invalid file pattern '{}': {}", pattern, message)
            }
            LintError::InvalidExpression(e) => write!(f, "{}", e),
        }
    }
}

impl Error for LintError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LintError::InvalidExpression(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidExpressionError> for LintError {
    fn from(err: InvalidExpressionError) -> Self {
        LintError::InvalidExpression(err)
    }
}

/// Result type for run-level operations
pub type LintResult<T> = Result<T, LintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_macro_display() {
        let err = UnknownMacroError {
            name: "foo".to_string(),
            offset: 0,
        };
        assert_eq!(err.to_string(), "Unknown LaTeX macro: foo");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new(
            ParseErrorKind::MissingArgument {
                name: "frac".to_string(),
            },
            5,
        );
        let msg = err.to_string();
        assert!(msg.contains("offset 5"));
        assert!(msg.contains("\\frac"));
    }

    #[test]
    fn test_invalid_expression_display() {
        let err = InvalidExpressionError {
            path: PathBuf::from("docs/index.md"),
            fragment: r"\foo(x)".to_string(),
            line: 3,
            column: 2,
            cause: FragmentError::UnknownMacro(UnknownMacroError {
                name: "foo".to_string(),
                offset: 0,
            }),
        };
        let msg = err.to_string();
        assert!(msg.contains("docs/index.md"));
        assert!(msg.contains(r"\foo(x)"));
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("Unknown LaTeX macro: foo".to_string())
        );
    }

    #[test]
    fn test_fragment_error_accessors() {
        let unknown = FragmentError::from(UnknownMacroError {
            name: "bar".to_string(),
            offset: 7,
        });
        assert_eq!(unknown.unknown_macro(), Some("bar"));
        assert_eq!(unknown.offset(), 7);
        assert_eq!(unknown.kind(), FailureKind::UnknownMacro);

        let parse = FragmentError::from(ParseError::new(ParseErrorKind::UnclosedGroup, 1));
        assert_eq!(parse.unknown_macro(), None);
        assert_eq!(parse.kind(), FailureKind::ParseError);
    }

    #[test]
    fn test_syntax_error_display() {
        let kind = ParseErrorKind::Syntax {
            text: "&".to_string(),
        };
        assert_eq!(kind.to_string(), "syntax error: unexpected '&'");
    }

    #[test]
    fn test_lint_error_io() {
        let err = LintError::io("missing.md", "No such file or directory");
        assert!(err.to_string().contains("missing.md"));
        assert!(!err.is_invalid_expression());
    }
}
