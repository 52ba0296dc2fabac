//! Macro vocabulary validation
//!
//! Walks a parsed fragment depth-first and stops at the first macro whose
//! name is neither a bracket exception nor in the known-macro registry.
//! Groups, optional arguments and environment bodies are walked the same
//! way as macro arguments.

use super::parser::{macro_refs, parse_math, MacroRef, SyntaxNode};
use crate::data::registry::is_allowed;
use crate::utils::error::{FragmentError, UnknownMacroError};

/// Check every macro in a parsed fragment against the registry
pub fn check_tree(root: &SyntaxNode) -> Result<(), UnknownMacroError> {
    match macro_refs(root).into_iter().find(|m| !is_allowed(&m.name)) {
        Some(MacroRef { name, offset }) => Err(UnknownMacroError { name, offset }),
        None => Ok(()),
    }
}

/// Validate one math fragment
///
/// Parses the fragment, then checks its macro vocabulary. Structural
/// problems surface as [`FragmentError::Parse`], unknown macros as
/// [`FragmentError::UnknownMacro`].
///
/// ```rust
/// use mathlint::validate_math;
///
/// assert!(validate_math(r"\alpha + \beta = \gamma").is_ok());
///
/// let err = validate_math(r"\mathbf{\unknownmacro}").unwrap_err();
/// assert_eq!(err.unknown_macro(), Some("unknownmacro"));
/// ```
pub fn validate_math(fragment: &str) -> Result<(), FragmentError> {
    let tree = parse_math(fragment)?;
    check_tree(&tree)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ParseErrorKind;

    fn unknown(fragment: &str) -> Option<String> {
        validate_math(fragment)
            .unwrap_err()
            .unknown_macro()
            .map(str::to_string)
    }

    #[test]
    fn test_registered_macros() {
        let valid = [
            r"\alpha + \beta = \gamma",
            r"\frac{1}{2}",
            r"\sum_{i=1}^{n} i^2",
            r"\int_0^\infty e^{-x} dx",
            r"\sqrt[3]{x}",
            r"\mathbb{R} \to \mathbb{C}",
            r"\left\langle x, y \right\rangle",
            r"\lim_{n \to \infty} \frac{1}{n} = 0",
            r"\text{if } x \in \R",
            r"a \leq b \iff \neg (a > b)",
        ];
        for fragment in valid {
            assert!(
                validate_math(fragment).is_ok(),
                "{} should be valid",
                fragment
            );
        }
    }

    #[test]
    fn test_literal_only() {
        assert!(validate_math("x + y = 2").is_ok());
        assert!(validate_math("").is_ok());
        assert!(validate_math("   ").is_ok());
    }

    #[test]
    fn test_unknown_top_level() {
        assert_eq!(unknown(r"\foo(x)"), Some("foo".into()));
    }

    #[test]
    fn test_unknown_nested_in_argument() {
        assert_eq!(
            unknown(r"\mathbf{\unknownmacro}"),
            Some("unknownmacro".into())
        );
        assert_eq!(
            unknown(r"\frac{1}{\sqrt{\bogus}}"),
            Some("bogus".into())
        );
    }

    #[test]
    fn test_unknown_in_group_and_optional() {
        assert_eq!(unknown(r"x^{\nope}"), Some("nope".into()));
        assert_eq!(unknown(r"\sqrt[\nope]{x}"), Some("nope".into()));
    }

    #[test]
    fn test_unknown_in_environment() {
        assert_eq!(
            unknown(r"\begin{matrix} a & \nope \end{matrix}"),
            Some("nope".into())
        );
    }

    #[test]
    fn test_first_unknown_wins() {
        assert_eq!(unknown(r"\frac{\first}{\second} \third"), Some("first".into()));
        assert_eq!(unknown(r"\alpha \one \two"), Some("one".into()));
    }

    #[test]
    fn test_unknown_offset() {
        let err = validate_math(r"x + \foo").unwrap_err();
        assert_eq!(err.offset(), 4);
    }

    #[test]
    fn test_bracket_exceptions() {
        for fragment in [r"\{", r"\}", r"\[", r"\]", r"\(", r"\)", r"\|"] {
            assert!(
                validate_math(fragment).is_ok(),
                "{} should be valid",
                fragment
            );
        }
        assert!(validate_math(r"\left\{ x \right\}").is_ok());
    }

    #[test]
    fn test_control_symbols_rejected() {
        assert_eq!(unknown(r"a \\ b"), Some("\\".into()));
        assert_eq!(unknown(r"a\,b"), Some(",".into()));
    }

    #[test]
    fn test_parse_error_is_distinct() {
        match validate_math(r"\frac{1}{2") {
            Err(FragmentError::Parse(e)) => assert_eq!(e.kind, ParseErrorKind::UnclosedGroup),
            other => panic!("expected parse error, got {:?}", other),
        }
        // Structure is checked before vocabulary
        match validate_math(r"\foo}") {
            Err(FragmentError::Parse(e)) => {
                assert_eq!(e.kind, ParseErrorKind::UnmatchedCloseBrace)
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_tree_directly() {
        let tree = parse_math(r"\hat{\vec{x}}").unwrap();
        assert!(check_tree(&tree).is_ok());
    }

    #[test]
    fn test_row_separator_in_environment() {
        // Environment bodies are checked too, so `\\` is reported
        let fragment = r"\begin{aligned} a &= b \\ c &= d \end{aligned}";
        let err = validate_math(fragment).unwrap_err();
        assert_eq!(err.unknown_macro(), Some("\\"));
        assert_eq!(err.offset(), 23);
    }
}
