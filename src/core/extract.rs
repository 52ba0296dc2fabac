//! Math fragment extraction
//!
//! Finds candidate math expressions in arbitrary text by matching the four
//! math-mode delimiter conventions. Each convention is applied over the whole
//! text on its own, in priority order, and the matches are pooled:
//!
//! ```text
//! $$...$$   block
//! $...$     inline
//! \[...\]   display
//! \(...\)   inline (paren form)
//! ```
//!
//! Matching is non-greedy and spans newlines. Text satisfying two conventions
//! (e.g. `$$a$$` also contains two empty `$...$` matches) is reported once
//! per convention.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::ops::Range;

lazy_static! {
    static ref BLOCK_MATH: Regex = Regex::new(r"(?s)\$\$(.*?)\$\$").unwrap();
    static ref INLINE_MATH: Regex = Regex::new(r"(?s)\$(.*?)\$").unwrap();
    static ref DISPLAY_MATH: Regex = Regex::new(r"(?s)\\\[(.*?)\\\]").unwrap();
    static ref PAREN_MATH: Regex = Regex::new(r"(?s)\\\((.*?)\\\)").unwrap();
}

/// Math-mode delimiter convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `$$...$$`
    Block,
    /// `$...$`
    Inline,
    /// `\[...\]`
    Display,
    /// `\(...\)`
    Paren,
}

impl Delimiter {
    /// All conventions in extraction priority order
    pub const ALL: [Delimiter; 4] = [
        Delimiter::Block,
        Delimiter::Inline,
        Delimiter::Display,
        Delimiter::Paren,
    ];

    /// Opening marker
    pub fn open(self) -> &'static str {
        match self {
            Delimiter::Block => "$$",
            Delimiter::Inline => "$",
            Delimiter::Display => r"\[",
            Delimiter::Paren => r"\(",
        }
    }

    /// Closing marker
    pub fn close(self) -> &'static str {
        match self {
            Delimiter::Block => "$$",
            Delimiter::Inline => "$",
            Delimiter::Display => r"\]",
            Delimiter::Paren => r"\)",
        }
    }

    /// Short lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Delimiter::Block => "block",
            Delimiter::Inline => "inline",
            Delimiter::Display => "display",
            Delimiter::Paren => "paren",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Delimiter::Block => &BLOCK_MATH,
            Delimiter::Inline => &INLINE_MATH,
            Delimiter::Display => &DISPLAY_MATH,
            Delimiter::Paren => &PAREN_MATH,
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A candidate math expression borrowed from its source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Text between the delimiters
    pub text: &'a str,
    /// Convention that matched
    pub delimiter: Delimiter,
    /// Byte range of `text` in the source
    pub span: Range<usize>,
}

impl<'a> Fragment<'a> {
    /// Whether the fragment has no content
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Extract all math fragments for a single delimiter convention, in document order
pub fn extract_with(text: &str, delimiter: Delimiter) -> Vec<Fragment<'_>> {
    delimiter
        .pattern()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| Fragment {
            text: m.as_str(),
            delimiter,
            span: m.range(),
        })
        .collect()
}

/// Extract all math fragments from `text`
///
/// Results are grouped by convention in [`Delimiter::ALL`] order; within one
/// convention they follow document order.
pub fn extract_fragments(text: &str) -> Vec<Fragment<'_>> {
    Delimiter::ALL
        .iter()
        .flat_map(|&delimiter| extract_with(text, delimiter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts<'a>(fragments: &[Fragment<'a>]) -> Vec<&'a str> {
        fragments.iter().map(|f| f.text).collect()
    }

    #[test]
    fn test_block_before_inline() {
        let fragments = extract_fragments("$$a$$ $b$");
        // Block pass finds `a`; the inline pass then sees `$$` pairs as empty fragments
        assert_eq!(texts(&fragments), vec!["a", "", "", "b"]);
        assert_eq!(fragments[0].delimiter, Delimiter::Block);
        assert_eq!(fragments[3].delimiter, Delimiter::Inline);
    }

    #[test]
    fn test_inline_is_non_greedy() {
        let fragments = extract_fragments("$a$b$c$");
        assert_eq!(texts(&fragments), vec!["a", "c"]);
    }

    #[test]
    fn test_unterminated_inline() {
        assert!(extract_fragments("$unterminated").is_empty());
        assert!(extract_with(r"\[ x + y", Delimiter::Display).is_empty());
    }

    #[test]
    fn test_display_and_paren() {
        let fragments = extract_fragments(r"see \[ x^2 \] and \(y\)");
        assert_eq!(texts(&fragments), vec![" x^2 ", "y"]);
        assert_eq!(fragments[0].delimiter, Delimiter::Display);
        assert_eq!(fragments[1].delimiter, Delimiter::Paren);
    }

    #[test]
    fn test_spans_newlines() {
        let fragments = extract_with("$$\na\n+b\n$$", Delimiter::Block);
        assert_eq!(texts(&fragments), vec!["\na\n+b\n"]);
    }

    #[test]
    fn test_pattern_order_not_document_order() {
        let fragments = extract_fragments(r"\(p\) then $q$");
        assert_eq!(texts(&fragments), vec!["q", "p"]);
    }

    #[test]
    fn test_empty_fragment() {
        let fragments = extract_with("$$", Delimiter::Inline);
        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].is_empty());
    }

    #[test]
    fn test_span_points_into_source() {
        let source = r"Result: $\alpha$";
        let fragments = extract_fragments(source);
        assert_eq!(fragments.len(), 1);
        let span = fragments[0].span.clone();
        assert_eq!(&source[span], r"\alpha");
    }

    #[test]
    fn test_no_math() {
        assert!(extract_fragments("plain prose, no math here").is_empty());
    }

    #[test]
    fn test_delimiter_markers() {
        assert_eq!(Delimiter::Display.open(), r"\[");
        assert_eq!(Delimiter::Paren.close(), r"\)");
        assert_eq!(Delimiter::Block.to_string(), "block");
    }
}
