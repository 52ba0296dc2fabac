//! Math fragment parser
//!
//! Fragments are parsed with `mitex-parser` into a lossless syntax tree.
//!
//! ## Architecture
//!
//! ```text
//! Fragment → balance check → mitex_parser::parse → syntax check → SyntaxNode
//! ```
//!
//! The mitex parser recovers from malformed input, so the fragment is first
//! checked for balanced braces and environments ([`structure`]). After
//! parsing, error tokens and commands with too few arguments are rejected.
//! Argument shapes come from `mitex-spec-gen`'s default spec merged with
//! [`crate::data::arguments::MATH_COMMAND_SPEC`].

pub mod structure;

pub use mitex_parser::syntax::SyntaxNode;

use fxhash::FxHashMap;
use lazy_static::lazy_static;
use mitex_parser::syntax::{CmdItem, SyntaxElement, SyntaxKind};
use mitex_parser::CommandSpec;
use mitex_spec_gen::DEFAULT_SPEC;
use rowan::ast::AstNode;

use crate::data::arguments::{required_arguments, MATH_COMMAND_SPEC};
use crate::utils::error::{ParseError, ParseErrorKind};

/// Maximum nesting of groups and environments
pub const MAX_DEPTH: usize = 256;

/// Command names that only delimit structure and are never looked up
const STRUCTURAL_COMMANDS: [&str; 2] = ["begin", "end"];

lazy_static! {
    /// Merged command specification for parsing
    static ref MERGED_SPEC: CommandSpec = {
        let mut commands: FxHashMap<String, _> = DEFAULT_SPEC
            .items()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();

        for (k, v) in MATH_COMMAND_SPEC.items() {
            commands.insert(k.to_string(), v.clone());
        }

        CommandSpec::new(commands)
    };
}

/// One macro invocation found in a parsed fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroRef {
    /// Name without the leading backslash
    pub name: String,
    /// Byte offset of the backslash
    pub offset: usize,
}

/// Parse a math fragment into its syntax tree
///
/// Fails on structural problems only; macro names are not checked here.
pub fn parse_math(input: &str) -> Result<SyntaxNode, ParseError> {
    structure::check_balance(input)?;
    let tree = mitex_parser::parse(input, MERGED_SPEC.clone());
    check_syntax(&tree)?;
    Ok(tree)
}

/// Every macro invocation in the tree, in document order
///
/// Arguments, groups, optional arguments and environment bodies are all
/// included. `\begin` and `\end` are not.
pub fn macro_refs(root: &SyntaxNode) -> Vec<MacroRef> {
    root.descendants_with_tokens()
        .filter_map(|elem| macro_ref(&elem))
        .collect()
}

fn macro_ref(elem: &SyntaxElement) -> Option<MacroRef> {
    let text = match elem {
        SyntaxElement::Node(node) => match node.kind() {
            SyntaxKind::ItemCmd => CmdItem::cast(node.clone())?.name_tok()?.text().to_string(),
            // `\\`
            SyntaxKind::ItemNewLine => node.first_token()?.text().to_string(),
            _ => return None,
        },
        SyntaxElement::Token(token) => {
            if named_by_parent(elem) {
                return None;
            }
            match token.kind() {
                SyntaxKind::TokenCommandSym
                | SyntaxKind::TokenBeginMath
                | SyntaxKind::TokenEndMath
                | SyntaxKind::ClauseCommandName
                | SyntaxKind::ItemNewLine => token.text().to_string(),
                _ => return None,
            }
        }
    };

    let name = text.strip_prefix('\\')?;
    if name.is_empty() || STRUCTURAL_COMMANDS.contains(&name) {
        return None;
    }

    Some(MacroRef {
        name: name.to_string(),
        offset: elem.text_range().start().into(),
    })
}

/// Name tokens already reported through their command node
fn named_by_parent(elem: &SyntaxElement) -> bool {
    elem.parent().map_or(false, |parent| {
        matches!(parent.kind(), SyntaxKind::ItemCmd | SyntaxKind::ItemNewLine)
    })
}

/// Reject error tokens and commands missing mandatory arguments
fn check_syntax(root: &SyntaxNode) -> Result<(), ParseError> {
    for elem in root.descendants_with_tokens() {
        match elem.kind() {
            SyntaxKind::TokenError => {
                let text = match &elem {
                    SyntaxElement::Token(t) => t.text().to_string(),
                    SyntaxElement::Node(n) => n.text().to_string(),
                };
                return Err(ParseError::new(
                    ParseErrorKind::Syntax { text },
                    elem.text_range().start().into(),
                ));
            }
            SyntaxKind::ItemCmd => {
                if let SyntaxElement::Node(node) = &elem {
                    if let Some(cmd) = CmdItem::cast(node.clone()) {
                        check_arguments(&cmd)?;
                    }
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn check_arguments(cmd: &CmdItem) -> Result<(), ParseError> {
    let Some(name_tok) = cmd.name_tok() else {
        return Ok(());
    };
    let name = name_tok.text().trim_start_matches('\\');
    let Some(required) = MERGED_SPEC.get(name).and_then(required_arguments) else {
        return Ok(());
    };

    let given = cmd
        .syntax()
        .children()
        .filter(|c| c.kind() == SyntaxKind::ClauseArgument)
        .count();

    if given < required {
        return Err(ParseError::new(
            ParseErrorKind::MissingArgument {
                name: name.to_string(),
            },
            cmd.syntax().text_range().end().into(),
        ));
    }
    Ok(())
}
