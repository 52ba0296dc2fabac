//! Core lint pipeline
//!
//! This module contains the extraction-and-validation pipeline:
//! - `extract`: finds math fragments between delimiter pairs
//! - `parser`: parses one fragment with mitex and enumerates its macros
//! - `validate`: checks every macro of the tree against the registry
//! - `check`: runs the pipeline over text blobs and files

pub mod check;
pub mod extract;
pub mod parser;
pub mod validate;

// Re-export main types and functions
pub use check::{check_files, check_text, CheckSummary};
pub use extract::{extract_fragments, extract_with, Delimiter, Fragment};
pub use parser::{macro_refs, parse_math, MacroRef, SyntaxNode};
pub use validate::{check_tree, validate_math};

#[cfg(not(target_arch = "wasm32"))]
pub use check::{check_roots, resolve_roots};
