//! Data layer - Static tables
//!
//! This module contains the compiled-in data used by the validator:
//! - The known math macro registry and bracket exceptions
//! - Argument counts for registered macros the default command spec lacks

pub mod arguments;
pub mod registry;

// Re-export commonly used items
pub use arguments::{required_arguments, EXTRA_COMMAND_ARITY, MATH_COMMAND_SPEC};
pub use registry::{
    is_allowed, is_bracket_exception, is_known_macro, BRACKET_EXCEPTIONS, KNOWN_MATH_MACROS,
};
