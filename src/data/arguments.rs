//! Local command specification for math parsing
//!
//! `mitex-spec-gen`'s default specification already knows the argument
//! shapes of the standard math commands. This table adds registered macros
//! it does not cover, so the parser attaches their arguments to them.

use fxhash::FxHashMap;
use lazy_static::lazy_static;
use mitex_spec::{ArgPattern, ArgShape, CmdShape, CommandSpec, CommandSpecItem};
use phf::phf_map;

/// Mandatory argument counts of registered macros outside the default spec
pub static EXTRA_COMMAND_ARITY: phf::Map<&'static str, u8> = phf_map! {
    "mathbold" => 1,
    "mathboldsymbol" => 1,
    "mathbolditalic" => 1,
    "mathboldscr" => 1,
    "mathboldfrak" => 1,
    "mathnormal" => 1,
    "boxed" => 1,
    "pmod" => 1,
    "tbinom" => 2,
    "dbinom" => 2,
};

lazy_static! {
    /// Local command spec, merged over the default one by the parser
    pub static ref MATH_COMMAND_SPEC: CommandSpec = {
        let commands: FxHashMap<String, _> = EXTRA_COMMAND_ARITY
            .entries()
            .map(|(name, len)| (name.to_string(), fixed_arity(*len)))
            .collect();

        CommandSpec::new(commands)
    };
}

fn fixed_arity(len: u8) -> CommandSpecItem {
    CommandSpecItem::Cmd(CmdShape {
        args: ArgShape::Right {
            pattern: ArgPattern::FixedLenTerm { len },
        },
        alias: None,
    })
}

/// Number of mandatory arguments a command shape demands
///
/// Only fixed and ranged term patterns have a lower bound; glob, greedy and
/// infix shapes return `None`.
pub fn required_arguments(item: &CommandSpecItem) -> Option<usize> {
    match item {
        CommandSpecItem::Cmd(shape) => match &shape.args {
            ArgShape::Right {
                pattern: ArgPattern::FixedLenTerm { len, .. },
            } => Some(*len as usize),
            ArgShape::Right {
                pattern: ArgPattern::RangeLenTerm { min, .. },
            } => Some(*min as usize),
            _ => None,
        },
        _ => None,
    }
}
