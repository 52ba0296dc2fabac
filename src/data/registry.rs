//! Known math macro vocabulary
//!
//! The allow-list every macro name in a math fragment is checked against,
//! plus the bracket-like control symbols that are accepted without lookup.

use phf::{phf_set, Set};

/// Macro names (without the leading backslash) accepted inside math fragments
pub static KNOWN_MATH_MACROS: Set<&'static str> = phf_set! {
    // Greek letters
    "alpha", "beta", "gamma", "delta", "epsilon", "varepsilon", "zeta", "eta", "theta", "vartheta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "pi", "varpi", "rho", "varrho", "sigma", "varsigma", "tau", "upsilon", "phi",
    "varphi", "chi", "psi", "omega",
    "Gamma", "Delta", "Theta", "Lambda", "Xi", "Pi", "Sigma", "Upsilon", "Phi", "Psi", "Omega",

    // Binary operators
    "times", "div", "pm", "mp", "ast", "star", "circ", "bullet", "cdot", "cap", "cup", "sqcap", "sqcup",
    "vee", "wedge", "oplus", "ominus", "otimes", "oslash", "odot", "uplus", "bigcirc", "dagger", "ddagger",
    "amalg", "diamond", "bigtriangledown", "bigtriangleup", "triangleleft", "triangleright", "boxplus",
    "boxminus", "boxtimes", "boxdot",

    // Binary relations
    "leq", "le", "geq", "ge", "neq", "equiv", "sim", "simeq", "approx", "cong", "propto", "models",
    "perp", "parallel", "asymp", "bowtie", "vdash", "dashv", "in", "ni", "subset", "supset", "subseteq",
    "supseteq", "sqsubset", "sqsupset", "sqsubseteq", "sqsupseteq", "smile", "frown", "subsetneq", "supsetneq",
    "preceq", "succeq", "prec", "succ", "ll", "gg", "doteq", "circeq", "approxeq",

    // Set notation
    "emptyset", "infty", "nabla", "partial", "forall", "exists", "neg", "top", "bot", "setminus", "mid",
    "backslash", "cupdot", "capdot", "sqcupdot", "complement",

    // Functions
    "sin", "cos", "tan", "csc", "sec", "cot", "sinh", "cosh", "tanh", "arcsin", "arccos", "arctan",
    "ln", "log", "exp", "gcd", "lim", "sup", "inf", "det", "dim", "arg", "deg", "Pr", "min", "max", "limsup",
    "liminf", "mod", "bmod", "pmod",

    // Arrows
    "leftarrow", "rightarrow", "leftrightarrow", "Leftarrow", "Rightarrow", "Leftrightarrow",
    "uparrow", "downarrow", "updownarrow", "Uparrow", "Downarrow", "Updownarrow",
    "longrightarrow", "longleftarrow", "Longleftrightarrow", "hookrightarrow", "hookleftarrow", "mapsto",
    "leadsto", "nearrow", "searrow", "nwarrow", "swarrow", "rightsquigarrow", "twoheadrightarrow",
    "leftleftarrows", "rightrightarrows", "leftrightharpoons", "rightleftharpoons", "to",

    // Delimiters
    "langle", "rangle", "lceil", "rceil", "lfloor", "rfloor", "lbrace", "rbrace", "lbrack", "rbrack", "vert", "Vert",
    "left", "right", "big", "Big", "bigg", "Bigg", "biggl", "Biggl", "biggr", "Biggr", "Bigl", "Bigr", "bigl", "bigr",

    // Miscellaneous symbols
    "imath", "jmath", "ell", "Re", "Im", "wp", "aleph", "hbar", "mho",
    "Box", "Diamond", "angle", "measuredangle", "sphericalangle", "bigstar", "blacktriangle",
    "blacksquare", "triangledown", "triangle", "spadesuit", "heartsuit", "diamondsuit", "clubsuit",
    "flat", "natural", "sharp", "checkmark", "lightning", "topbot", "circledast", "circledcirc", "circleddash",

    // Accents
    "hat", "tilde", "bar", "vec", "dot", "ddot", "overline", "underline", "widehat", "widetilde", "acute", "grave",
    "breve", "check", "overbrace", "underbrace",

    // Fractions and roots
    "frac", "sqrt", "over", "dfrac", "tfrac", "binom", "cfrac", "tbinom", "dbinom",

    // Scripts
    "mathcal", "mathbb", "mathbf", "mathfrak", "mathsf", "mathtt", "mathit", "mathscr", "boldsymbol",
    "mathrm", "mathnormal", "mathbold", "mathboldsymbol", "mathbolditalic", "mathboldscr", "mathboldfrak",

    // Sum, Product, Limits
    "sum", "prod", "bigcup", "bigcap", "int", "oint", "bigoplus", "bigotimes", "bigwedge", "bigvee",
    "bigsqcup", "coprod", "bigodot", "biguplus",

    // Brackets and spacing
    "quad", "qquad", "hspace", "vspace", "negmedspace", "negthickspace",
    "hfill", "vfill", "phantom", "mathstrut", "noalign", "vphantom", "hphantom", "smash",

    // Text styles
    "textstyle", "displaystyle", "scriptstyle", "scriptscriptstyle",

    // Dots
    "dots", "cdots", "vdots", "ddots", "iddots", "dotsc", "dotsb", "dotso", "ldots", "adots",
    "cdotp", "ldotp",

    // Operators with limits
    "varlimsup",
    "varliminf", "varinjlim", "varprojlim",

    // Logicals and relations
    "land", "lor", "not", "implies", "iff", "therefore", "because",

    // Common mathematical sets (using mathbb)
    "R", "C", "Q", "Z", "N", "P", "H",

    // Miscellaneous
    "boxed", "text",
};

/// Bracket-like macro names that are always structurally valid
///
/// These come from control symbols such as `\{`, `\}` or `\|` and are never
/// looked up in [`KNOWN_MATH_MACROS`].
pub static BRACKET_EXCEPTIONS: Set<&'static str> = phf_set! {
    "[", "]", "{", "}", "(", ")", "|", "||",
};

/// Check whether `name` is a bracket exception
#[inline]
pub fn is_bracket_exception(name: &str) -> bool {
    BRACKET_EXCEPTIONS.contains(name)
}

/// Check whether `name` is a registered math macro
#[inline]
pub fn is_known_macro(name: &str) -> bool {
    KNOWN_MATH_MACROS.contains(name)
}

/// Check whether a macro name passes the vocabulary check
#[inline]
pub fn is_allowed(name: &str) -> bool {
    is_bracket_exception(name) || is_known_macro(name)
}
