//! The shell-directive output channel.
//!
//! Mutations speak to two audiences at once: a human reading the terminal
//! and the zsh wrapper function that `eval`s directive lines to update its
//! in-session hash table without a new shell. Directive lines carry a fixed
//! protocol prefix so the wrapper can pick them out of the stream; the
//! contract is one directive line per successful mutation.

use std::fmt;

use crate::format_record;

pub(crate) const DIRECTIVE_PREFIX: &str = "zshexec:";

/// One shell command for the invoking session to evaluate.
pub(crate) enum Directive {
    Hash { name: String, target: String },
    Unhash { name: String },
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The directive body is exactly the persisted record syntax.
            Directive::Hash { name, target } => write!(f, "{}", format_record(name, target)),
            Directive::Unhash { name } => write!(f, "unhash -d {name}"),
        }
    }
}

pub(crate) fn emit_directive(directive: &Directive) {
    println!("{DIRECTIVE_PREFIX} {directive}");
}
