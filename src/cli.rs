use std::path::PathBuf;

use clap::{Parser, Subcommand};

const AFTER_HELP: &str = "\
Examples:
  bom show                  shows all bookmarks
  bom add foo /over/there/  creates the bookmark ~foo for the directory /over/there/
  bom add foo               creates the bookmark ~foo for the current directory
  bom add /over/there/      creates the bookmark ~there (the last component) for /over/there/
  bom add                   bookmarks the current directory under its last path component
  bom rm foo bar            removes the bookmarks ~foo and ~bar

Write bookmark names without the leading tilde ('bom add foo', not
'bom add ~foo'); the tilde is expanded by the zsh before bom ever runs.";

#[derive(Parser)]
#[command(name = "bom")]
#[command(about = "A simple bookmark manager for the zsh", long_about = None)]
#[command(version)]
#[command(arg_required_else_help = true)]
#[command(after_help = AFTER_HELP)]
pub(crate) struct Cli {
    /// Startup file holding the bookmarks (defaults to BOM_ZSHRC or ~/.zshrc)
    #[arg(long, global = true)]
    pub(crate) file: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Show all bookmarks, sorted by target directory.
    Show {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a bookmark: `add name target`, `add name`, `add target`, or
    /// plain `add` for the current directory.
    Add {
        /// Positional [name] [target] pair, either one alone, or nothing
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
        /// Do not write anything; only report what would change.
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove one or more bookmarks.
    Rm {
        /// Bookmark names (without the leading ~)
        #[arg(required = true, allow_hyphen_values = true)]
        names: Vec<String>,
        /// Do not write anything; only report what would change.
        #[arg(long)]
        dry_run: bool,
    },
}
