mod cli;
mod line;
mod ops;
mod output;
mod store;
mod util;

#[allow(unused_imports)]
pub(crate) use cli::*;
#[allow(unused_imports)]
pub(crate) use line::*;
#[allow(unused_imports)]
pub(crate) use ops::*;
#[allow(unused_imports)]
pub(crate) use output::*;
#[allow(unused_imports)]
pub(crate) use store::*;
#[allow(unused_imports)]
pub(crate) use util::*;

use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let store = Store::new(rc_file_path(cli.file));

    match cli.command {
        Command::Show { json } => run_show(&store, json),
        Command::Add { args, dry_run } => run_add(&store, &args, dry_run),
        Command::Rm { names, dry_run } => run_rm(&store, &names, dry_run),
    }
}
