use std::process;

use clap::Parser;

use ledger_core::{cli, init};

fn main() {
    init();

    let args = cli::Cli::parse();
    if let Err(err) = cli::run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
