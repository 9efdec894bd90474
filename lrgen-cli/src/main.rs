use clap::Parser;
use std::process;

use lrgen_cli::cli;

fn main() {
    let args = cli::Args::parse();
    cli::init_logging(&args);

    if let Err(e) = cli::run(&args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
