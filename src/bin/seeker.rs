// src/bin/seeker.rs
use clap::Parser;

use seeker_core::cli::{self, Cli};
use seeker_core::exit::SeekerExit;
use seeker_core::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli::dispatch(&cli) {
        Ok(code) => code.exit(),
        Err(e) => SeekerExit::from(Err::<(), _>(e)).exit(),
    }
}
