use blc_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible.
    if let Err(err) = logging::init_logging() {
        eprintln!("blc warning: {:#}", err);
    }

    // Parse CLI and dispatch.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("blc error: {:#}", err);
        std::process::exit(1);
    }
}
