use smi_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Summaries go to stdout; tracing goes to the state log, or stderr if that fails.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("smi error: {:#}", err);
        std::process::exit(1);
    }
}
