//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use gmaps_cli::CliError;

fn main() {
    match gmaps_cli::run() {
        Ok(()) => {}
        // Let clap render help, version and usage errors itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("gmaps: {err}");
            std::process::exit(1);
        }
    }
}
