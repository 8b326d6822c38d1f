//! `elkj`: lex and check ELK Graph JSON files.

use elkjc::commands::{dispatch, print_usage};
use elkjc::{init_tracing, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match dispatch(&args) {
        Ok(None) => print_usage(),
        Ok(Some(output)) => {
            print!("{}", output.stdout);
            std::process::exit(output.exit_code());
        }
        Err(CliError::MissingCommand) => {
            print_usage();
            std::process::exit(CliError::EXIT_CODE);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(CliError::EXIT_CODE);
        }
    }
}
