//! secret-fetcher: print the value of a named secret from local JSON files

use std::process::ExitCode;

fn main() -> ExitCode {
    match secret_fetcher::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
