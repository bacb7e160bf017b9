//! basics-qa CLI entrypoint.
//!
//! Parses arguments, runs once, and exits with the code the run reports.
//! Only this function terminates the process.

mod cli;

use cli::AppError;

fn main() {
    match cli::run() {
        Ok(code) => std::process::exit(code),
        Err(AppError::Usage(err)) => err.exit(),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
