use std::io;

use basics_qa::{LogSink, Runner};

use super::errors::AppError;

/// Runs one invocation and returns the exit code to terminate with.
pub fn run() -> Result<i32, AppError> {
    let session = Runner::new()?.bootstrap(std::env::args_os(), LogSink::Stderr)?;

    let stdout = io::stdout();
    let completion = session.run(true, &mut stdout.lock())?;
    Ok(completion.exit_code())
}
