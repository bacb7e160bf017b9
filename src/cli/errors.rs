use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    /// Also carries `--help` and `--version` output.
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error(transparent)]
    Lifecycle(#[from] basics_qa::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(err) => err.exit_code(),
            AppError::Lifecycle(_) => 1,
        }
    }
}
