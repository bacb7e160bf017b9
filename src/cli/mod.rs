//! Command Line Interface (CLI) layer for basics-qa.
//!
//! Wires the process environment (argv, working directory, standard
//! streams) to the library lifecycle in `basics_qa::api`.
pub mod errors;
pub mod runner;

pub use errors::AppError;
pub use runner::run;
