//! Prints the Gemini models that support a generation method.

pub mod cli;
pub mod report;

pub use cli::Cli;
pub use report::{report, run, Outcome, HEADER};
