//! Command-line interface for artist-scout.
//!
//! Two commands: `resolve` for a single interactive lookup and `batch` for
//! building a CSV dataset from a list of names.

mod commands;

pub use commands::{Cli, Commands, run_command};
