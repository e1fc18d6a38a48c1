//! Usoamic CLI Library
//!
//! Command definitions, handlers and output rendering for the `usoamic`
//! binary, exposed as a library so they can be tested against a mock node.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use error::{CliErrorHandler, CliResult};
pub use output::Output;
