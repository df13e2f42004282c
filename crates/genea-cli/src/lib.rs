//! Genea CLI library.
//!
//! This library provides the core functionality for the `genea` command-line
//! interface: argument parsing, configuration, command execution and output
//! formatting around the relationship namer.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
