//! CLI module for the library service
//!
//! Provides command-line interface for:
//! - serve: Boot and serve the HTTP API
//! - routes: Print the route table
//! - docs: Print the Swagger document

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{docs, routes, run, run_command, serve};
pub use config::{Config, SearchConfig};
pub use errors::{CliError, CliErrorCode, CliResult};
