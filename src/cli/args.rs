//! CLI argument definitions using clap
//!
//! Commands:
//! - library-api serve [--config <path>] [--host <host>] [--port <port>]
//! - library-api routes
//! - library-api docs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::LogFormat;

/// Library REST API - books, search and Swagger docs over HTTP
#[derive(Parser, Debug)]
#[command(name = "library-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to, overrides the config file
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to, overrides the config file
        #[arg(long)]
        port: Option<u16>,

        /// Log output format, overrides the config file
        #[arg(long, value_enum)]
        log_format: Option<LogFormat>,
    },

    /// Print the route table
    Routes,

    /// Print the Swagger document as JSON
    Docs,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
