//! CLI command implementations
//!
//! `serve` boots in a fixed order: load config, install logger, build the
//! store and router, then bind and serve until a shutdown signal.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use crate::http_server::HttpServer;
use crate::observability::{init_logging, log_event, log_event_with_fields, Event, LogFormat};
use crate::rest_api::{swagger_document, ROUTES};
use crate::store::{BookStore, MemoryBookStore, SearchMode};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            config,
            host,
            port,
            log_format,
        } => serve(config.as_deref(), host, port, log_format),
        Command::Routes => routes(&mut io::stdout().lock()),
        Command::Docs => docs(&mut io::stdout().lock()),
    }
}

/// Start the HTTP server and block until it shuts down
pub fn serve(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    log_format: Option<LogFormat>,
) -> CliResult<()> {
    let config = Config::load(config_path)?.with_overrides(host, port, log_format);

    init_logging(&config.log_filter, config.log_format)
        .map_err(|e| CliError::boot_failed(e.to_string()))?;
    log_event(Event::BootStart);

    let source = config_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    let mode = match config.search.pattern_mode {
        SearchMode::Literal => "literal",
        SearchMode::Regex => "regex",
    };
    log_event_with_fields(Event::ConfigLoaded, &[("source", source.as_str()), ("search", mode)]);

    let store: Arc<dyn BookStore> = Arc::new(MemoryBookStore::new());
    let server = HttpServer::with_store(config.server.clone(), store, config.search.pattern_mode);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::boot_failed(format!("Failed to start runtime: {}", e)))?;

    runtime.block_on(server.start()).map_err(|e| {
        let message = e.to_string();
        log_event_with_fields(Event::BootFailed, &[("error", message.as_str())]);
        CliError::boot_failed(message)
    })
}

/// Print the route table, one route per line
pub fn routes<W: Write>(out: &mut W) -> CliResult<()> {
    for route in ROUTES {
        writeln!(
            out,
            "{:<7} {:<40} {}",
            route.method,
            route.full_path(),
            route.summary
        )?;
    }
    Ok(())
}

/// Print the Swagger document
pub fn docs<W: Write>(out: &mut W) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, &swagger_document())?;
    writeln!(out)?;
    Ok(())
}
