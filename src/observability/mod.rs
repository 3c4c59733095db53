//! Observability subsystem
//!
//! Structured logging through `tracing`:
//! - `init_logging` installs the process-wide subscriber
//! - lifecycle events are logged with a stable `event` name
//! - request spans come from `tower_http::trace::TraceLayer`
//!
//! # Usage
//!
//! ```ignore
//! use library_api::observability::{init_logging, log_event, Event, LogFormat};
//!
//! init_logging("info", LogFormat::Json)?;
//! log_event(Event::BootStart);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{init_logging, LogFormat};

use thiserror::Error;

/// Observability error.
///
/// Logging failures are reported to the caller and never panic.
#[derive(Debug, Error)]
#[error("observability failed: {message}")]
pub struct ObservabilityError {
    message: String,
}

impl ObservabilityError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields.
///
/// Fields are rendered as `key=value` pairs, sorted by key.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let details = render_fields(fields);

    if event.is_fatal() {
        tracing::error!(event = event.as_str(), details = %details, "lifecycle");
    } else {
        tracing::info!(event = event.as_str(), details = %details, "lifecycle");
    }
}

fn render_fields(fields: &[(&str, &str)]) -> String {
    let mut sorted: Vec<_> = fields.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);

    sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(" ")
}
