//! Lifecycle events for the library service
//!
//! Events are explicit and typed; each has a stable name that appears as
//! the `event` field of its log line.

use std::fmt;

/// Observable lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Process startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Startup failed (FATAL)
    BootFailed,
    /// Listener bound, serving requests
    ServerListening,
    /// Shutdown signal received
    ShutdownRequested,
    /// In-flight requests drained, server stopped
    ShutdownComplete,
}

impl Event {
    /// Returns the stable event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::BootFailed => "BOOT_FAILED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ShutdownRequested => "SHUTDOWN_REQUESTED",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
        }
    }

    /// Returns true if this event ends the process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::BootStart.as_str(), "BOOT_START");
        assert_eq!(Event::ServerListening.to_string(), "SERVER_LISTENING");
    }

    #[test]
    fn test_only_boot_failure_is_fatal() {
        assert!(Event::BootFailed.is_fatal());
        assert!(!Event::ShutdownComplete.is_fatal());
    }
}
