//! Observable events
//!
//! Every structured log line names one of these events.

use std::fmt;

/// Observable events in the bookshelf service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Listener bound, ready for requests
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Server stopped
    ShutdownComplete,

    // Books
    /// Book appended to the shelf
    BookAdded,
    /// Book fields replaced
    BookUpdated,
    /// Book removed
    BookDeleted,
    /// Request rejected (validation or unknown id)
    BookRejected,
    /// Listing flag could not be decoded and was dropped
    BookFilterIgnored,
    /// Internal consistency check failed
    BookInvariantViolated,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOKSHELF_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "BOOKSHELF_SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::BookAdded => "BOOK_ADDED",
            Event::BookUpdated => "BOOK_UPDATED",
            Event::BookDeleted => "BOOK_DELETED",
            Event::BookRejected => "BOOK_REJECTED",
            Event::BookFilterIgnored => "BOOK_FILTER_IGNORED",
            Event::BookInvariantViolated => "BOOK_INVARIANT_VIOLATED",
        }
    }

    /// Events logged at ERROR severity
    pub fn is_error(&self) -> bool {
        matches!(self, Event::BookInvariantViolated)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
