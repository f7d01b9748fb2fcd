//! Observability for the bookshelf service
//!
//! Structured JSON logs, one line per typed event.
//!
//! # Usage
//!
//! ```ignore
//! use bookshelf::observability::{log_event_with_fields, Event, Logger};
//!
//! log_event_with_fields(Event::BookAdded, &[("book_id", "q3nVJ0Wc6cQ4QvJd")]);
//! Logger::warn("BOOK_FILTER_IGNORED", &[("param", "reading")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

fn severity_for(event: Event) -> Severity {
    if event.is_error() {
        Severity::Error
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}
