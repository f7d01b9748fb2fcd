//! # Book Collection Manager
//!
//! Owns the book collection and implements the five bookshelf operations.
//!
//! ## Invariants
//! - Ids are unique among stored books
//! - `read_page <= page_count` for every stored book
//! - `finished == (read_page == page_count)` after every add/update
//! - Rejected requests never mutate the collection

use crate::observability::{log_event_with_fields, Event};

use super::book::{Book, BookPayload, BookSummary};
use super::clock::{Clock, SystemClock};
use super::collection::BookCollection;
use super::errors::{BookError, BookResult, ErrorKind};
use super::filter::BookFilter;
use super::id::{IdGenerator, NanoIdGenerator};

/// Maximum id draws before giving up on a unique id
pub const MAX_ID_ATTEMPTS: usize = 8;

/// Manages the in-memory bookshelf
pub struct BookManager {
    collection: BookCollection,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl BookManager {
    /// Empty shelf with random ids and wall-clock timestamps
    pub fn new() -> Self {
        Self::with_parts(
            BookCollection::new(),
            Box::new(NanoIdGenerator::new()),
            Box::new(SystemClock),
        )
    }

    /// Build a manager over an existing collection with explicit id and
    /// time sources
    pub fn with_parts(
        collection: BookCollection,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            collection,
            ids,
            clock,
        }
    }

    /// Number of stored books
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Every stored book in full, in insertion order.
    ///
    /// Unlike [`list`](Self::list) this yields complete records, for callers
    /// that need more than the summary projection.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.collection.iter()
    }

    /// Summaries of every matching book, in insertion order
    pub fn list(&self, filter: &BookFilter) -> Vec<BookSummary> {
        self.collection
            .iter()
            .filter(|book| filter.matches(book))
            .map(BookSummary::from)
            .collect()
    }

    /// Full record of one book
    pub fn get_by_id(&self, id: &str) -> BookResult<&Book> {
        self.collection
            .find(id)
            .ok_or_else(|| BookError::NotFound(id.to_string()))
    }

    /// Validate and append a new book, returning its id
    pub fn add(&mut self, payload: BookPayload) -> BookResult<String> {
        payload.validate().map_err(|e| log_failure("add", e))?;

        let id = self.fresh_id().map_err(|e| log_failure("add", e))?;
        let now = self.clock.now();
        self.collection.push(Book::new(id.clone(), payload, now));

        if !self.collection.contains(&id) {
            return Err(log_failure("add", BookError::InsertNotVisible(id)));
        }

        log_event_with_fields(Event::BookAdded, &[("book_id", id.as_str())]);
        Ok(id)
    }

    /// Replace every mutable field of an existing book
    pub fn update(&mut self, id: &str, payload: BookPayload) -> BookResult<()> {
        payload.validate().map_err(|e| log_failure("update", e))?;

        let now = self.clock.now();
        let book = self
            .collection
            .find_mut(id)
            .ok_or_else(|| log_failure("update", BookError::NotFound(id.to_string())))?;
        book.apply(payload, now);

        log_event_with_fields(Event::BookUpdated, &[("book_id", id)]);
        Ok(())
    }

    /// Remove one book
    pub fn delete(&mut self, id: &str) -> BookResult<()> {
        self.collection
            .remove(id)
            .ok_or_else(|| log_failure("delete", BookError::NotFound(id.to_string())))?;

        log_event_with_fields(Event::BookDeleted, &[("book_id", id)]);
        Ok(())
    }

    /// Draw ids until one is not already stored
    fn fresh_id(&self) -> BookResult<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.generate();
            if !self.collection.contains(&candidate) {
                return Ok(candidate);
            }
        }
        Err(BookError::IdExhausted(MAX_ID_ATTEMPTS))
    }
}

impl Default for BookManager {
    fn default() -> Self {
        Self::new()
    }
}

fn log_failure(operation: &str, err: BookError) -> BookError {
    let reason = err.to_string();
    let event = match err.kind() {
        ErrorKind::Internal => Event::BookInvariantViolated,
        ErrorKind::Validation | ErrorKind::NotFound => Event::BookRejected,
    };
    log_event_with_fields(event, &[("operation", operation), ("reason", reason.as_str())]);
    err
}
