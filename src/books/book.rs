//! # Book Model
//!
//! The stored book record, the client-supplied payload it is built from,
//! and the summary projection returned by listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::{BookError, BookResult};

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Opaque unique identifier, fixed at creation
    pub id: String,

    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,

    /// Always `read_page == page_count`
    pub finished: bool,

    /// Client-declared reading intent
    pub reading: bool,

    /// When the book was added (never changes)
    #[serde(with = "iso8601")]
    pub inserted_at: DateTime<Utc>,

    /// When the book was last modified
    #[serde(with = "iso8601")]
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Build a new book from a validated payload
    pub fn new(id: String, payload: BookPayload, now: DateTime<Utc>) -> Self {
        let mut book = Self {
            id,
            name: String::new(),
            year: 0,
            author: String::new(),
            summary: String::new(),
            publisher: String::new(),
            page_count: 0,
            read_page: 0,
            finished: false,
            reading: false,
            inserted_at: now,
            updated_at: now,
        };
        book.apply(payload, now);
        book
    }

    /// Replace every mutable field with the payload's values.
    ///
    /// `id` and `inserted_at` are left untouched.
    pub fn apply(&mut self, payload: BookPayload, now: DateTime<Utc>) {
        self.name = payload.name.unwrap_or_default();
        self.year = payload.year;
        self.author = payload.author;
        self.summary = payload.summary;
        self.publisher = payload.publisher;
        self.page_count = payload.page_count;
        self.read_page = payload.read_page;
        self.finished = payload.read_page == payload.page_count;
        self.reading = payload.reading;
        self.updated_at = now;
    }
}

/// Fields a client supplies when adding or updating a book
///
/// Every field is optional on the wire; `name` is checked by [`validate`]
/// so that its absence is reported as a validation failure.
///
/// [`validate`]: BookPayload::validate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookPayload {
    pub name: Option<String>,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

impl BookPayload {
    /// Check the payload rules in order, stopping at the first violation
    pub fn validate(&self) -> BookResult<()> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => {}
            _ => return Err(BookError::MissingName),
        }

        if self.read_page > self.page_count {
            return Err(BookError::ReadPageExceedsPageCount {
                read_page: self.read_page,
                page_count: self.page_count,
            });
        }

        Ok(())
    }
}

/// Listing projection of a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix
mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
