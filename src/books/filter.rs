//! # Book Filters
//!
//! Decodes listing query parameters and matches books against them.
//! All present filters are combined with AND logic.

use crate::observability::{Event, Logger};

use super::book::Book;

/// Raw listing query parameters, as received on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub reading: Option<String>,
    pub finished: Option<String>,
    pub name: Option<String>,
}

impl ListQuery {
    /// Collect the known parameters from decoded `key=value` pairs.
    ///
    /// The first occurrence of a parameter wins; repeats are dropped with a
    /// warning. Unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "reading" => &mut query.reading,
                "finished" => &mut query.finished,
                "name" => &mut query.name,
                _ => continue,
            };
            if slot.is_some() {
                Logger::warn(
                    Event::BookFilterIgnored.as_str(),
                    &[("param", key.as_str()), ("value", value.as_str()), ("reason", "repeated")],
                );
                continue;
            }
            *slot = Some(value);
        }
        query
    }
}

/// Decoded listing filters. `None` imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub reading: Option<bool>,
    pub finished: Option<bool>,
    /// Case-insensitive substring of the book name
    pub name: Option<String>,
}

impl BookFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reading(mut self, reading: bool) -> Self {
        self.reading = Some(reading);
        self
    }

    pub fn finished(mut self, finished: bool) -> Self {
        self.finished = Some(finished);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Decode raw query parameters.
    ///
    /// Flags other than `"0"`/`"1"` are dropped with a warning.
    pub fn from_query(query: &ListQuery) -> Self {
        Self {
            reading: decode_flag_param("reading", query.reading.as_deref()),
            finished: decode_flag_param("finished", query.finished.as_deref()),
            name: query.name.clone(),
        }
    }

    /// Check if a book matches every present filter
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(reading) = self.reading {
            if book.reading != reading {
                return false;
            }
        }

        if let Some(finished) = self.finished {
            if book.finished != finished {
                return false;
            }
        }

        if let Some(name) = &self.name {
            if !book.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }

        true
    }
}

/// Decode a `"0"`/`"1"` flag
pub fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

fn decode_flag_param(param: &str, value: Option<&str>) -> Option<bool> {
    let value = value?;
    let decoded = parse_flag(value);
    if decoded.is_none() {
        Logger::warn(
            Event::BookFilterIgnored.as_str(),
            &[("param", param), ("value", value)],
        );
    }
    decoded
}
