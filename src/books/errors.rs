//! # Book Errors
//!
//! Error types for the book collection.

use thiserror::Error;

/// Result type for book operations
pub type BookResult<T> = Result<T, BookError>;

/// Coarse classification used at the HTTP boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request rejected before any mutation
    Validation,
    /// No book with the requested id
    NotFound,
    /// Logic bug or poisoned state
    Internal,
}

/// Book collection errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    // ==================
    // Validation Errors
    // ==================
    /// `name` absent or empty
    #[error("name required")]
    MissingName,

    /// `readPage` larger than `pageCount`
    #[error("readPage ({read_page}) exceeds pageCount ({page_count})")]
    ReadPageExceedsPageCount { read_page: u32, page_count: u32 },

    // ==================
    // Lookup Errors
    // ==================
    /// No book with this id
    #[error("Book not found: {0}")]
    NotFound(String),

    // ==================
    // Internal Errors
    // ==================
    /// The id generator kept colliding with stored ids
    #[error("Could not generate a unique book id after {0} attempts")]
    IdExhausted(usize),

    /// A freshly appended book could not be found again
    #[error("Inserted book {0} is not retrievable")]
    InsertNotVisible(String),

    /// The collection lock was poisoned by a panicking writer
    #[error("Book collection lock poisoned")]
    LockPoisoned,
}

impl BookError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookError::MissingName | BookError::ReadPageExceedsPageCount { .. } => {
                ErrorKind::Validation
            }
            BookError::NotFound(_) => ErrorKind::NotFound,
            BookError::IdExhausted(_) | BookError::InsertNotVisible(_) | BookError::LockPoisoned => {
                ErrorKind::Internal
            }
        }
    }
}
