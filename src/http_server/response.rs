//! # Response Formatting
//!
//! The `{status, message?, data?}` envelope shared by every book endpoint,
//! and the user-facing messages for each operation.

use serde::Serialize;

use crate::books::{Book, BookSummary};

/// Envelope status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    /// Client-side problem (400/404)
    Fail,
    /// Server-side problem (500)
    Error,
}

/// Standard response body
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: Status::Success,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success with a message and no data
    pub fn acknowledged(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn failure(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// `data` of a successful add
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookIdData {
    pub book_id: String,
}

/// `data` of a listing
#[derive(Debug, Clone, Serialize)]
pub struct BooksData {
    pub books: Vec<BookSummary>,
}

/// `data` of a single-book fetch
#[derive(Debug, Clone, Serialize)]
pub struct BookData {
    pub book: Book,
}

/// The bookshelf operation a response belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Add,
    Update,
    Delete,
}

impl Operation {
    /// Message on success, where the operation reports one
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            Operation::List | Operation::Get => None,
            Operation::Add => Some("Buku berhasil ditambahkan"),
            Operation::Update => Some("Buku berhasil diperbarui"),
            Operation::Delete => Some("Buku berhasil dihapus"),
        }
    }

    /// Prefix of validation messages. Only add and update take a payload.
    pub fn rejection_prefix(&self) -> &'static str {
        match self {
            Operation::Update => "Gagal memperbarui buku",
            _ => "Gagal menambahkan buku",
        }
    }

    /// Only get, update and delete look a book up by id
    pub fn not_found_message(&self) -> &'static str {
        match self {
            Operation::Update => "Gagal memperbarui buku. Id tidak ditemukan",
            Operation::Delete => "Buku gagal dihapus. Id tidak ditemukan",
            _ => "Buku tidak ditemukan",
        }
    }

    /// Reads fail internally only on a poisoned lock
    pub fn internal_message(&self) -> &'static str {
        match self {
            Operation::Add => "Buku gagal ditambahkan",
            Operation::Update => "Buku gagal diperbarui",
            Operation::Delete => "Buku gagal dihapus",
            Operation::List | Operation::Get => "Buku gagal ditampilkan",
        }
    }
}
