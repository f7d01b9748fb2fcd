//! # Book Collection
//!
//! Ordered in-memory sequence of books. New books are appended; removal
//! keeps the relative order of the rest.

use super::book::Book;

/// The ordered set of stored books
#[derive(Debug, Clone, Default)]
pub struct BookCollection {
    books: Vec<Book>,
}

impl BookCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Append a book at the end
    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    /// Remove the book with this id, shifting later books down
    pub fn remove(&mut self, id: &str) -> Option<Book> {
        let idx = self.position(id)?;
        Some(self.books.remove(idx))
    }
}
