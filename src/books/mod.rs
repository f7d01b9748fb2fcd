//! # Bookshelf Domain
//!
//! In-memory book records and the operations over them:
//! list (with filters), get by id, add, update and delete.

pub mod book;
pub mod clock;
pub mod collection;
pub mod errors;
pub mod filter;
pub mod id;
pub mod manager;

pub use book::{Book, BookPayload, BookSummary};
pub use clock::{Clock, SystemClock};
pub use collection::BookCollection;
pub use errors::{BookError, BookResult, ErrorKind};
pub use filter::{BookFilter, ListQuery};
pub use id::{IdGenerator, NanoIdGenerator};
pub use manager::BookManager;
