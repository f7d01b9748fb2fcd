//! bookshelf - an in-memory book catalog served over HTTP
//!
//! The [`books`] module owns the collection and its rules; the
//! [`http_server`] module exposes it as a JSON API.

pub mod books;
pub mod cli;
pub mod http_server;
pub mod observability;
