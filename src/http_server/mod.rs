//! # Bookshelf HTTP Server Module
//!
//! Axum server exposing the bookshelf over JSON.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/books` - List (GET) and add (POST) books
//! - `/books/:book_id` - Fetch (GET), update (PUT) and delete (DELETE) one book

pub mod book_routes;
pub mod config;
pub mod errors;
pub mod health_routes;
pub mod response;
pub mod server;

pub use book_routes::{book_routes, BooksState};
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiErrorKind, ApiResult};
pub use response::{ApiResponse, Operation, Status};
pub use server::HttpServer;
