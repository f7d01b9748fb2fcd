//! Book HTTP Routes
//!
//! CRUD endpoints over the in-memory bookshelf.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::books::{BookError, BookFilter, BookManager, BookPayload, ListQuery};
use crate::observability::{Event, Logger};

use super::errors::{ApiError, ApiResult};
use super::response::{ApiResponse, BookData, BookIdData, BooksData, Operation};

// ==================
// Shared State
// ==================

/// Bookshelf state shared across handlers.
///
/// Reads share the lock; add, update and delete hold it exclusively so
/// each mutation completes before the next begins.
pub struct BooksState {
    manager: RwLock<BookManager>,
}

impl BooksState {
    pub fn new() -> Self {
        Self::with_manager(BookManager::new())
    }

    /// Serve an explicitly constructed manager
    pub fn with_manager(manager: BookManager) -> Self {
        Self {
            manager: RwLock::new(manager),
        }
    }

    fn read(&self, op: Operation) -> ApiResult<RwLockReadGuard<'_, BookManager>> {
        self.manager
            .read()
            .map_err(|_| ApiError::new(op, BookError::LockPoisoned))
    }

    fn write(&self, op: Operation) -> ApiResult<RwLockWriteGuard<'_, BookManager>> {
        self.manager
            .write()
            .map_err(|_| ApiError::new(op, BookError::LockPoisoned))
    }
}

impl Default for BooksState {
    fn default() -> Self {
        Self::new()
    }
}

type SharedState = Arc<BooksState>;

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes(state: SharedState) -> Router {
    Router::new()
        .route("/books", get(list_books_handler).post(add_book_handler))
        .route(
            "/books/:book_id",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_books_handler(
    State(state): State<SharedState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<BooksData>>> {
    // Listing never fails on its query; an unreadable one imposes no filter.
    let query = match pairs {
        Ok(Query(pairs)) => ListQuery::from_pairs(pairs),
        Err(rejection) => {
            let reason = rejection.body_text();
            Logger::warn(
                Event::BookFilterIgnored.as_str(),
                &[("param", "*"), ("reason", reason.as_str())],
            );
            ListQuery::default()
        }
    };
    let filter = BookFilter::from_query(&query);
    let books = state.read(Operation::List)?.list(&filter);

    Ok(Json(ApiResponse::success(BooksData { books })))
}

async fn get_book_handler(
    State(state): State<SharedState>,
    Path(book_id): Path<String>,
) -> ApiResult<Json<ApiResponse<BookData>>> {
    let op = Operation::Get;
    let book = state
        .read(op)?
        .get_by_id(&book_id)
        .cloned()
        .map_err(|e| ApiError::new(op, e))?;

    Ok(Json(ApiResponse::success(BookData { book })))
}

async fn add_book_handler(
    State(state): State<SharedState>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ApiResponse<BookIdData>>)> {
    let op = Operation::Add;
    let Json(payload) = payload.map_err(|e| ApiError::invalid_payload(op, e))?;

    let book_id = state
        .write(op)?
        .add(payload)
        .map_err(|e| ApiError::new(op, e))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            op.success_message().unwrap_or_default(),
            BookIdData { book_id },
        )),
    ))
}

async fn update_book_handler(
    State(state): State<SharedState>,
    Path(book_id): Path<String>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let op = Operation::Update;
    let Json(payload) = payload.map_err(|e| ApiError::invalid_payload(op, e))?;

    state
        .write(op)?
        .update(&book_id, payload)
        .map_err(|e| ApiError::new(op, e))?;

    Ok(Json(ApiResponse::acknowledged(
        op.success_message().unwrap_or_default(),
    )))
}

async fn delete_book_handler(
    State(state): State<SharedState>,
    Path(book_id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let op = Operation::Delete;

    state
        .write(op)?
        .delete(&book_id)
        .map_err(|e| ApiError::new(op, e))?;

    Ok(Json(ApiResponse::acknowledged(
        op.success_message().unwrap_or_default(),
    )))
}
