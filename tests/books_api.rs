//! HTTP API Tests
//!
//! Drives the full router with in-process requests and checks status codes,
//! envelopes and messages for every book endpoint.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf::books::{BookCollection, BookManager, IdGenerator, SystemClock};
use bookshelf::http_server::{BooksState, HttpServer, HttpServerConfig};

// =============================================================================
// Helper Functions
// =============================================================================

fn test_router() -> Router {
    HttpServer::new().router()
}

async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let req = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();

    let parsed = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, parsed)
}

fn book_payload(name: &str, page_count: u32, read_page: u32, reading: bool) -> Value {
    json!({
        "name": name,
        "year": 2010,
        "author": "John Doe",
        "summary": "Lorem ipsum dolor sit amet",
        "publisher": "Dicoding Indonesia",
        "pageCount": page_count,
        "readPage": read_page,
        "reading": reading
    })
}

async fn add_book(router: &Router, payload: Value) -> String {
    let (status, body) = send(router, Method::POST, "/books", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {}", body);
    body["data"]["bookId"].as_str().unwrap().to_string()
}

fn names(body: &Value) -> Vec<&str> {
    body["data"]["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect()
}

// =============================================================================
// Add
// =============================================================================

#[tokio::test]
async fn add_book_returns_created_id() {
    let router = test_router();

    let (status, body) = send(
        &router,
        Method::POST,
        "/books",
        Some(book_payload("Dicoding", 100, 100, false)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Buku berhasil ditambahkan");
    let id = body["data"]["bookId"].as_str().unwrap();
    assert!(!id.is_empty());

    let (status, body) = send(&router, Method::GET, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    let book = &body["data"]["book"];
    assert_eq!(book["id"], id);
    assert_eq!(book["name"], "Dicoding");
    assert_eq!(book["year"], 2010);
    assert_eq!(book["author"], "John Doe");
    assert_eq!(book["summary"], "Lorem ipsum dolor sit amet");
    assert_eq!(book["publisher"], "Dicoding Indonesia");
    assert_eq!(book["pageCount"], 100);
    assert_eq!(book["readPage"], 100);
    assert_eq!(book["finished"], true);
    assert_eq!(book["reading"], false);
    assert_eq!(book["insertedAt"], book["updatedAt"]);
}

#[tokio::test]
async fn add_book_without_name_fails() {
    let router = test_router();

    for payload in [
        book_payload("", 10, 5, false),
        json!({"pageCount": 10, "readPage": 5}),
    ] {
        let (status, body) = send(&router, Method::POST, "/books", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "Gagal menambahkan buku. Mohon isi nama buku");
    }

    let (_, body) = send(&router, Method::GET, "/books", None).await;
    assert!(names(&body).is_empty());
}

#[tokio::test]
async fn add_book_with_read_page_over_page_count_fails() {
    let router = test_router();

    let (status, body) = send(
        &router,
        Method::POST,
        "/books",
        Some(book_payload("X", 50, 60, false)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert_eq!(
        body["message"],
        "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount"
    );

    let (_, body) = send(&router, Method::GET, "/books", None).await;
    assert!(names(&body).is_empty());
}

#[tokio::test]
async fn add_book_with_malformed_body_fails() {
    let router = test_router();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/books")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = router.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &router,
        Method::POST,
        "/books",
        Some(json!({"name": "Negative", "pageCount": -5})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Gagal menambahkan buku."));
}

struct ConstantIds;

impl IdGenerator for ConstantIds {
    fn generate(&self) -> String {
        "fixed-id".to_string()
    }
}

#[tokio::test]
async fn add_book_reports_internal_error_when_no_unique_id() {
    let manager = BookManager::with_parts(
        BookCollection::new(),
        Box::new(ConstantIds),
        Box::new(SystemClock),
    );
    let state = Arc::new(BooksState::with_manager(manager));
    let router = HttpServer::with_state(HttpServerConfig::default(), state).router();

    add_book(&router, book_payload("First", 1, 0, false)).await;

    let (status, body) = send(
        &router,
        Method::POST,
        "/books",
        Some(book_payload("Second", 1, 0, false)),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Buku gagal ditambahkan");

    let (_, body) = send(&router, Method::GET, "/books", None).await;
    assert_eq!(names(&body), vec!["First"]);
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn list_projects_id_name_publisher_in_insertion_order() {
    let router = test_router();
    let first = add_book(&router, book_payload("Alpha", 10, 0, false)).await;
    let second = add_book(&router, book_payload("Beta", 10, 10, true)).await;

    let (status, body) = send(&router, Method::GET, "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    let books = body["data"]["books"].as_array().unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(
        books[0],
        json!({"id": first, "name": "Alpha", "publisher": "Dicoding Indonesia"})
    );
    assert_eq!(books[1]["id"], second);
    assert!(books[1].get("pageCount").is_none());
}

#[tokio::test]
async fn list_filters_by_flags_and_name() {
    let router = test_router();
    add_book(&router, book_payload("Foobar", 10, 10, true)).await;
    add_book(&router, book_payload("Dicoding Basics", 10, 3, true)).await;
    add_book(&router, book_payload("Unread foo", 10, 0, false)).await;

    let (_, body) = send(&router, Method::GET, "/books?reading=1", None).await;
    assert_eq!(names(&body), vec!["Foobar", "Dicoding Basics"]);

    let (_, body) = send(&router, Method::GET, "/books?reading=0", None).await;
    assert_eq!(names(&body), vec!["Unread foo"]);

    let (_, body) = send(&router, Method::GET, "/books?finished=1", None).await;
    assert_eq!(names(&body), vec!["Foobar"]);

    let (_, body) = send(&router, Method::GET, "/books?name=FOO", None).await;
    assert_eq!(names(&body), vec!["Foobar", "Unread foo"]);

    let (_, body) = send(&router, Method::GET, "/books?name=foo&reading=1", None).await;
    assert_eq!(names(&body), vec!["Foobar"]);

    let (_, body) = send(&router, Method::GET, "/books?name=missing", None).await;
    assert!(names(&body).is_empty());
}

#[tokio::test]
async fn list_ignores_undecodable_flags() {
    let router = test_router();
    add_book(&router, book_payload("A", 1, 1, true)).await;
    add_book(&router, book_payload("B", 1, 0, false)).await;

    let (status, body) = send(&router, Method::GET, "/books?reading=maybe", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["A", "B"]);
}

#[tokio::test]
async fn list_with_repeated_flag_uses_first_value() {
    let router = test_router();
    add_book(&router, book_payload("A", 1, 1, true)).await;
    add_book(&router, book_payload("B", 1, 0, false)).await;

    let (status, body) = send(&router, Method::GET, "/books?reading=1&reading=0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(names(&body), vec!["A"]);

    let (status, body) = send(&router, Method::GET, "/books?name=b&name=a&finished=0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["B"]);
}

// =============================================================================
// Get
// =============================================================================

#[tokio::test]
async fn get_unknown_book_is_not_found() {
    let router = test_router();

    let (status, body) = send(&router, Method::GET, "/books/xxxxx", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Buku tidak ditemukan");
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn update_replaces_fields_and_keeps_identity() {
    let router = test_router();
    let id = add_book(&router, book_payload("Old", 100, 10, false)).await;
    let (_, before) = send(&router, Method::GET, &format!("/books/{}", id), None).await;

    let (status, body) = send(
        &router,
        Method::PUT,
        &format!("/books/{}", id),
        Some(book_payload("New", 200, 200, true)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Buku berhasil diperbarui");
    assert!(body.get("data").is_none());

    let (_, after) = send(&router, Method::GET, &format!("/books/{}", id), None).await;
    let book = &after["data"]["book"];
    assert_eq!(book["id"], id);
    assert_eq!(book["name"], "New");
    assert_eq!(book["pageCount"], 200);
    assert_eq!(book["finished"], true);
    assert_eq!(book["reading"], true);
    assert_eq!(book["insertedAt"], before["data"]["book"]["insertedAt"]);
}

#[tokio::test]
async fn update_validation_runs_before_lookup() {
    let router = test_router();

    let (status, body) = send(
        &router,
        Method::PUT,
        "/books/unknown",
        Some(book_payload("", 10, 1, false)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Gagal memperbarui buku. Mohon isi nama buku");

    let (status, body) = send(
        &router,
        Method::PUT,
        "/books/unknown",
        Some(book_payload("Name", 10, 11, false)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Gagal memperbarui buku. readPage tidak boleh lebih besar dari pageCount"
    );

    let (status, body) = send(
        &router,
        Method::PUT,
        "/books/unknown",
        Some(book_payload("Name", 10, 1, false)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Gagal memperbarui buku. Id tidak ditemukan");
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn delete_removes_exactly_one_book() {
    let router = test_router();
    add_book(&router, book_payload("A", 1, 0, false)).await;
    let b = add_book(&router, book_payload("B", 1, 0, false)).await;
    add_book(&router, book_payload("C", 1, 0, false)).await;

    let (status, body) = send(&router, Method::DELETE, &format!("/books/{}", b), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Buku berhasil dihapus");

    let (status, _) = send(&router, Method::GET, &format!("/books/{}", b), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&router, Method::GET, "/books", None).await;
    assert_eq!(names(&body), vec!["A", "C"]);

    let (status, body) = send(&router, Method::DELETE, &format!("/books/{}", b), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Buku gagal dihapus. Id tidak ditemukan");
}

// =============================================================================
// Misc
// =============================================================================

#[tokio::test]
async fn health_and_unknown_routes() {
    let router = test_router();

    let (status, body) = send(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&router, Method::GET, "/shelves", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "fail");
}
