//! # HTTP Server
//!
//! Combines the book and health routers behind a CORS layer and serves
//! them until Ctrl-C.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event, log_event_with_fields, Event, Logger};

use super::book_routes::{book_routes, BooksState};
use super::config::HttpServerConfig;
use super::health_routes::{health_routes, not_found_handler};

/// HTTP server for the bookshelf
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server over an empty bookshelf
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_state(config, Arc::new(BooksState::new()))
    }

    /// Create a new HTTP server over the given bookshelf state
    pub fn with_state(config: HttpServerConfig, state: Arc<BooksState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(config: &HttpServerConfig, state: Arc<BooksState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(book_routes(state))
            .fallback(not_found_handler)
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        let local_addr = listener.local_addr()?.to_string();

        log_event_with_fields(Event::Serving, &[("addr", local_addr.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        let error = e.to_string();
        Logger::error(
            Event::ShutdownStart.as_str(),
            &[("reason", "signal handler failed"), ("error", error.as_str())],
        );
        // Without a signal handler the server runs until killed.
        std::future::pending::<()>().await;
    }
    log_event(Event::ShutdownStart);
}
