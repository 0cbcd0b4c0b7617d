//! Minimal HTTP server exposing a welcome message and a health check.
//!
//! Two fixed routes answer with JSON; everything else gets a JSON 404.
//! JSON request bodies are validated on every request before any handler
//! or fallback runs, so a malformed body yields 400 on any path.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod telemetry;

use std::future::Future;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use config::Config;
use error::ServerError;
use middleware::{MAX_JSON_BODY_BYTES, parse_json_body};

/// Creates the Axum application router with all routes and middleware.
pub fn create_app() -> Router {
    Router::new()
        .route(
            "/",
            get(routes::root::welcome).fallback(routes::not_found),
        )
        .route(
            "/health",
            get(routes::health::check).fallback(routes::not_found),
        )
        .fallback(routes::not_found)
        .layer(axum::middleware::from_fn(parse_json_body))
        .layer(DefaultBodyLimit::max(MAX_JSON_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}

/// Binds the TCP listener for the configured port.
pub async fn bind(config: &Config) -> Result<TcpListener, ServerError> {
    let addr = config.addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves the application on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_app())
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
