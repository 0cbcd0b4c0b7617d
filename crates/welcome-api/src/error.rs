//! Error types: per-request API errors with HTTP response mapping, and
//! startup errors that terminate the process.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No route matches the request method and path.
    #[error("Cannot {method} {path}")]
    NotFound { method: String, path: String },

    /// The request body is not acceptable JSON.
    #[error("{0}")]
    BadRequest(String),

    /// The request body exceeds the parser limit.
    #[error("request entity too large")]
    PayloadTooLarge,

    /// The JSON body declares a charset other than UTF-8.
    #[error("unsupported charset \"{0}\"")]
    UnsupportedCharset(String),

    /// The JSON body is compressed or otherwise encoded.
    #[error("unsupported content encoding \"{0}\"")]
    UnsupportedEncoding(String),

    /// Reading the body failed for another reason.
    #[error("{message}")]
    Body { status: StatusCode, message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::UnsupportedCharset(_) | ApiError::UnsupportedEncoding(_) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            ApiError::Body { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "request rejected");

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge,
            status => ApiError::Body {
                status,
                message: rejection.body_text(),
            },
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("malformed JSON body: {err}"))
    }
}

/// Errors that stop the server process.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound (port in use, permission denied, ...).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop terminated with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
