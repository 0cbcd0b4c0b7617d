pub mod health;
pub mod root;

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Fallback for unknown paths and unsupported methods on known paths.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
