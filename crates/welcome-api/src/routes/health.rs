//! Health check endpoint.

use axum::Json;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            status: "healthy",
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// GET /health — returns system health status and the current UTC time.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse::at(Utc::now()))
}
