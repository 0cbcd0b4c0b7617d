//! Welcome endpoint.

use axum::Json;
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to the Basic Node.js Express App!";

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// GET / — returns the welcome message.
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
        status: "running",
    })
}
