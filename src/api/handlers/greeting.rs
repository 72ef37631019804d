use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::AppState;

pub const GREETING_MESSAGE: &str = "Hello from the info service!";
pub const RUNNING_STATUS: &str = "running";

/// Greeting endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
    pub version: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// GET /
pub async fn greeting(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    tracing::debug!("GET /");

    let response = GreetingResponse {
        message: GREETING_MESSAGE.to_string(),
        version: state.config.app_version.clone(),
        status: RUNNING_STATUS.to_string(),
        timestamp: Utc::now(),
    };

    (StatusCode::OK, Json(response))
}
