use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const HEALTH_STATUS_UP: &str = "UP";
pub const HEALTH_MESSAGE: &str = "Application is running";
pub const SERVICE_NAME: &str = "Info Service";

/// Health check endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub service: String,
    pub timestamp: DateTime<Utc>,
}

/// GET /health
///
/// Liveness check. The process answering at all means it is up, so the
/// status is always "UP".
pub async fn health_check() -> impl IntoResponse {
    tracing::debug!("GET /health");

    let response = HealthResponse {
        status: HEALTH_STATUS_UP.to_string(),
        message: HEALTH_MESSAGE.to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: Utc::now(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
