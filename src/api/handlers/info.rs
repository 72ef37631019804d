use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::AppState;
use crate::environment;

pub const APP_NAME: &str = "Info Service Demo";

/// Info endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct InfoResponse {
    pub app: String,
    pub version: String,
    #[serde(rename = "rust.version")]
    pub rust_version: String,
    #[serde(rename = "os.name")]
    pub os_name: String,
    #[serde(rename = "os.arch")]
    pub os_arch: String,
    #[serde(rename = "build.time")]
    pub build_time: String,
}

impl InfoResponse {
    fn collect(app_version: &str) -> Self {
        Self {
            app: APP_NAME.to_string(),
            version: app_version.to_string(),
            rust_version: environment::rust_version().to_string(),
            os_name: environment::os_name().to_string(),
            os_arch: environment::os_arch().to_string(),
            build_time: environment::build_time().to_string(),
        }
    }
}

/// GET /info
///
/// Application name and version plus details about the build and host
/// platform. Values that cannot be determined are reported as "unknown".
pub async fn info(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    tracing::debug!("GET /info");

    (
        StatusCode::OK,
        Json(InfoResponse::collect(&state.config.app_version)),
    )
}
