// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP API module for the info service
//!
//! # Endpoints
//! - `GET /` — greeting
//! - `GET /health` — health check
//! - `GET /info` — application and runtime environment details

pub mod handlers;
mod state;

use axum::{Router, routing::get};
use std::sync::Arc;

pub use state::AppState;

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::greeting))
        .route("/health", get(handlers::health_check))
        .route("/info", get(handlers::info))
        .with_state(state)
}
