// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Info Service
//!
//! Small demonstration HTTP service exposing greeting, health and
//! environment info endpoints as JSON, plus a standalone heartbeat process.
//!
//! ## Main modules
//! - `api`: HTTP API router and handlers
//! - `config`: configuration management
//! - `environment`: runtime and build introspection
//! - `error`: error types
//! - `heartbeat`: periodic liveness printer
//! - `logging`: tracing setup
//! - `prelude`: commonly used types

mod api;
mod config;
mod environment;
mod error;
mod heartbeat;
mod logging;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, defaults, env_vars};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router, state and response bodies
pub use api::handlers::{GreetingResponse, HealthResponse, InfoResponse};
pub use api::{AppState, create_router};

/// Heartbeat process
pub use heartbeat::{HEARTBEAT_INTERVAL, HEARTBEAT_MESSAGE, Heartbeat, STARTUP_BANNER};

/// Tracing setup
pub use logging::setup_tracing;
