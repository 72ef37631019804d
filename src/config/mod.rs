// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the info service
//!
//! Loads configuration from environment variables (and `.env` if present).

use std::net::SocketAddr;

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:8080";
    pub const APP_VERSION: &str = "1.0.0";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const APP_VERSION: &str = "APP_VERSION";
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub app_version: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
            app_version: defaults::APP_VERSION.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_values(
            std::env::var(env_vars::SERVER_ADDR).ok(),
            std::env::var(env_vars::APP_VERSION).ok(),
        )
    }

    /// Builds configuration from optional raw values, applying defaults
    pub fn from_values(server_addr: Option<String>, app_version: Option<String>) -> Self {
        let server_addr = server_addr.unwrap_or_else(|| defaults::SERVER_ADDR.to_string());

        let app_version = match app_version {
            Some(v) if !v.trim().is_empty() => v.trim().to_string(),
            Some(_) => {
                tracing::warn!(
                    "{} is blank. Using default {}",
                    env_vars::APP_VERSION,
                    defaults::APP_VERSION
                );
                defaults::APP_VERSION.to_string()
            }
            None => defaults::APP_VERSION.to_string(),
        };

        Config {
            server_addr,
            app_version,
        }
    }

    /// Parses the listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        if self.server_addr.trim().is_empty() {
            return Err(AppError::Config(format!(
                "{} cannot be empty",
                env_vars::SERVER_ADDR
            )));
        }
        Ok(self.server_addr.trim().parse()?)
    }
}
