// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Application state shared across HTTP handlers

use crate::config::Config;

/// Shared application state
///
/// Read-only after startup; handlers only borrow it.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
