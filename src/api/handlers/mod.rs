// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod greeting;
mod health;
mod info;

pub use greeting::{GreetingResponse, greeting};
pub use health::{HealthResponse, health_check};
pub use info::{InfoResponse, info};
