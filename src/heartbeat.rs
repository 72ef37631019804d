// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Heartbeat process
//!
//! Prints a startup banner, then a liveness line every [`HEARTBEAT_INTERVAL`]
//! until the shutdown future resolves.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};

use crate::error::Result;

pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
pub const STARTUP_BANNER: &str = "Simple application started on port 8080";
pub const HEARTBEAT_MESSAGE: &str = "Application heartbeat...";

/// Periodic liveness printer
#[derive(Debug, Clone)]
pub struct Heartbeat {
    interval: Duration,
}

impl Default for Heartbeat {
    fn default() -> Self {
        Self {
            interval: HEARTBEAT_INTERVAL,
        }
    }
}

impl Heartbeat {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Writes the banner, then one heartbeat line per interval until `shutdown`
    /// resolves. Returns the number of heartbeats written.
    ///
    /// Shutdown is a normal termination; only write failures are errors.
    pub async fn run<W, F>(&self, out: &mut W, shutdown: F) -> Result<u64>
    where
        W: Write,
        F: Future<Output = ()>,
    {
        writeln!(out, "{}", STARTUP_BANNER)?;
        out.flush()?;
        tracing::debug!("Heartbeat started, interval {:?}", self.interval);

        let mut ticker = tokio::time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tokio::pin!(shutdown);
        let mut beats: u64 = 0;

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    tracing::debug!("Heartbeat interrupted after {} beat(s)", beats);
                    break;
                }
                _ = ticker.tick() => {
                    writeln!(out, "{}", HEARTBEAT_MESSAGE)?;
                    out.flush()?;
                    beats += 1;
                    tracing::trace!("Heartbeat #{}", beats);
                }
            }
        }

        Ok(beats)
    }
}
