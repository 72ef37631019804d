// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use info_service::{HEARTBEAT_INTERVAL, HEARTBEAT_MESSAGE, Heartbeat, STARTUP_BANNER};
use std::time::Duration;
use tokio::time::Instant;

async fn run_for(duration: Duration) -> (u64, Vec<String>, Duration) {
    let mut out = Vec::new();
    let start = Instant::now();
    let beats = Heartbeat::new()
        .run(&mut out, tokio::time::sleep(duration))
        .await
        .unwrap();
    let elapsed = start.elapsed();

    let lines = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(String::from)
        .collect();
    (beats, lines, elapsed)
}

#[tokio::test(start_paused = true)]
async fn prints_banner_plus_one_line_per_cycle() {
    for cycles in [0u32, 1, 3, 7] {
        let interrupt_at = HEARTBEAT_INTERVAL * cycles + Duration::from_secs(2);
        let (beats, lines, _) = run_for(interrupt_at).await;

        assert_eq!(beats, u64::from(cycles));
        assert_eq!(lines.len(), cycles as usize + 1);
        assert_eq!(lines[0], STARTUP_BANNER);
        assert!(lines[1..].iter().all(|l| l == HEARTBEAT_MESSAGE));
    }
}

#[tokio::test(start_paused = true)]
async fn stops_within_one_interval_of_interrupt() {
    let interrupt_at = HEARTBEAT_INTERVAL * 2 + Duration::from_millis(500);
    let (_, _, elapsed) = run_for(interrupt_at).await;

    assert!(elapsed >= interrupt_at);
    assert!(elapsed < interrupt_at + HEARTBEAT_INTERVAL);
}

#[tokio::test(start_paused = true)]
async fn beats_are_spaced_by_interval() {
    // Interrupt just before the third beat is due.
    let interrupt_at = HEARTBEAT_INTERVAL * 3 - Duration::from_millis(1);
    let (beats, _, _) = run_for(interrupt_at).await;

    assert_eq!(beats, 2);
}
