// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A `Clock` that follows tokio's (possibly paused) time.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use courier_core::Clock;
use tokio::time::Instant;

/// Wall clock anchored at a fixed instant and advanced by tokio time.
///
/// Under `#[tokio::test(start_paused = true)]` every `sleep` auto-advances
/// tokio's clock, and this clock moves with it, so hours of waiting finish
/// instantly and deterministically.
#[derive(Debug, Clone)]
pub struct PausedClock {
    origin: DateTime<Utc>,
    started: Instant,
}

impl PausedClock {
    /// Anchored at 2025-06-01T03:30:00Z (09:00 in Asia/Kolkata).
    ///
    /// Must be created inside a tokio runtime.
    pub fn new() -> Self {
        Self::at(Utc.with_ymd_and_hms(2025, 6, 1, 3, 30, 0).unwrap())
    }

    /// Anchored at `origin`.
    pub fn at(origin: DateTime<Utc>) -> Self {
        Self {
            origin,
            started: Instant::now(),
        }
    }
}

impl Default for PausedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for PausedClock {
    fn now(&self) -> DateTime<Utc> {
        let elapsed = TimeDelta::from_std(self.started.elapsed()).unwrap_or(TimeDelta::MAX);
        self.origin + elapsed
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn advances_with_tokio_time() {
        let clock = PausedClock::new();
        let before = clock.now();
        tokio::time::sleep(Duration::from_secs(90)).await;
        assert_eq!(clock.now() - before, TimeDelta::seconds(90));
    }
}
