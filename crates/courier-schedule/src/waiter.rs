// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Blocking wait until a recipient's send instant.
//!
//! The waiter polls "now" at a fixed interval rather than sleeping straight to
//! the target, logging progress on every poll. It is the only suspension point
//! in a run and the only place cancellation is observed.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use courier_core::Clock;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Default gap between polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// How a wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The target was reached after `polls` sleeps (0 if already due).
    Ready { polls: u32 },
    /// The token was cancelled after `polls` sleeps had started.
    Cancelled { polls: u32 },
}

impl WaitOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, WaitOutcome::Ready { .. })
    }
}

/// Sleeps in fixed steps until a target instant.
pub struct DispatchWaiter {
    clock: Arc<dyn Clock>,
    interval: Duration,
}

impl DispatchWaiter {
    pub fn new(clock: Arc<dyn Clock>, interval: Duration) -> Self {
        Self { clock, interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until `target`, or until `cancel` fires.
    ///
    /// Returns at once, without logging, when `target` is not in the future.
    pub async fn wait_until(
        &self,
        target: DateTime<Utc>,
        label: &str,
        cancel: &CancellationToken,
    ) -> WaitOutcome {
        let mut polls = 0;
        loop {
            let now = self.clock.now();
            if now >= target {
                return WaitOutcome::Ready { polls };
            }

            info!(
                recipient = label,
                now = %now.format("%H:%M:%S"),
                remaining_secs = (target - now).num_seconds(),
                "waiting to send"
            );
            polls += 1;

            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!(recipient = label, "wait cancelled");
                    return WaitOutcome::Cancelled { polls };
                }
                _ = tokio::time::sleep(self.interval) => {}
            }
        }
    }
}
