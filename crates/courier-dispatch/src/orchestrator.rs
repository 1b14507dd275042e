// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One pass over the recipient source.
//!
//! A run moves through `Fetching -> Processing -> Reporting -> Done` exactly
//! once. Rows are handled strictly one after another: a long wait for one
//! recipient holds back every later row, even rows that are already due.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use courier_core::{
    Column, CourierError, FailureReason, FailureRecord, RawRecord, RecordSource, SendOutcome,
};
use courier_schedule::{DispatchWaiter, RowValidator, WaitOutcome};
use futures::FutureExt;
use strum::Display;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::reporter::{FailureReporter, ReportOutcome};
use crate::sender::MessageSender;

/// Lifecycle of a run. Never revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RunPhase {
    Fetching,
    Processing,
    Reporting,
    Done,
}

/// Why the row loop stopped before the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// The sender credential was rejected while sending `row`.
    Authentication { row: usize },
    /// Cancellation arrived while waiting for `row`.
    Cancelled { row: usize },
}

/// Everything a finished run observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub sent: usize,
    pub failures: Vec<FailureRecord>,
    /// Rows never validated or sent because the loop halted.
    pub unattempted: usize,
    pub halt: Option<HaltReason>,
    pub report: ReportOutcome,
}

/// Result of one row inside the per-row boundary.
enum RowOutcome {
    Sent,
    Failed(FailureRecord),
    /// The sender credential was rejected. Not recorded; no further rows
    /// may be attempted.
    Fatal,
    Cancelled,
}

/// Drives validation, waiting, sending, and reporting for one source.
pub struct Dispatcher {
    source: Arc<dyn RecordSource>,
    validator: RowValidator,
    waiter: DispatchWaiter,
    sender: MessageSender,
    reporter: FailureReporter,
}

impl Dispatcher {
    pub fn new(
        source: Arc<dyn RecordSource>,
        validator: RowValidator,
        waiter: DispatchWaiter,
        sender: MessageSender,
        reporter: FailureReporter,
    ) -> Self {
        Self {
            source,
            validator,
            waiter,
            sender,
            reporter,
        }
    }

    /// Run the whole pipeline once.
    ///
    /// Only an unreadable source is an error. Row failures end up in
    /// [`RunSummary::failures`]; a failed admin report in
    /// [`RunSummary::report`].
    pub async fn run(&self, cancel: &CancellationToken) -> Result<RunSummary, CourierError> {
        info!(phase = %RunPhase::Fetching, source = %self.source.describe(), "connecting to recipient source");
        let rows = self.source.fetch().await?;
        info!(rows = rows.len(), "recipient source connected");
        if rows.is_empty() {
            warn!("the recipient source is empty");
        }

        info!(phase = %RunPhase::Processing, "processing rows");
        let mut failures = Vec::new();
        let mut sent = 0;
        let mut halt = None;
        let mut unattempted = 0;

        for (index, raw) in rows.iter().enumerate() {
            let outcome = AssertUnwindSafe(self.process_row(raw, cancel))
                .catch_unwind()
                .await
                .unwrap_or_else(|panic| {
                    let detail = panic_message(panic.as_ref());
                    warn!(row = raw.row(), error = %detail, "unexpected error in row");
                    RowOutcome::Failed(record_for(raw, FailureReason::Outer(detail)))
                });

            match outcome {
                RowOutcome::Sent => sent += 1,
                RowOutcome::Failed(record) => failures.push(record),
                RowOutcome::Fatal => {
                    error!(row = raw.row(), "authentication failed, stopping the run");
                    halt = Some(HaltReason::Authentication { row: raw.row() });
                    unattempted = rows.len() - index - 1;
                    break;
                }
                RowOutcome::Cancelled => {
                    halt = Some(HaltReason::Cancelled { row: raw.row() });
                    unattempted = rows.len() - index;
                    break;
                }
            }
        }

        if let Some(reason) = halt {
            warn!(?reason, unattempted, "stopped before the last row");
        }

        info!(phase = %RunPhase::Reporting, failures = failures.len(), "reporting failures");
        let report = self.reporter.report(&failures).await;

        let summary = RunSummary {
            total: rows.len(),
            sent,
            failures,
            unattempted,
            halt,
            report,
        };
        info!(
            phase = %RunPhase::Done,
            total = summary.total,
            sent = summary.sent,
            failed = summary.failures.len(),
            unattempted = summary.unattempted,
            "run complete"
        );
        Ok(summary)
    }

    /// Validate, wait for, and send one row.
    async fn process_row(&self, raw: &RawRecord, cancel: &CancellationToken) -> RowOutcome {
        let msg = match self.validator.validate(raw) {
            Ok(msg) => msg,
            Err(reason) => {
                warn!(row = raw.row(), %reason, "skipping row");
                return RowOutcome::Failed(record_for(raw, reason.into()));
            }
        };

        let resolver = self.validator.resolver();
        info!(
            row = msg.row(),
            recipient = msg.name(),
            local = %resolver.localize(msg.send_at()).format("%Y-%m-%d %H:%M:%S %Z"),
            utc = %msg.send_at().format("%Y-%m-%d %H:%M:%S"),
            "email scheduled"
        );

        match self
            .waiter
            .wait_until(msg.send_at(), &msg.label(), cancel)
            .await
        {
            WaitOutcome::Ready { .. } => {}
            WaitOutcome::Cancelled { .. } => return RowOutcome::Cancelled,
        }

        match self.sender.send(&msg).await {
            SendOutcome::Sent => RowOutcome::Sent,
            SendOutcome::Failed(reason) if reason.is_fatal() => RowOutcome::Fatal,
            SendOutcome::Failed(reason) => RowOutcome::Failed(msg.failure(reason)),
        }
    }
}

/// A failure record built from the raw, trimmed identity columns.
fn record_for(raw: &RawRecord, reason: FailureReason) -> FailureRecord {
    FailureRecord::new(
        raw.get(Column::Name).trim(),
        raw.get(Column::Email).trim(),
        raw.get(Column::Group).trim(),
        reason,
    )
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
