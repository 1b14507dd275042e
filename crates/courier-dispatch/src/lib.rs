// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sending half of the Courier pipeline.
//!
//! [`Dispatcher`] reads the source once and, row by row, validates, waits,
//! and sends through [`MessageSender`]. Failures are collected in order and
//! handed to [`FailureReporter`] at the end. A rejected sender credential
//! stops the loop; every other failure is recorded and the run moves on.

pub mod orchestrator;
pub mod reporter;
pub mod sender;

pub use orchestrator::{Dispatcher, HaltReason, RunPhase, RunSummary};
pub use reporter::{FailureReporter, REPORT_HEADER, ReportOutcome, render_report};
pub use sender::{MessageSender, classify};
