// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `courier run` command implementation.
//!
//! Wires the CSV source, the SMTP transport, and the system clock into a
//! [`Dispatcher`] and runs it once. Ctrl+C or SIGTERM stops the current wait;
//! failures collected up to that point are still reported.

use std::path::PathBuf;
use std::sync::Arc;

use courier_config::CourierConfig;
use courier_core::{CourierError, MailTransport, SystemClock};
use courier_dispatch::{Dispatcher, FailureReporter, HaltReason, MessageSender, RunSummary};
use courier_schedule::{DispatchWaiter, RowValidator, TimeResolver};
use courier_sheet::CsvSource;
use courier_smtp::SmtpTransport;
use tracing::info;

use crate::shutdown;

/// Runs the `courier run` command.
pub async fn run_dispatch(
    config: &CourierConfig,
    source: Option<PathBuf>,
) -> Result<RunSummary, CourierError> {
    let transport = SmtpTransport::from_config(&config.smtp)?;
    info!(transport = transport.name(), "mail transport ready");

    let dispatcher = build_dispatcher(config, source, Arc::new(transport))?;
    let cancel = shutdown::install_signal_handler();
    dispatcher.run(&cancel).await
}

/// Assemble a dispatcher from config around an already built transport.
pub fn build_dispatcher(
    config: &CourierConfig,
    source: Option<PathBuf>,
    transport: Arc<dyn MailTransport>,
) -> Result<Dispatcher, CourierError> {
    let zone = config
        .schedule
        .zone()
        .map_err(|e| CourierError::Config(e.to_string()))?;
    let source_path = source.unwrap_or_else(|| PathBuf::from(&config.source.path));

    let sender = MessageSender::new(
        transport,
        config.smtp.sender.trim(),
        config.message.signature.as_str(),
    );
    let reporter = FailureReporter::new(
        sender.clone(),
        config.smtp.admin_address(),
        config.message.report_subject.as_str(),
    );

    Ok(Dispatcher::new(
        Arc::new(CsvSource::new(source_path)),
        RowValidator::new(TimeResolver::new(zone)),
        DispatchWaiter::new(Arc::new(SystemClock), config.schedule.poll_interval()),
        sender,
        reporter,
    ))
}

/// Process exit code for a finished run.
///
/// Row failures alone still exit 0; a rejected credential exits 2 and an
/// interrupted run 130.
pub fn exit_code(summary: &RunSummary) -> i32 {
    match summary.halt {
        None => 0,
        Some(HaltReason::Authentication { .. }) => 2,
        Some(HaltReason::Cancelled { .. }) => 130,
    }
}
