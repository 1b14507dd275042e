// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests: config text and a CSV sheet in, captured mail out.
//!
//! Only the SMTP transport is replaced; config loading, the CSV source,
//! validation, waiting (on tokio's paused clock), and reporting are real.

use std::io::Write;
use std::sync::Arc;

use courier_config::load_and_validate_str;
use courier_core::TransportError;
use courier_dispatch::{Dispatcher, FailureReporter, HaltReason, MessageSender, ReportOutcome};
use courier_schedule::{DispatchWaiter, RowValidator, TimeResolver};
use courier_sheet::CsvSource;
use courier_test_utils::{MockTransport, PausedClock};
use tempfile::NamedTempFile;
use tokio_util::sync::CancellationToken;

const CONFIG: &str = r#"
[smtp]
sender = "ops@example.com"
admin = "boss@example.com"

[schedule]
source_zone = "Asia/Kolkata"
poll_interval_secs = 30

[message]
signature = "The Courier Team"
"#;

fn sheet(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Name,Email,Group,Send Time (IST),Message,Subject").unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

fn dispatcher(sheet: &NamedTempFile, transport: &Arc<MockTransport>) -> Dispatcher {
    let config = load_and_validate_str(CONFIG).expect("valid config");
    let sender = MessageSender::new(
        transport.clone(),
        config.smtp.sender.as_str(),
        config.message.signature.as_str(),
    );
    let reporter = FailureReporter::new(
        sender.clone(),
        config.smtp.admin_address(),
        config.message.report_subject.as_str(),
    );
    Dispatcher::new(
        Arc::new(CsvSource::new(sheet.path())),
        RowValidator::new(TimeResolver::new(config.schedule.zone().unwrap())),
        DispatchWaiter::new(Arc::new(PausedClock::new()), config.schedule.poll_interval()),
        sender,
        reporter,
    )
}

#[tokio::test(start_paused = true)]
async fn sheet_to_inbox() {
    let sheet = sheet(&[
        "Asha,asha@example.com,Mentors,2025-06-01 08:59:00,Welcome to the cohort.,",
        "Ravi,ravi@example.com,Interns,2025-06-01 09:05:00,Your badge is ready.,Badge pickup",
        "Meera,,Mentors,2025-06-01 09:00:00,Hello,",
    ]);
    let transport = Arc::new(MockTransport::new());
    let started = tokio::time::Instant::now();

    let summary = dispatcher(&sheet, &transport)
        .run(&CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(summary.sent, 2);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].name, "Meera");
    assert_eq!(summary.failures[0].reason.to_string(), "Missing data: Email is empty");
    // Five minutes of waiting for Ravi at a 30s poll interval.
    assert_eq!(started.elapsed().as_secs(), 300);

    let attempts = transport.attempts().await;
    assert_eq!(attempts.len(), 3);
    assert_eq!(attempts[0].subject, "Automated Email for Mentors");
    assert_eq!(
        attempts[0].body,
        "Dear Asha,\n\nWelcome to the cohort.\n\nRegards,\nThe Courier Team"
    );
    assert_eq!(attempts[1].subject, "Badge pickup");
    assert_eq!(attempts[2].to, "boss@example.com");
    assert_eq!(attempts[2].subject, "Email Sending Failure Report");
    assert!(
        attempts[2]
            .body
            .contains("- Meera (Mentors) at : Missing data: Email is empty")
    );
}

#[tokio::test(start_paused = true)]
async fn rejected_credential_stops_the_sheet() {
    let sheet = sheet(&[
        "Asha,asha@example.com,Mentors,2025-06-01 08:00:00,Hi,",
        "Ravi,ravi@example.com,Interns,2025-06-01 08:00:00,Hi,",
        "Meera,meera@example.com,Mentors,2025-06-01 08:00:00,Hi,",
    ]);
    let transport = Arc::new(MockTransport::new());
    transport
        .push_outcome(Err(TransportError::Authentication(
            "535 5.7.8 Username and Password not accepted".into(),
        )))
        .await;

    let summary = dispatcher(&sheet, &transport)
        .run(&CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(summary.halt, Some(HaltReason::Authentication { row: 1 }));
    assert_eq!(summary.unattempted, 2);
    assert_eq!(summary.sent, 0);
    assert!(summary.failures.is_empty());
    assert_eq!(summary.report, ReportOutcome::NothingToReport);
    assert_eq!(transport.recipients().await, vec!["asha@example.com"]);
}

#[tokio::test(start_paused = true)]
async fn missing_sheet_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_and_validate_str(CONFIG).unwrap();
    let transport = Arc::new(MockTransport::new());
    let sender = MessageSender::new(transport.clone(), "ops@example.com", "x");
    let dispatcher = Dispatcher::new(
        Arc::new(CsvSource::new(dir.path().join("recipients.csv"))),
        RowValidator::default(),
        DispatchWaiter::new(Arc::new(PausedClock::new()), config.schedule.poll_interval()),
        sender.clone(),
        FailureReporter::new(sender, config.smtp.admin_address(), "r"),
    );

    assert!(dispatcher.run(&CancellationToken::new()).await.is_err());
    assert_eq!(transport.attempt_count().await, 0);
}
