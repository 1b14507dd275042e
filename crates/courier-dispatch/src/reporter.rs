// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-of-run failure summary for the administrator.

use courier_core::{FailureReason, FailureRecord, OutgoingMail, SendOutcome};
use tracing::{error, info};

use crate::sender::MessageSender;

/// First line of every report body.
pub const REPORT_HEADER: &str = "The following emails failed to send:\n";

/// What happened to the administrator report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// No failures were recorded, so nothing was sent.
    NothingToReport,
    Sent,
    /// The report itself could not be delivered. Logged, never escalated.
    Failed(FailureReason),
}

/// Sends one summary of all recorded failures.
pub struct FailureReporter {
    sender: MessageSender,
    admin: String,
    subject: String,
}

impl FailureReporter {
    pub fn new(sender: MessageSender, admin: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            sender,
            admin: admin.into(),
            subject: subject.into(),
        }
    }

    pub fn admin(&self) -> &str {
        &self.admin
    }

    /// Send the report if `failures` is non-empty.
    pub async fn report(&self, failures: &[FailureRecord]) -> ReportOutcome {
        if failures.is_empty() {
            info!("all emails sent successfully");
            return ReportOutcome::NothingToReport;
        }

        let mail = OutgoingMail {
            from: self.sender.from_address().to_string(),
            to: self.admin.clone(),
            subject: self.subject.clone(),
            body: render_report(failures),
        };

        match self.sender.deliver(&mail).await {
            SendOutcome::Sent => {
                info!(admin = %self.admin, failures = failures.len(), "failure report sent to admin");
                ReportOutcome::Sent
            }
            SendOutcome::Failed(reason) => {
                error!(admin = %self.admin, %reason, "failed to send failure report to admin");
                ReportOutcome::Failed(reason)
            }
        }
    }
}

/// One line per failure, in the order recorded.
pub fn render_report(failures: &[FailureRecord]) -> String {
    std::iter::once(REPORT_HEADER.to_string())
        .chain(failures.iter().map(|f| {
            format!("- {} ({}) at {}: {}", f.name, f.group, f.email, f.reason)
        }))
        .collect::<Vec<_>>()
        .join("\n")
}
