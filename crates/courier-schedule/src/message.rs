// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The validated, immutable form of one recipient row.

use chrono::{DateTime, NaiveDateTime, Utc};
use courier_core::FailureRecord;
use courier_core::types::FailureReason;

/// A recipient row that passed validation.
///
/// Only [`RowValidator`](crate::RowValidator) can build one, so holding a
/// `ScheduledMessage` means every field is trimmed and non-empty, the address
/// has the expected shape, and the send instant is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledMessage {
    pub(crate) row: usize,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) group: String,
    pub(crate) send_at_local: NaiveDateTime,
    pub(crate) send_at: DateTime<Utc>,
    pub(crate) subject: String,
    pub(crate) body: String,
}

impl ScheduledMessage {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Send time as written in the source zone.
    pub fn send_at_local(&self) -> NaiveDateTime {
        self.send_at_local
    }

    /// Send time as an absolute instant.
    pub fn send_at(&self) -> DateTime<Utc> {
        self.send_at
    }

    /// Explicit subject, or `Automated Email for {group}`.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Label used in wait and send logs.
    pub fn label(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// A failure record for this recipient.
    pub fn failure(&self, reason: FailureReason) -> FailureRecord {
        FailureRecord::new(self.name.as_str(), self.email.as_str(), self.group.as_str(), reason)
    }
}
