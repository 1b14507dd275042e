// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the validator, sender, reporter, and collaborators.

use std::collections::HashMap;

use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

/// The columns a recipient source is expected to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Column {
    #[strum(serialize = "Name")]
    Name,
    #[strum(serialize = "Email")]
    Email,
    #[strum(serialize = "Group")]
    Group,
    #[strum(serialize = "Send Time (IST)")]
    SendTime,
    #[strum(serialize = "Message")]
    Message,
    #[strum(serialize = "Subject")]
    Subject,
}

/// One untrusted row from a recipient source.
///
/// Values are kept exactly as read; trimming and checks happen in the
/// validator. Unknown columns are retained but ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    row: usize,
    fields: HashMap<String, String>,
}

impl RawRecord {
    /// Create an empty record for the given 1-based row number.
    pub fn new(row: usize) -> Self {
        Self {
            row,
            fields: HashMap::new(),
        }
    }

    /// Set a known column value.
    pub fn with(mut self, column: Column, value: impl Into<String>) -> Self {
        self.fields.insert(column.to_string(), value.into());
        self
    }

    /// Insert a value under an arbitrary header name.
    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(header.into(), value.into());
    }

    /// The 1-based row number within the source.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Value of `column`, or the empty string when the column is absent.
    pub fn get(&self, column: Column) -> &str {
        self.fields
            .get(column.to_string().as_str())
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Why a raw record was rejected before any send was attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    /// A required column was empty after trimming.
    #[error("Missing data: {0} is empty")]
    MissingField(Column),

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Invalid time format")]
    InvalidTimeFormat,
}

/// The reason recorded for a row that did not result in a delivered email.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    #[error(transparent)]
    Rejected(#[from] RejectionReason),

    /// The transport refused the sender credential. Fatal for the run.
    #[error("Authentication failed")]
    Authentication,

    #[error("SMTP error: {0}")]
    Transport(String),

    /// The transport returned without error but did not confirm acceptance.
    #[error("Unknown failure")]
    Unknown,

    #[error("Unexpected error: {0}")]
    Unexpected(String),

    /// Caught at the row boundary, outside the send itself.
    #[error("Outer error: {0}")]
    Outer(String),
}

impl FailureReason {
    /// Whether this failure must stop the remaining rows from being processed.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FailureReason::Authentication)
    }
}

/// One row's failure, as reported to the administrator at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    pub name: String,
    pub email: String,
    pub group: String,
    pub reason: FailureReason,
}

impl FailureRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        group: impl Into<String>,
        reason: impl Into<FailureReason>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            group: group.into(),
            reason: reason.into(),
        }
    }
}

/// Result of one send attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Sent,
    Failed(FailureReason),
}

/// A fully composed plain-text message ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// What the transport observed after handing a message to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReceipt {
    /// Whether the final server reply was a positive completion.
    pub accepted: bool,
    /// Reply code and text, for logs.
    pub detail: String,
}

impl TransportReceipt {
    pub fn accepted(detail: impl Into<String>) -> Self {
        Self {
            accepted: true,
            detail: detail.into(),
        }
    }

    pub fn rejected(detail: impl Into<String>) -> Self {
        Self {
            accepted: false,
            detail: detail.into(),
        }
    }
}
