// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw row normalization and validation.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. required fields present (name, email, group, send time, message)
//! 2. email has a `local@domain.tld` shape
//! 3. send time is exactly `YYYY-MM-DD HH:MM:SS`

use std::sync::LazyLock;

use chrono::NaiveDateTime;
pub use courier_core::is_valid_email;
use courier_core::{Column, RawRecord, RejectionReason};
use regex::Regex;

use crate::message::ScheduledMessage;
use crate::resolver::TimeResolver;

/// Layout of the send-time column.
pub const SEND_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// chrono alone accepts unpadded fields, so the layout is pinned first.
static SEND_TIME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap());

/// Columns that must be non-empty, in the order they are checked.
const REQUIRED: [Column; 5] = [
    Column::Name,
    Column::Email,
    Column::Group,
    Column::SendTime,
    Column::Message,
];

/// Turns raw rows into [`ScheduledMessage`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowValidator {
    resolver: TimeResolver,
}

impl RowValidator {
    pub fn new(resolver: TimeResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &TimeResolver {
        &self.resolver
    }

    /// Validate one row. Has no side effects.
    pub fn validate(&self, raw: &RawRecord) -> Result<ScheduledMessage, RejectionReason> {
        let field = |column| raw.get(column).trim();

        if let Some(missing) = REQUIRED.into_iter().find(|c| field(*c).is_empty()) {
            return Err(RejectionReason::MissingField(missing));
        }

        let email = field(Column::Email);
        if !is_valid_email(email) {
            return Err(RejectionReason::InvalidEmailFormat);
        }

        let send_at_local = parse_send_time(field(Column::SendTime))?;
        let group = field(Column::Group);
        let subject = match field(Column::Subject) {
            "" => format!("Automated Email for {group}"),
            explicit => explicit.to_string(),
        };

        Ok(ScheduledMessage {
            row: raw.row(),
            name: field(Column::Name).to_string(),
            email: email.to_string(),
            group: group.to_string(),
            send_at_local,
            send_at: self.resolver.resolve(send_at_local),
            subject,
            body: field(Column::Message).to_string(),
        })
    }
}

/// Parse a send time written exactly as `YYYY-MM-DD HH:MM:SS`.
pub fn parse_send_time(value: &str) -> Result<NaiveDateTime, RejectionReason> {
    if !SEND_TIME_SHAPE.is_match(value) {
        return Err(RejectionReason::InvalidTimeFormat);
    }
    NaiveDateTime::parse_from_str(value, SEND_TIME_FORMAT)
        .map_err(|_| RejectionReason::InvalidTimeFormat)
}
